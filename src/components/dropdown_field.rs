use leptos::html;
use leptos::prelude::*;
use tailwind_fuse::*;

use super::error_classes;
use super::icon::Icon;

pub const DROPDOWN_CONTAINER_CLASSES: &str = "relative w-full";
pub const DROPDOWN_FIELD_CLASSES: &str = "flex h-9 w-full min-w-0 appearance-none rounded-md border border-input bg-transparent py-1 pr-9 pl-3 text-base shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm dark:bg-input/30 focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50";
pub const DROPDOWN_ICON_CLASSES: &str = "pointer-events-none absolute top-1/2 right-3 size-4 -translate-y-1/2 opacity-50";

/// Class list of the `<select>` inside a [`DropdownField`].
pub fn dropdown_field_class(error: bool, class: &str) -> String {
  tw_merge!(DROPDOWN_FIELD_CLASSES, error_classes(error), class)
}

/// Native `<select>` with a decorative chevron at its right edge.
///
/// `children` are the `<option>` elements. `node_ref` receives the `<select>`, not the wrapper.
/// When `value` is given it is bound both ways: user changes are written into it, and its
/// current value is applied to the mounted `<select>` once the options exist.
#[component]
pub fn DropdownField(
  #[prop(into, optional)] id: MaybeProp<String>,
  #[prop(into, optional)] name: MaybeProp<String>,
  #[prop(into, optional)] disabled: Signal<bool>,
  #[prop(into, optional)] required: Signal<bool>,
  #[prop(optional)] multiple: bool,
  #[prop(optional)] autofocus: bool,
  #[prop(optional)] value: Option<RwSignal<String>>,
  #[prop(into, optional)] error: Signal<bool>,
  #[prop(into, optional)] class: Signal<String>,
  #[prop(optional)] node_ref: NodeRef<html::Select>,
  children: Children,
) -> impl IntoView {
  // Runs after mount, so the children are already in place when the value is applied.
  Effect::new(move |_| {
    if let Some(value) = value
      && let Some(select) = node_ref.get()
    {
      select.set_value(&value.read());
    }
  });

  view! {
    <div data-slot="dropdown" class=DROPDOWN_CONTAINER_CLASSES>
      <select
        data-slot="dropdown-select"
        id=move || id.get()
        name=move || name.get()
        disabled=move || disabled.get()
        required=move || required.get()
        multiple=multiple
        autofocus=autofocus
        aria-invalid=move || error.get().then_some("true")
        class=move || dropdown_field_class(error.get(), class.read().as_str())
        on:change:target=move |ev| {
          if let Some(value) = value {
            value.set(ev.target().value());
          }
        }
        node_ref=node_ref
      >
        {children()}
      </select>
      <Icon icon=icondata::LuChevronDown class=DROPDOWN_ICON_CLASSES />
    </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tokens(class: &str) -> Vec<&str> {
    class.split_whitespace().collect()
  }

  #[test]
  fn default_select_classes() {
    let class = dropdown_field_class(false, "");
    let tokens = tokens(&class);
    for default in DROPDOWN_FIELD_CLASSES.split_whitespace() {
      assert!(tokens.contains(&default), "missing default class `{default}`");
    }
    assert!(!class.contains("destructive"));
  }

  #[test]
  fn error_classes_are_added() {
    let class = dropdown_field_class(true, "");
    let tokens = tokens(&class);
    assert!(tokens.contains(&"border-destructive"));
    assert!(tokens.contains(&"focus-visible:ring-destructive"));
    assert!(tokens.contains(&"border"));
  }

  #[test]
  fn override_displaces_conflicting_defaults() {
    let class = dropdown_field_class(true, "h-12 rounded-lg tracking-wide extra");
    let tokens = tokens(&class);
    assert!(tokens.contains(&"h-12"));
    assert!(!tokens.contains(&"h-9"));
    assert!(tokens.contains(&"rounded-lg"));
    assert!(!tokens.contains(&"rounded-md"));
    assert!(tokens.contains(&"w-full"));
    assert!(tokens.contains(&"focus-visible:ring-destructive"));
    assert!(tokens.contains(&"extra"));
  }

  #[test]
  fn override_merges_with_itself() {
    let class = dropdown_field_class(false, "tracking-tight flex-1 tracking-wide flex-none");
    let tokens = tokens(&class);
    assert!(tokens.contains(&"tracking-wide"));
    assert!(!tokens.contains(&"tracking-tight"));
    assert!(tokens.contains(&"flex-none"));
    assert!(!tokens.contains(&"flex-1"));
  }

  #[test]
  fn icon_classes_do_not_depend_on_error() {
    let tokens = tokens(DROPDOWN_ICON_CLASSES);
    assert!(tokens.contains(&"absolute"));
    assert!(tokens.contains(&"right-3"));
    assert!(tokens.contains(&"pointer-events-none"));
  }
}
