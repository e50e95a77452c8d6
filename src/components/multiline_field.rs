use leptos::html;
use leptos::prelude::*;
use tailwind_fuse::*;

use super::error_classes;

pub const MULTILINE_FIELD_CLASSES: &str = "flex min-h-[80px] w-full rounded-md border border-input bg-transparent px-3 py-2 text-base shadow-xs transition-[color,box-shadow] outline-none placeholder:text-muted-foreground disabled:cursor-not-allowed disabled:opacity-50 md:text-sm dark:bg-input/30 focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50";

pub fn multiline_field_class(error: bool, class: &str) -> String {
  tw_merge!(MULTILINE_FIELD_CLASSES, error_classes(error), class)
}

/// Multi-line text area.
#[component]
pub fn MultilineField(
  #[prop(into, optional)] id: MaybeProp<String>,
  #[prop(into, optional)] name: MaybeProp<String>,
  #[prop(into, optional)] placeholder: MaybeProp<String>,
  #[prop(into, optional)] rows: MaybeProp<u32>,
  #[prop(into, optional)] maxlength: MaybeProp<u32>,
  /// `soft`, `hard` or `off`.
  #[prop(into, optional)]
  wrap: MaybeProp<String>,
  #[prop(into, optional)] disabled: Signal<bool>,
  #[prop(into, optional)] readonly: Signal<bool>,
  #[prop(into, optional)] required: Signal<bool>,
  #[prop(optional)] autofocus: bool,
  #[prop(optional)] value: RwSignal<String>,
  #[prop(into, optional)] error: Signal<bool>,
  #[prop(into, optional)] class: Signal<String>,
  #[prop(optional)] node_ref: NodeRef<html::Textarea>,
) -> impl IntoView {
  view! {
    <textarea
      data-slot="textarea"
      id=move || id.get()
      name=move || name.get()
      placeholder=move || placeholder.get()
      rows=move || rows.get().map(|n| n.to_string())
      maxlength=move || maxlength.get().map(|n| n.to_string())
      wrap=move || wrap.get()
      disabled=move || disabled.get()
      readonly=move || readonly.get()
      required=move || required.get()
      autofocus=autofocus
      aria-invalid=move || error.get().then_some("true")
      class=move || multiline_field_class(error.get(), class.read().as_str())
      prop:value=value
      on:input:target=move |ev| {
        value.set(ev.target().value());
      }
      node_ref=node_ref
    />
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn min_height_is_part_of_defaults() {
    let class = multiline_field_class(false, "");
    assert!(class.split_whitespace().any(|c| c == "min-h-[80px]"));
    assert!(!class.contains("destructive"));
  }

  #[test]
  fn error_state() {
    let class = multiline_field_class(true, "");
    assert!(class.contains("border-destructive"));
    assert!(class.contains("focus-visible:ring-destructive"));
    assert!(class.split_whitespace().any(|c| c == "min-h-[80px]"));
  }

  #[test]
  fn override_displaces_conflicting_defaults() {
    let class = multiline_field_class(false, "min-h-32 rounded-none resize-none");
    let tokens = class.split_whitespace().collect::<Vec<_>>();
    assert!(!tokens.contains(&"min-h-[80px]"));
    assert!(tokens.contains(&"min-h-32"));
    assert!(!tokens.contains(&"rounded-md"));
    assert!(tokens.contains(&"rounded-none"));
    assert!(tokens.contains(&"w-full"));
    assert_eq!(tokens.last(), Some(&"resize-none"));
  }
}
