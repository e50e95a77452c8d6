use leptos::html;
use leptos::prelude::*;
use tailwind_fuse::*;

use super::error_classes;

pub const TEXT_FIELD_CLASSES: &str = "flex h-9 w-full min-w-0 rounded-md border border-input bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm file:font-medium file:text-foreground disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm dark:bg-input/30 focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50";

/// Class list of a [`TextField`]: defaults, then error classes, then the override, all kept as given.
pub fn text_field_class(error: bool, class: &str) -> String {
  tw_join!(TEXT_FIELD_CLASSES, error_classes(error), class)
}

/// Single-line text input.
#[component]
pub fn TextField(
  /// Native `type`, `text` by default.
  #[prop(into, default = "text".to_string())]
  input_type: String,
  #[prop(into, optional)] id: MaybeProp<String>,
  #[prop(into, optional)] name: MaybeProp<String>,
  #[prop(into, optional)] placeholder: MaybeProp<String>,
  #[prop(into, optional)] autocomplete: MaybeProp<String>,
  #[prop(into, optional)] inputmode: MaybeProp<String>,
  #[prop(into, optional)] pattern: MaybeProp<String>,
  #[prop(into, optional)] minlength: MaybeProp<u32>,
  #[prop(into, optional)] maxlength: MaybeProp<u32>,
  #[prop(into, optional)] disabled: Signal<bool>,
  #[prop(into, optional)] readonly: Signal<bool>,
  #[prop(into, optional)] required: Signal<bool>,
  #[prop(optional)] autofocus: bool,
  #[prop(optional)] value: RwSignal<String>,
  /// Switches to the error border and focus ring.
  #[prop(into, optional)]
  error: Signal<bool>,
  #[prop(into, optional)] class: Signal<String>,
  #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
  view! {
    <input
      data-slot="input"
      type=input_type
      id=move || id.get()
      name=move || name.get()
      placeholder=move || placeholder.get()
      autocomplete=move || autocomplete.get()
      inputmode=move || inputmode.get()
      pattern=move || pattern.get()
      minlength=move || minlength.get().map(|n| n.to_string())
      maxlength=move || maxlength.get().map(|n| n.to_string())
      disabled=move || disabled.get()
      readonly=move || readonly.get()
      required=move || required.get()
      autofocus=autofocus
      aria-invalid=move || error.get().then_some("true")
      class=move || text_field_class(error.get(), class.read().as_str())
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
  use crate::components::ERROR_CLASSES;

  #[test]
  fn no_error_classes_by_default() {
    let class = text_field_class(false, "");
    assert_eq!(class, TEXT_FIELD_CLASSES);
    assert!(!class.contains("border-destructive"));
    assert!(!class.contains("ring-destructive"));
  }

  #[test]
  fn error_and_override_are_appended_verbatim() {
    let class = text_field_class(true, "extra border-input");
    assert!(class.starts_with(TEXT_FIELD_CLASSES));
    assert!(class.contains(ERROR_CLASSES));
    assert!(class.ends_with(" extra border-input"));
    assert_eq!(class.split_whitespace().filter(|c| *c == "border-input").count(), 2);
  }
}
