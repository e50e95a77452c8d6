#![deny(clippy::todo, clippy::unimplemented)]
#![allow(non_snake_case)]

use fields_types::{DropdownSpec, FieldSpec, FormSpec, MultilineSpec, TextSpec};
use impulse_fields::{DropdownField, MultilineField, TextField};
use impulse_ui_kit::prelude::*;

const CONTACT_FORM: &str = include_str!("../forms/contact.json");

fn main() {
  let log_level = if cfg!(debug_assertions) {
    log::Level::Debug
  } else {
    log::Level::Info
  };
  setup_app(log_level, Box::new(move || view! { <GalleryApp /> }.into_any()))
}

#[component]
fn GalleryApp() -> impl IntoView {
  match FormSpec::from_json(CONTACT_FORM) {
    Ok(form) => {
      log::info!("Form `{}` is loaded with {} fields.", form.title.as_deref().unwrap_or_default(), form.fields.len());
      view! { <FormView form /> }.into_any()
    }
    Err(e) => {
      log::error!("Can't load the form description due to: {}!", e);
      view! {
        <p class="m-8 text-destructive">{format!("Can't load the form description: {e}")}</p>
      }
      .into_any()
    }
  }
}

#[component]
fn FormView(form: FormSpec) -> impl IntoView {
  view! {
    <div class="flex flex-col mx-auto gap-4 py-8 w-2/5">
      {form.title.map(|title| view! { <p class="text-xl text-gray-600 dark:text-gray-300">{title}</p> })}
      {form.fields.into_iter().map(|field| view! { <FieldRow field /> }).collect_view()}
    </div>
  }
}

#[component]
fn FieldRow(field: FieldSpec) -> impl IntoView {
  let label = field.common().label.clone();
  let name = field.common().name.clone();

  let control = match field {
    FieldSpec::Text(spec) => view! { <TextFieldControl spec /> }.into_any(),
    FieldSpec::Dropdown(spec) => view! { <DropdownFieldControl spec /> }.into_any(),
    FieldSpec::Multiline(spec) => view! { <MultilineFieldControl spec /> }.into_any(),
  };

  view! {
    <label class="flex flex-col gap-1 text-sm font-medium" for=name>
      {label}
      {control}
    </label>
  }
}

#[component]
fn TextFieldControl(spec: TextSpec) -> impl IntoView {
  let value = RwSignal::new(spec.value.unwrap_or_default());
  let common = spec.common;

  let field_name = common.name.clone();
  Effect::new(move |_| log::debug!("`{}` = {:?}", field_name, value.get()));

  view! {
    <TextField
      input_type=spec.input_type.as_str()
      id=common.name.clone()
      name=common.name.clone()
      placeholder=common.placeholder.clone()
      minlength=spec.min_length
      maxlength=spec.max_length
      disabled=common.disabled
      required=common.required
      error=common.error
      class=common.class.clone().unwrap_or_default()
      value
    />
  }
}

#[component]
fn DropdownFieldControl(spec: DropdownSpec) -> impl IntoView {
  let selected = spec
    .selected
    .clone()
    .or_else(|| spec.options.first().map(|option| option.value.clone()));
  let value = RwSignal::new(selected.clone().unwrap_or_default());
  let common = spec.common;

  let field_name = common.name.clone();
  Effect::new(move |_| log::debug!("`{}` = {:?}", field_name, value.get()));

  view! {
    <DropdownField
      id=common.name.clone()
      name=common.name.clone()
      disabled=common.disabled
      required=common.required
      error=common.error
      class=common.class.clone().unwrap_or_default()
      value
    >
      {spec
        .options
        .into_iter()
        .map(|option| {
          let is_selected = selected.as_deref() == Some(option.value.as_str());
          view! {
            <option value=option.value selected=is_selected>
              {option.label}
            </option>
          }
        })
        .collect_view()}
    </DropdownField>
  }
}

#[component]
fn MultilineFieldControl(spec: MultilineSpec) -> impl IntoView {
  let value = RwSignal::new(spec.value.unwrap_or_default());
  let common = spec.common;

  let field_name = common.name.clone();
  Effect::new(move |_| log::debug!("`{}` = {:?}", field_name, value.get()));

  view! {
    <MultilineField
      id=common.name.clone()
      name=common.name.clone()
      placeholder=common.placeholder.clone()
      rows=spec.rows
      maxlength=spec.max_length
      disabled=common.disabled
      required=common.required
      error=common.error
      class=common.class.clone().unwrap_or_default()
      value
    />
  }
}

#[cfg(test)]
mod tests {
  use super::CONTACT_FORM;
  use fields_types::{FieldSpec, FormSpec};

  #[test]
  fn bundled_form_is_valid() {
    let form = FormSpec::from_json(CONTACT_FORM).unwrap();
    assert_eq!(form.fields.len(), 4);
    assert!(matches!(form.fields[2], FieldSpec::Dropdown(_)));
  }
}
