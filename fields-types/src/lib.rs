//! Serializable descriptions of forms built from the field components.
//!
//! A form is described as JSON, checked with [`FormSpec::validate`] and then rendered by the caller.

#![deny(clippy::todo, clippy::unimplemented)]

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

mod error;

pub use error::FormSpecError;

/// Native `type` of a single-line input.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
  #[default]
  Text,
  Email,
  Password,
  Search,
  Tel,
  Url,
  Number,
  Date,
  Time,
  DatetimeLocal,
}

impl InputKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Text => "text",
      Self::Email => "email",
      Self::Password => "password",
      Self::Search => "search",
      Self::Tel => "tel",
      Self::Url => "url",
      Self::Number => "number",
      Self::Date => "date",
      Self::Time => "time",
      Self::DatetimeLocal => "datetime-local",
    }
  }
}

/// Attributes shared by every field kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CommonSpec {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub placeholder: Option<String>,
  #[serde(default)]
  pub disabled: bool,
  #[serde(default)]
  pub required: bool,
  /// Renders the field in the error presentation.
  #[serde(default)]
  pub error: bool,
  /// Extra classes appended after the defaults.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub class: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TextSpec {
  #[serde(flatten)]
  pub common: CommonSpec,
  #[serde(default)]
  pub input_type: InputKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub min_length: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_length: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OptionSpec {
  pub value: String,
  pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DropdownSpec {
  #[serde(flatten)]
  pub common: CommonSpec,
  pub options: Vec<OptionSpec>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub selected: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct MultilineSpec {
  #[serde(flatten)]
  pub common: CommonSpec,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rows: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_length: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
  Text(TextSpec),
  Dropdown(DropdownSpec),
  Multiline(MultilineSpec),
}

impl FieldSpec {
  pub fn common(&self) -> &CommonSpec {
    match self {
      Self::Text(spec) => &spec.common,
      Self::Dropdown(spec) => &spec.common,
      Self::Multiline(spec) => &spec.common,
    }
  }

  fn validate(&self, index: usize) -> Result<(), FormSpecError> {
    let name = &self.common().name;
    if name.trim().is_empty() {
      return Err(FormSpecError::EmptyName { index });
    }

    match self {
      // Length bounds are forwarded to the input as they are; checking values is the browser's job.
      Self::Text(_) => {}
      Self::Dropdown(spec) => {
        if spec.options.is_empty() {
          return Err(FormSpecError::NoOptions(name.clone()));
        }
        let mut values = HashSet::new();
        for option in &spec.options {
          if !values.insert(option.value.as_str()) {
            return Err(FormSpecError::DuplicateOption {
              field: name.clone(),
              value: option.value.clone(),
            });
          }
        }
        if let Some(selected) = &spec.selected
          && !values.contains(selected.as_str())
        {
          return Err(FormSpecError::UnknownSelection {
            field: name.clone(),
            value: selected.clone(),
          });
        }
      }
      Self::Multiline(spec) => {
        if spec.rows == Some(0) {
          return Err(FormSpecError::ZeroRows(name.clone()));
        }
      }
    }

    Ok(())
  }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct FormSpec {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  pub fields: Vec<FieldSpec>,
}

impl FormSpec {
  /// Parses and validates a form description.
  pub fn from_json(json: &str) -> Result<Self, FormSpecError> {
    let form = serde_json::from_str::<FormSpec>(json)?;
    form.validate()?;
    Ok(form)
  }

  pub fn validate(&self) -> Result<(), FormSpecError> {
    let mut names = HashSet::new();
    for (index, field) in self.fields.iter().enumerate() {
      field.validate(index)?;
      if !names.insert(field.common().name.as_str()) {
        return Err(FormSpecError::DuplicateName(field.common().name.clone()));
      }
    }

    tracing::debug!(title = ?self.title, fields = self.fields.len(), "form description is valid");
    Ok(())
  }
}
