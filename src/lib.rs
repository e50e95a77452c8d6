//! Form field components for Leptos.
//!
//! Three thin wrappers over native form controls: [`TextField`] (`<input>`), [`DropdownField`]
//! (`<select>` with a chevron) and [`MultilineField`] (`<textarea>`). Each one forwards its
//! attributes, composes its `class` from defaults, error classes and a caller override, and hands
//! the native element to the caller through `node_ref`.

#![deny(clippy::todo, clippy::unimplemented)]
#![allow(non_snake_case)]

pub mod components;

pub use components::{
  DROPDOWN_CONTAINER_CLASSES, DROPDOWN_FIELD_CLASSES, DROPDOWN_ICON_CLASSES, DropdownField, ERROR_CLASSES, Icon,
  MULTILINE_FIELD_CLASSES, MultilineField, TEXT_FIELD_CLASSES, TextField,
};
