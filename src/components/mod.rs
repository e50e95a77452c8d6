pub mod dropdown_field;
pub mod icon;
pub mod multiline_field;
pub mod text_field;

pub use dropdown_field::{
  DROPDOWN_CONTAINER_CLASSES, DROPDOWN_FIELD_CLASSES, DROPDOWN_ICON_CLASSES, DropdownField, dropdown_field_class,
};
pub use icon::Icon;
pub use multiline_field::{MULTILINE_FIELD_CLASSES, MultilineField, multiline_field_class};
pub use text_field::{TEXT_FIELD_CLASSES, TextField, text_field_class};

/// Error border and error focus ring, appended when a field is in the error state.
pub const ERROR_CLASSES: &str = "border-destructive focus-visible:ring-destructive";

pub(crate) fn error_classes(error: bool) -> &'static str {
  if error { ERROR_CLASSES } else { "" }
}
