#[derive(Debug, thiserror::Error)]
pub enum FormSpecError {
  #[error("can't parse the form description: {0}")]
  Parse(#[from] serde_json::Error),
  #[error("field #{index} has an empty name")]
  EmptyName { index: usize },
  #[error("field name `{0}` is used more than once")]
  DuplicateName(String),
  #[error("dropdown `{0}` has no options")]
  NoOptions(String),
  #[error("dropdown `{field}` repeats option value `{value}`")]
  DuplicateOption { field: String, value: String },
  #[error("dropdown `{field}` selects `{value}`, which is not one of its options")]
  UnknownSelection { field: String, value: String },
  #[error("multiline field `{0}` must have at least one row")]
  ZeroRows(String),
}
