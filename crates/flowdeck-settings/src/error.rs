use std::path::PathBuf;

use crate::config::FieldError;

/// Errors raised while loading or using provider settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
  /// One or more required fields are empty.
  #[error("invalid provider settings: {}", join_messages(.0))]
  Validation(Vec<FieldError>),

  /// The settings file could not be read.
  #[error("failed to read settings file {}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The settings document is not valid JSON for a provider config.
  #[error("failed to parse settings: {0}")]
  Parse(#[from] serde_json::Error),

  /// Services were requested before the provider app was initialized.
  #[error("provider not initialized")]
  NotInitialized,
}

impl SettingsError {
  /// Field errors for a validation failure, empty otherwise.
  pub fn field_errors(&self) -> &[FieldError] {
    match self {
      SettingsError::Validation(errors) => errors,
      _ => &[],
    }
  }
}

fn join_messages(errors: &[FieldError]) -> String {
  errors
    .iter()
    .map(|e| e.message.as_str())
    .collect::<Vec<_>>()
    .join(", ")
}

/// Errors reported by an [`Initializer`](crate::Initializer).
#[derive(Debug, thiserror::Error)]
pub enum InitError {
  /// The provider rejected the configuration.
  #[error("provider rejected configuration: {message}")]
  Rejected { message: String },
}
