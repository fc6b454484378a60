use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Credentials for the external provider project.
///
/// Keys are serialized with the provider's own names so a config snippet
/// copied from the provider console loads unchanged:
///
/// ```json
/// {
///   "apiKey": "AIza...",
///   "authDomain": "my-project.firebaseapp.com",
///   "projectId": "my-project",
///   "storageBucket": "my-project.appspot.com",
///   "messagingSenderId": "123456789",
///   "appId": "1:123456789:web:abcdef",
///   "databaseURL": "https://my-project.firebaseio.com"
/// }
/// ```
///
/// Missing keys deserialize as empty strings and are reported by
/// [`ProviderConfig::validate`], not by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderConfig {
  pub api_key: String,
  pub auth_domain: String,
  pub project_id: String,
  pub storage_bucket: String,
  pub messaging_sender_id: String,
  pub app_id: String,
  #[serde(rename = "databaseURL", skip_serializing_if = "Option::is_none")]
  pub database_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub measurement_id: Option<String>,
}

/// The required fields of a [`ProviderConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigField {
  ApiKey,
  AuthDomain,
  ProjectId,
  StorageBucket,
  MessagingSenderId,
  AppId,
}

impl ConfigField {
  /// Required fields in form order.
  pub const REQUIRED: [ConfigField; 6] = [
    ConfigField::ApiKey,
    ConfigField::AuthDomain,
    ConfigField::ProjectId,
    ConfigField::StorageBucket,
    ConfigField::MessagingSenderId,
    ConfigField::AppId,
  ];

  /// Form label, e.g. "API Key".
  pub fn label(&self) -> &'static str {
    match self {
      ConfigField::ApiKey => "API Key",
      ConfigField::AuthDomain => "Auth Domain",
      ConfigField::ProjectId => "Project ID",
      ConfigField::StorageBucket => "Storage Bucket",
      ConfigField::MessagingSenderId => "Messaging Sender ID",
      ConfigField::AppId => "App ID",
    }
  }
}

impl fmt::Display for ConfigField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// A single failed field check, shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field: ConfigField,
  pub message: String,
}

impl FieldError {
  fn required(field: ConfigField) -> Self {
    Self {
      field,
      message: format!("{} is required", field.label()),
    }
  }
}

impl ProviderConfig {
  /// Parse a config from a JSON document.
  pub fn from_json(json: &str) -> Result<Self, SettingsError> {
    let mut config: ProviderConfig = serde_json::from_str(json)?;
    config.normalize();
    Ok(config)
  }

  /// Read and parse a JSON config file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json(&content)
  }

  /// The value of a required field.
  pub fn value(&self, field: ConfigField) -> &str {
    match field {
      ConfigField::ApiKey => &self.api_key,
      ConfigField::AuthDomain => &self.auth_domain,
      ConfigField::ProjectId => &self.project_id,
      ConfigField::StorageBucket => &self.storage_bucket,
      ConfigField::MessagingSenderId => &self.messaging_sender_id,
      ConfigField::AppId => &self.app_id,
    }
  }

  /// Set a required field.
  pub fn set(&mut self, field: ConfigField, value: impl Into<String>) {
    let slot = match field {
      ConfigField::ApiKey => &mut self.api_key,
      ConfigField::AuthDomain => &mut self.auth_domain,
      ConfigField::ProjectId => &mut self.project_id,
      ConfigField::StorageBucket => &mut self.storage_bucket,
      ConfigField::MessagingSenderId => &mut self.messaging_sender_id,
      ConfigField::AppId => &mut self.app_id,
    };
    *slot = value.into();
  }

  /// Check that every required field is non-empty.
  ///
  /// All failures are reported at once, in form order.
  pub fn validate(&self) -> Result<(), SettingsError> {
    let errors: Vec<FieldError> = ConfigField::REQUIRED
      .into_iter()
      .filter(|field| self.value(*field).is_empty())
      .map(FieldError::required)
      .collect();

    if errors.is_empty() {
      Ok(())
    } else {
      Err(SettingsError::Validation(errors))
    }
  }

  /// Treat empty optional values as absent.
  pub(crate) fn normalize(&mut self) {
    if self.database_url.as_deref() == Some("") {
      self.database_url = None;
    }
    if self.measurement_id.as_deref() == Some("") {
      self.measurement_id = None;
    }
  }
}
