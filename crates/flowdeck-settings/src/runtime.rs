use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::{InitError, SettingsError};
use crate::init::{Initializer, ProviderApp};

/// Region used for function endpoints.
pub const DEFAULT_FUNCTIONS_REGION: &str = "us-central1";

/// Where the session runs. Push messaging needs a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientEnvironment {
  Browser,
  #[default]
  Headless,
}

/// Endpoints of the provider services backing each module kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
  pub auth_domain: String,
  pub firestore_project: String,
  pub database_url: String,
  pub functions_url: String,
  pub storage_bucket: String,
  /// Only available in a browser environment.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub messaging_sender_id: Option<String>,
}

impl ServiceEndpoints {
  fn resolve(config: &ProviderConfig, environment: ClientEnvironment) -> Self {
    let project = &config.project_id;
    let database_url = config
      .database_url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| format!("https://{project}-default-rtdb.firebaseio.com"));

    Self {
      auth_domain: config.auth_domain.clone(),
      firestore_project: project.clone(),
      database_url,
      functions_url: format!("https://{DEFAULT_FUNCTIONS_REGION}-{project}.cloudfunctions.net"),
      storage_bucket: config.storage_bucket.clone(),
      messaging_sender_id: match environment {
        ClientEnvironment::Browser => Some(config.messaging_sender_id.clone()),
        ClientEnvironment::Headless => None,
      },
    }
  }
}

/// Holds the provider app for the current session.
///
/// The app is created at most once. Later initialize calls return the existing
/// app and leave it untouched, whatever configuration they pass.
#[derive(Debug, Default)]
pub struct ProviderRuntime {
  app: Option<ProviderApp>,
  environment: ClientEnvironment,
}

impl ProviderRuntime {
  pub fn new(environment: ClientEnvironment) -> Self {
    Self {
      app: None,
      environment,
    }
  }

  pub fn environment(&self) -> ClientEnvironment {
    self.environment
  }

  pub fn app(&self) -> Option<&ProviderApp> {
    self.app.as_ref()
  }

  pub fn is_initialized(&self) -> bool {
    self.app.is_some()
  }

  /// Initialize the app unless one already exists.
  ///
  /// On failure the runtime is left as it was.
  pub fn initialize(
    &mut self,
    config: &ProviderConfig,
    initializer: &dyn Initializer,
  ) -> Result<&ProviderApp, InitError> {
    let app = match self.app.take() {
      Some(existing) => {
        debug!(app = %existing.name, "provider already initialized, reusing existing app");
        existing
      }
      None => {
        let app = initializer.initialize(config)?;
        info!(app = %app.name, project_id = %app.options.project_id, "provider initialized");
        app
      }
    };

    Ok(self.app.insert(app))
  }

  /// Service endpoints of the initialized app.
  pub fn services(&self) -> Result<ServiceEndpoints, SettingsError> {
    let app = self.app.as_ref().ok_or(SettingsError::NotInitialized)?;
    Ok(ServiceEndpoints::resolve(&app.options, self.environment))
  }
}
