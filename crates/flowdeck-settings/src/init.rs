use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::InitError;

/// Name given to the app when none is specified.
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// An initialized provider app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderApp {
  pub name: String,
  /// The configuration the app was created with, unmodified.
  pub options: ProviderConfig,
}

/// Hands a configuration to the provider SDK.
///
/// Implementations receive the configuration verbatim and must not mutate
/// any session state when they fail.
pub trait Initializer {
  fn initialize(&self, config: &ProviderConfig) -> Result<ProviderApp, InitError>;
}

/// Creates the default app from the configuration as given.
#[derive(Debug, Clone, Default)]
pub struct StandardInitializer;

impl Initializer for StandardInitializer {
  fn initialize(&self, config: &ProviderConfig) -> Result<ProviderApp, InitError> {
    Ok(ProviderApp {
      name: DEFAULT_APP_NAME.to_string(),
      options: config.clone(),
    })
  }
}
