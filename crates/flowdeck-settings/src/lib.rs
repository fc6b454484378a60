//! Flowdeck Settings
//!
//! This crate captures the credentials of the external backend provider and
//! hands them to an initialization routine. Credentials are not interpreted:
//! the only check is that every required field is a non-empty string.
//!
//! Settings can be loaded from:
//! - JSON files using the provider's own key names (`apiKey`, `projectId`, ...)
//! - values entered in the settings form
//!
//! The [`Initializer`] trait is the seam to the provider SDK. A
//! [`ProviderRuntime`] keeps the single initialized app for the session and
//! resolves the service endpoints the workflow modules talk to.

mod config;
mod error;
mod init;
mod runtime;

pub use config::{ConfigField, FieldError, ProviderConfig};
pub use error::{InitError, SettingsError};
pub use init::{DEFAULT_APP_NAME, Initializer, ProviderApp, StandardInitializer};
pub use runtime::{ClientEnvironment, DEFAULT_FUNCTIONS_REGION, ProviderRuntime, ServiceEndpoints};
