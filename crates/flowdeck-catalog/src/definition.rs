use serde::{Deserialize, Serialize};

use crate::kind::ModuleKind;

/// A palette entry describing one module kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
  pub kind: ModuleKind,
  /// Display title, e.g. "Authentication"
  pub title: String,
  /// One-line description shown under the title.
  pub description: String,
}

impl ModuleDefinition {
  pub fn new(kind: ModuleKind, title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      kind,
      title: title.into(),
      description: description.into(),
    }
  }
}
