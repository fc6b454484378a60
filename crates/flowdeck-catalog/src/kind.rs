use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A kind of module that can be placed in a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
  /// User authentication.
  Auth,
  /// Document database operations.
  Firestore,
  /// File storage operations.
  Storage,
  /// Serverless functions.
  Functions,
}

impl ModuleKind {
  /// Every kind, in palette order.
  pub const ALL: [ModuleKind; 4] = [
    ModuleKind::Auth,
    ModuleKind::Firestore,
    ModuleKind::Storage,
    ModuleKind::Functions,
  ];

  /// The string id of this kind, e.g. `"auth"`.
  pub fn as_str(&self) -> &'static str {
    match self {
      ModuleKind::Auth => "auth",
      ModuleKind::Firestore => "firestore",
      ModuleKind::Storage => "storage",
      ModuleKind::Functions => "functions",
    }
  }
}

impl fmt::Display for ModuleKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Returned when a string does not name a known module kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for ModuleKind {
  type Err = ParseKindError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ModuleKind::ALL
      .into_iter()
      .find(|kind| kind.as_str() == s)
      .ok_or_else(|| ParseKindError(s.to_string()))
  }
}
