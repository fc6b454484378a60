use flowdeck_catalog::{ModuleDefinition, ModuleKind};
use serde::{Deserialize, Serialize};

/// A placed occurrence of a module kind on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInstance {
  /// Unique within the editor session, e.g. "auth-3"
  pub id: String,
  pub kind: ModuleKind,
  pub title: String,
  pub description: String,
}

impl ModuleInstance {
  /// Create an instance that copies title and description from its definition.
  pub fn from_definition(id: impl Into<String>, definition: &ModuleDefinition) -> Self {
    Self {
      id: id.into(),
      kind: definition.kind,
      title: definition.title.clone(),
      description: definition.description.clone(),
    }
  }
}
