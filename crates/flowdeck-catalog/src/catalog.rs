use crate::definition::ModuleDefinition;
use crate::kind::ModuleKind;

/// The closed set of module definitions offered in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
  definitions: Vec<ModuleDefinition>,
}

impl Catalog {
  /// Build a catalog from explicit definitions.
  ///
  /// Later entries with a kind already present are ignored, so each kind
  /// appears at most once.
  pub fn new(definitions: impl IntoIterator<Item = ModuleDefinition>) -> Self {
    let mut unique: Vec<ModuleDefinition> = Vec::new();
    for definition in definitions {
      if !unique.iter().any(|d| d.kind == definition.kind) {
        unique.push(definition);
      }
    }
    Self { definitions: unique }
  }

  /// The standard catalog: authentication, database, storage and functions.
  pub fn standard() -> Self {
    Self::new([
      ModuleDefinition::new(
        ModuleKind::Auth,
        "Authentication",
        "Handle user authentication",
      ),
      ModuleDefinition::new(ModuleKind::Firestore, "Firestore", "Database operations"),
      ModuleDefinition::new(ModuleKind::Storage, "Storage", "File storage operations"),
      ModuleDefinition::new(
        ModuleKind::Functions,
        "Cloud Functions",
        "Serverless functions",
      ),
    ])
  }

  /// All definitions in palette order.
  pub fn definitions(&self) -> &[ModuleDefinition] {
    &self.definitions
  }

  /// Look up a definition by kind.
  pub fn find(&self, kind: ModuleKind) -> Option<&ModuleDefinition> {
    self.definitions.iter().find(|d| d.kind == kind)
  }

  /// Look up a definition by its string id, e.g. `"storage"`.
  ///
  /// Unknown ids return `None` rather than an error.
  pub fn find_by_id(&self, id: &str) -> Option<&ModuleDefinition> {
    let kind = id.parse::<ModuleKind>().ok()?;
    self.find(kind)
  }

  pub fn len(&self) -> usize {
    self.definitions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.definitions.is_empty()
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::standard()
  }
}
