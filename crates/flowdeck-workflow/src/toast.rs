use serde::{Deserialize, Serialize};

use crate::events::EditorEvent;

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
  #[default]
  Default,
  Destructive,
}

/// A short, human-readable notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
  pub title: String,
  pub description: String,
  #[serde(default)]
  pub variant: ToastVariant,
}

impl Toast {
  pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      variant: ToastVariant::Default,
    }
  }

  pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      variant: ToastVariant::Destructive,
      ..Self::new(title, description)
    }
  }

  /// The toast shown for an editor event, if any.
  ///
  /// Moves are silent.
  pub fn from_event(event: &EditorEvent) -> Option<Self> {
    match event {
      EditorEvent::ModuleAdded { title, .. } => Some(Self::new(
        "Module Added",
        format!("Added {title} module to workflow"),
      )),
      EditorEvent::ModuleRemoved { .. } => Some(Self::destructive(
        "Module Removed",
        "Module removed from workflow",
      )),
      EditorEvent::ModuleMoved { .. } => None,
    }
  }
}
