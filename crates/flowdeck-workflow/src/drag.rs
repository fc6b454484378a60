use serde::{Deserialize, Serialize};

/// The result of a completed drag on the canvas.
///
/// A drag dropped outside any valid target reports no destination; the
/// editor treats that as a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOutcome {
  pub source: usize,
  pub destination: Option<usize>,
}

impl DragOutcome {
  pub fn dropped(source: usize, destination: usize) -> Self {
    Self {
      source,
      destination: Some(destination),
    }
  }

  pub fn cancelled(source: usize) -> Self {
    Self {
      source,
      destination: None,
    }
  }
}
