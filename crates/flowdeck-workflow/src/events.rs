//! Editor events and notifiers.
//!
//! Events are emitted after an edit so that consumers can show toasts, log,
//! or mirror the list elsewhere. Appends of unknown kinds and moves that
//! change nothing emit no event; removes always do.

use flowdeck_catalog::ModuleKind;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted by the workflow editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
  /// A new instance was appended to the end of the list.
  ModuleAdded {
    instance_id: String,
    kind: ModuleKind,
    title: String,
  },

  /// A remove was requested. `kind` is `None` when no instance had the id
  /// and the list was left unchanged.
  ModuleRemoved {
    instance_id: String,
    kind: Option<ModuleKind>,
  },

  /// An instance changed position.
  ModuleMoved {
    instance_id: String,
    from: usize,
    to: usize,
  },
}

/// Trait for receiving editor events.
///
/// The editor calls `notify` once per effective edit. Implementations decide
/// what to do with the event.
pub trait EditorNotifier: Send + Sync {
  fn notify(&self, event: EditorEvent);
}

/// A notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl EditorNotifier for NoopNotifier {
  fn notify(&self, _event: EditorEvent) {}
}

/// A notifier that forwards events to an unbounded channel.
///
/// Sending never blocks, so the editor stays synchronous. The receiving side
/// drains at its own pace (e.g. once per rendered frame).
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<EditorEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<EditorEvent>) -> Self {
    Self { sender }
  }

  /// Create a notifier together with the receiver for its events.
  pub fn channel() -> (Self, mpsc::UnboundedReceiver<EditorEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Self::new(sender), receiver)
  }
}

impl EditorNotifier for ChannelNotifier {
  fn notify(&self, event: EditorEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_channel_notifier_delivers_in_order() {
    let (notifier, mut receiver) = ChannelNotifier::channel();

    notifier.notify(EditorEvent::ModuleAdded {
      instance_id: "auth-1".to_string(),
      kind: ModuleKind::Auth,
      title: "Authentication".to_string(),
    });
    notifier.notify(EditorEvent::ModuleRemoved {
      instance_id: "auth-1".to_string(),
      kind: Some(ModuleKind::Auth),
    });

    assert!(matches!(
      receiver.try_recv(),
      Ok(EditorEvent::ModuleAdded { .. })
    ));
    assert!(matches!(
      receiver.try_recv(),
      Ok(EditorEvent::ModuleRemoved { .. })
    ));
    assert!(receiver.try_recv().is_err());
  }

  #[test]
  fn test_channel_notifier_survives_dropped_receiver() {
    let (notifier, receiver) = ChannelNotifier::channel();
    drop(receiver);

    notifier.notify(EditorEvent::ModuleMoved {
      instance_id: "storage-1".to_string(),
      from: 0,
      to: 1,
    });
  }
}
