use std::sync::Arc;

use flowdeck_catalog::{Catalog, ModuleKind};
use tracing::debug;

use crate::drag::DragOutcome;
use crate::events::{EditorEvent, EditorNotifier, NoopNotifier};
use crate::instance::ModuleInstance;

/// Ordered list of module instances plus the edits that apply to it.
///
/// Instance ids are `"{kind}-{n}"` where `n` comes from a counter owned by the
/// editor. The counter only grows, so ids stay unique for the life of the
/// editor even after removals.
pub struct WorkflowEditor {
  catalog: Catalog,
  modules: Vec<ModuleInstance>,
  next_seq: u64,
  notifier: Arc<dyn EditorNotifier>,
}

impl WorkflowEditor {
  /// Create an empty editor over the given catalog that emits no events.
  pub fn new(catalog: Catalog) -> Self {
    Self::with_notifier(catalog, Arc::new(NoopNotifier))
  }

  /// Create an empty editor that reports effective edits to `notifier`.
  pub fn with_notifier(catalog: Catalog, notifier: Arc<dyn EditorNotifier>) -> Self {
    Self {
      catalog,
      modules: Vec::new(),
      next_seq: 1,
      notifier,
    }
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// Current instances in workflow order.
  pub fn modules(&self) -> &[ModuleInstance] {
    &self.modules
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  pub fn get(&self, id: &str) -> Option<&ModuleInstance> {
    self.modules.iter().find(|m| m.id == id)
  }

  pub fn position(&self, id: &str) -> Option<usize> {
    self.modules.iter().position(|m| m.id == id)
  }

  /// Append a new instance of `kind` to the end of the list.
  ///
  /// Returns `None` without touching the list when the catalog has no
  /// definition for `kind`.
  pub fn append(&mut self, kind: ModuleKind) -> Option<&ModuleInstance> {
    let Some(definition) = self.catalog.find(kind) else {
      debug!(kind = %kind, "ignoring append of kind missing from catalog");
      return None;
    };

    let id = format!("{kind}-{}", self.next_seq);
    self.next_seq += 1;

    let instance = ModuleInstance::from_definition(id, definition);
    debug!(instance_id = %instance.id, kind = %kind, "module appended");

    self.notifier.notify(EditorEvent::ModuleAdded {
      instance_id: instance.id.clone(),
      kind,
      title: instance.title.clone(),
    });
    self.modules.push(instance);
    self.modules.last()
  }

  /// Append by string kind id. Unknown ids are ignored.
  pub fn append_by_id(&mut self, kind_id: &str) -> Option<&ModuleInstance> {
    match kind_id.parse::<ModuleKind>() {
      Ok(kind) => self.append(kind),
      Err(e) => {
        debug!(error = %e, "ignoring append");
        None
      }
    }
  }

  /// Remove the instance with the given id.
  ///
  /// Returns the removed instance, or `None` if no instance matched. A
  /// removal event is emitted either way; its `kind` is `None` on a miss.
  pub fn remove(&mut self, id: &str) -> Option<ModuleInstance> {
    let removed = self.position(id).map(|index| self.modules.remove(index));
    match &removed {
      Some(instance) => debug!(instance_id = %instance.id, "module removed"),
      None => debug!(instance_id = %id, "remove matched no module"),
    }

    self.notifier.notify(EditorEvent::ModuleRemoved {
      instance_id: id.to_string(),
      kind: removed.as_ref().map(|m| m.kind),
    });
    removed
  }

  /// Move the instance at `from` so that it ends up at `to`.
  ///
  /// `from` outside the list is a no-op. `to` is clamped to the last valid
  /// position. Returns true when the list order changed.
  pub fn reorder(&mut self, from: usize, to: usize) -> bool {
    if from >= self.modules.len() {
      debug!(from, len = self.modules.len(), "ignoring reorder from out-of-range index");
      return false;
    }

    let item = self.modules.remove(from);
    let to = to.min(self.modules.len());
    let instance_id = item.id.clone();
    self.modules.insert(to, item);

    if from == to {
      return false;
    }

    debug!(instance_id = %instance_id, from, to, "module moved");
    self
      .notifier
      .notify(EditorEvent::ModuleMoved { instance_id, from, to });
    true
  }

  /// Apply a completed drag. A drag with no destination is ignored.
  pub fn apply_drag(&mut self, outcome: DragOutcome) -> bool {
    match outcome.destination {
      Some(destination) => self.reorder(outcome.source, destination),
      None => {
        debug!(source = outcome.source, "drag cancelled");
        false
      }
    }
  }

  /// Remove every instance, emitting a removal event for each.
  ///
  /// The id counter is not reset.
  pub fn clear(&mut self) {
    for removed in std::mem::take(&mut self.modules) {
      self.notifier.notify(EditorEvent::ModuleRemoved {
        instance_id: removed.id,
        kind: Some(removed.kind),
      });
    }
  }
}

impl Default for WorkflowEditor {
  fn default() -> Self {
    Self::new(Catalog::standard())
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use flowdeck_catalog::ModuleDefinition;

  use super::*;
  use crate::events::ChannelNotifier;

  fn titles(editor: &WorkflowEditor) -> Vec<&str> {
    editor.modules().iter().map(|m| m.title.as_str()).collect()
  }

  fn editor_with(kinds: &[ModuleKind]) -> WorkflowEditor {
    let mut editor = WorkflowEditor::default();
    for kind in kinds {
      editor.append(*kind);
    }
    editor
  }

  #[test]
  fn test_append_copies_definition() {
    let mut editor = WorkflowEditor::default();
    let instance = editor.append(ModuleKind::Auth).unwrap().clone();

    assert_eq!(instance.kind, ModuleKind::Auth);
    assert_eq!(instance.title, "Authentication");
    assert_eq!(instance.description, "Handle user authentication");
    assert_eq!(instance.id, "auth-1");
  }

  #[test]
  fn test_append_missing_kind_is_noop() {
    let (notifier, mut receiver) = ChannelNotifier::channel();
    let catalog = Catalog::new([ModuleDefinition::new(ModuleKind::Auth, "Auth", "only")]);
    let mut editor = WorkflowEditor::with_notifier(catalog, Arc::new(notifier));

    assert!(editor.append(ModuleKind::Storage).is_none());
    assert!(editor.is_empty());
    assert!(receiver.try_recv().is_err());
  }

  #[test]
  fn test_append_by_unknown_id_is_noop() {
    let mut editor = WorkflowEditor::default();
    assert!(editor.append_by_id("unknown-kind").is_none());
    assert!(editor.is_empty());
  }

  #[test]
  fn test_ids_unique_after_removal() {
    let mut editor = editor_with(&[ModuleKind::Auth, ModuleKind::Auth]);
    editor.remove("auth-2");
    editor.append(ModuleKind::Auth);

    let ids: HashSet<&str> = editor.modules().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), editor.len());
    assert!(editor.get("auth-3").is_some());
  }

  #[test]
  fn test_remove_twice_is_idempotent() {
    let mut editor = editor_with(&[ModuleKind::Auth, ModuleKind::Storage]);

    assert!(editor.remove("auth-1").is_some());
    let after_first: Vec<ModuleInstance> = editor.modules().to_vec();
    assert!(editor.remove("auth-1").is_none());
    assert_eq!(editor.modules(), after_first.as_slice());
  }

  #[test]
  fn test_reorder_forward_and_back() {
    let mut editor = editor_with(&[
      ModuleKind::Auth,
      ModuleKind::Firestore,
      ModuleKind::Storage,
    ]);

    assert!(editor.reorder(0, 2));
    assert_eq!(titles(&editor), vec!["Firestore", "Storage", "Authentication"]);

    assert!(editor.reorder(2, 0));
    assert_eq!(titles(&editor), vec!["Authentication", "Firestore", "Storage"]);
  }

  #[test]
  fn test_reorder_clamps_destination() {
    let mut editor = editor_with(&[
      ModuleKind::Auth,
      ModuleKind::Firestore,
      ModuleKind::Storage,
    ]);

    assert!(editor.reorder(0, 99));
    assert_eq!(titles(&editor), vec!["Firestore", "Storage", "Authentication"]);
  }

  #[test]
  fn test_reorder_out_of_range_source_is_noop() {
    let mut editor = editor_with(&[ModuleKind::Auth, ModuleKind::Firestore]);
    let before = editor.modules().to_vec();

    assert!(!editor.reorder(2, 0));
    assert!(!editor.reorder(usize::MAX, 0));
    assert_eq!(editor.modules(), before.as_slice());
  }

  #[test]
  fn test_reorder_same_position_emits_nothing() {
    let (notifier, mut receiver) = ChannelNotifier::channel();
    let mut editor = WorkflowEditor::with_notifier(Catalog::standard(), Arc::new(notifier));
    editor.append(ModuleKind::Auth);
    let _ = receiver.try_recv();

    assert!(!editor.reorder(0, 0));
    assert!(receiver.try_recv().is_err());
  }

  #[test]
  fn test_cancelled_drag_is_noop() {
    let mut editor = editor_with(&[ModuleKind::Auth, ModuleKind::Firestore]);

    assert!(!editor.apply_drag(DragOutcome::cancelled(0)));
    assert_eq!(titles(&editor), vec!["Authentication", "Firestore"]);

    assert!(editor.apply_drag(DragOutcome::dropped(0, 1)));
    assert_eq!(titles(&editor), vec!["Firestore", "Authentication"]);
  }

  #[test]
  fn test_events_for_edits() {
    let (notifier, mut receiver) = ChannelNotifier::channel();
    let mut editor = WorkflowEditor::with_notifier(Catalog::standard(), Arc::new(notifier));

    editor.append(ModuleKind::Auth);
    editor.append(ModuleKind::Storage);
    editor.reorder(1, 0);
    editor.remove("auth-1");
    editor.remove("auth-1");

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
      events.push(event);
    }

    assert_eq!(
      events,
      vec![
        EditorEvent::ModuleAdded {
          instance_id: "auth-1".to_string(),
          kind: ModuleKind::Auth,
          title: "Authentication".to_string(),
        },
        EditorEvent::ModuleAdded {
          instance_id: "storage-2".to_string(),
          kind: ModuleKind::Storage,
          title: "Storage".to_string(),
        },
        EditorEvent::ModuleMoved {
          instance_id: "storage-2".to_string(),
          from: 1,
          to: 0,
        },
        EditorEvent::ModuleRemoved {
          instance_id: "auth-1".to_string(),
          kind: Some(ModuleKind::Auth),
        },
        EditorEvent::ModuleRemoved {
          instance_id: "auth-1".to_string(),
          kind: None,
        },
      ]
    );
  }

  #[test]
  fn test_remove_missing_still_notifies() {
    let (notifier, mut receiver) = ChannelNotifier::channel();
    let mut editor = WorkflowEditor::with_notifier(Catalog::standard(), Arc::new(notifier));

    assert!(editor.remove("auth-1").is_none());
    assert!(editor.is_empty());
    assert_eq!(
      receiver.try_recv(),
      Ok(EditorEvent::ModuleRemoved {
        instance_id: "auth-1".to_string(),
        kind: None,
      })
    );
  }

  #[test]
  fn test_clear_keeps_counter() {
    let mut editor = editor_with(&[ModuleKind::Auth, ModuleKind::Functions]);
    editor.clear();
    assert!(editor.is_empty());

    let id = editor.append(ModuleKind::Auth).unwrap().id.clone();
    assert_eq!(id, "auth-3");
  }
}
