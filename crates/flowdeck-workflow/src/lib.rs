//! Flowdeck Workflow
//!
//! This crate holds the user's workflow: an ordered list of module instances
//! assembled from the catalog. The [`WorkflowEditor`] applies the three edits
//! the canvas supports:
//! - append a new instance of a catalog kind
//! - remove an instance by id
//! - move an instance to another position (drag-and-drop)
//!
//! Every edit degrades to a no-op on bad input; nothing in this crate fails.
//! Observers receive [`EditorEvent`]s through an [`EditorNotifier`].

mod drag;
mod editor;
mod events;
mod instance;
mod toast;

pub use drag::DragOutcome;
pub use editor::WorkflowEditor;
pub use events::{ChannelNotifier, EditorEvent, EditorNotifier, NoopNotifier};
pub use instance::ModuleInstance;
pub use toast::{Toast, ToastVariant};
