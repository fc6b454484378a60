//! Flowdeck Session
//!
//! A [`Session`] is the explicit state container for one user's visit: the
//! current route, the navigation menu flag, the workflow editor, the provider
//! runtime and the queue of pending toasts. Rendering code borrows it; nothing
//! here is global.
//!
//! [`EditorCommand`] is a small line-oriented language for driving the editor
//! without a pointer, used by the CLI and by scripted tests.

mod command;
mod route;
mod session;

pub use command::{CommandError, EditorCommand, parse_script};
pub use route::{NavLink, Route};
pub use session::{Session, SessionOptions, SubmitOutcome};
