//! Flowdeck Catalog
//!
//! This crate contains the fixed set of module kinds a user can place on the
//! workflow canvas. The catalog is static reference data: it is built once and
//! never mutated.
//!
//! The palette shows [`Catalog::definitions`] in order, and the workflow
//! editor looks kinds up with [`Catalog::find`] when a palette entry is picked.

mod catalog;
mod definition;
mod kind;

pub use catalog::Catalog;
pub use definition::ModuleDefinition;
pub use kind::{ModuleKind, ParseKindError};
