//! Core types for Harborlane.
//!
//! Everything here is plain data: serde in, serde out, no behavior beyond
//! small accessors. The remote catalog is the source of truth for item
//! contents; these types only give it a stable shape.

pub mod catalog;
pub mod invocation;
pub mod selection;

pub use catalog::{CatalogItem, CatalogResult};
pub use invocation::InvocationResult;
pub use selection::SelectionState;
