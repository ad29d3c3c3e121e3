//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the pruning logic and the
//! filesystem. Implementations live in the `adapters` module; tests use
//! in-memory stores.

mod document_store;

pub use document_store::{DocumentError, DocumentStore};
