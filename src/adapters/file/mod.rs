//! Filesystem document store
//!
//! Implements `DocumentStore` on plain files. Saving goes through a
//! temporary file in the destination directory which is then renamed over
//! the target, so readers never observe a half-written output.

mod store;

pub use store::FsDocumentStore;
