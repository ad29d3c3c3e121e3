//! Domain models for methodprune
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`SourceDocument`] - Lines of the file being cleaned
//! - [`Span`] - Inclusive line range covering one method
//! - [`LookbackStrategy`] - How doc comments are attached to a declaration

mod document;
mod lookback;
mod span;

pub use document::SourceDocument;
pub use lookback::LookbackStrategy;
pub use span::Span;
