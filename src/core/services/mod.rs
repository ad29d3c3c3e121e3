//! Business logic services
//!
//! Locating and planning operate on data passed in and return results.
//! Only [`Pruner::run`] touches storage, and only through a
//! [`DocumentStore`](crate::core::ports::DocumentStore).
//!
//! - [`locator`] - Find the line span of a named method
//! - [`pruner`] - Union spans into a removal set and apply it

pub mod locator;
pub mod pruner;

pub use locator::{LocateError, MethodLocator};
pub use pruner::{MethodOutcome, PruneOptions, PrunePlan, PruneRun, Pruner, WriteStatus};
