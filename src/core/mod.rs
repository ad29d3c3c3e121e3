//! Core domain logic for methodprune
//!
//! This module contains the locating and planning logic. File access is
//! abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`SourceDocument`, `Span`, `LookbackStrategy`)
//! - `services/` - Locator and pruner
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
