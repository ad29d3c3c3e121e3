//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Filesystem `DocumentStore` with atomic writes
//! - `toml/` - `.methodprune.toml` discovery and parsing

pub mod file;
pub mod toml;
