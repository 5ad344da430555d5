//! Core data types produced by a scan.
//!
//! - `dependencies`: per-file extraction output (`FileDependencies`) and
//!   unreadable-file records (`ParseError`)

pub mod dependencies;

pub use dependencies::{FileDependencies, ParseError};
