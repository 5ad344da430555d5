//! goog-deps - Closure Library dependency extractor
//!
//! goog-deps is a CLI tool and library that walks JavaScript/TypeScript syntax
//! trees and collects the namespaces each file declares with `goog.provide` and
//! depends on with `goog.require`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, file scanning and dependency extraction
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod utils;
