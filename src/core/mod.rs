//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `context`: `ScanContext`, which loads config, scans files and runs extraction
//! - `data`: Per-file results and parse errors
//! - `extract`: `DependencyExtractor` and callee classification
//! - `file_scanner`: Source file discovery
//! - `parsers`: swc-based JavaScript/TypeScript parsing

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

use std::sync::Arc;

use anyhow::Result;

pub use context::{AnalysisData, ScanContext};
pub use data::{FileDependencies, ParseError};
pub use extract::{DependencyExtractor, DependencyKind, ExtractionResult};

/// Parse one source string and extract its dependencies.
///
/// `file_path` selects the syntax (see `parsers::js::syntax_for_path`) and
/// appears in parse error messages.
pub fn extract_from_source(code: String, file_path: &str) -> Result<ExtractionResult> {
    let program = parsers::js::parse_js_source(code, file_path, Arc::default())?;
    Ok(DependencyExtractor::extract(&program))
}
