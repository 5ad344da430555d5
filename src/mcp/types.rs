use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{ExtractionResult, FileDependencies, ParseError};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
    pub deps_prefix: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            includes: c.includes,
            ignores: c.ignores,
            ignore_test_files: c.ignore_test_files,
            deps_prefix: c.deps_prefix,
        }
    }
}

// ============================================================
// Scan Types (scan_dependencies)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanDependenciesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum number of files to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of files to skip
    pub offset: Option<u32>,
    /// Include files that neither provide nor require anything
    #[serde(default)]
    pub include_empty: bool,
}

/// Namespaces of a single file
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependencyItem {
    pub file_path: String,
    pub provides: Vec<String>,
    pub requires: Vec<String>,
}

impl From<FileDependencies> for DependencyItem {
    fn from(deps: FileDependencies) -> Self {
        Self {
            file_path: deps.file_path,
            provides: deps.provides,
            requires: deps.requires,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub message: String,
}

impl From<ParseError> for ParseErrorItem {
    fn from(error: ParseError) -> Self {
        Self {
            file_path: error.file_path,
            message: error.message,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// Result of scan_dependencies operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependencyScanResult {
    /// Number of source files scanned, including unparseable ones
    pub total_file_count: usize,
    /// Number of files matching the filter, before pagination
    pub total_count: usize,
    pub provide_count: usize,
    pub require_count: usize,
    pub items: Vec<DependencyItem>,
    pub parse_errors: Vec<ParseErrorItem>,
    pub pagination: Pagination,
}

// ============================================================
// Extract Types (extract_source)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSourceParams {
    /// JavaScript or TypeScript source code
    pub code: String,
    /// File name used to pick the syntax (default "input.js")
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSourceResult {
    pub provides: Vec<String>,
    pub requires: Vec<String>,
}

impl From<ExtractionResult> for ExtractSourceResult {
    fn from(result: ExtractionResult) -> Self {
        Self {
            provides: result.provides.into_iter().collect(),
            requires: result.requires.into_iter().collect(),
        }
    }
}
