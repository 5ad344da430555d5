use serde::Serialize;

use crate::core::extract::ExtractionResult;

/// Namespaces provided and required by one scanned file.
///
/// `file_path` is relative to the source root with `/` separators; both lists
/// are sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDependencies {
    pub file_path: String,
    pub provides: Vec<String>,
    pub requires: Vec<String>,
}

impl FileDependencies {
    pub fn new(file_path: impl Into<String>, result: ExtractionResult) -> Self {
        Self {
            file_path: file_path.into(),
            provides: result.provides.into_iter().collect(),
            requires: result.requires.into_iter().collect(),
        }
    }

    /// True when the file neither provides nor requires anything.
    pub fn is_empty(&self) -> bool {
        self.provides.is_empty() && self.requires.is_empty()
    }
}

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseError {
    pub file_path: String,
    pub message: String,
}
