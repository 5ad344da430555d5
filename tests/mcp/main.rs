use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary project directory holding JavaScript sources.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Stop config lookup at the project root
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with the given source files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_sources(&[
    ///     ("goog/dom/dom.js", "goog.provide('goog.dom');"),
    /// ])?;
    /// ```
    pub fn with_sources(sources: &[(&str, &str)]) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in sources {
            fixture.write_source_file(path, content)?;
        }
        Ok(fixture)
    }

    /// Write a source file relative to the project root
    pub fn write_source_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .googdepsrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".googdepsrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// Create a fixture shaped like a small Closure Library project
pub fn fixture_closure_project() -> Result<McpTestFixture> {
    McpTestFixture::with_sources(&[
        (
            "goog/array/array.js",
            "goog.provide('goog.array');\ngoog.require('goog.asserts');\n",
        ),
        (
            "goog/dom/dom.js",
            "goog.provide('goog.dom');\ngoog.provide('goog.dom.TagName');\ngoog.require('goog.array');\n",
        ),
        (
            "app/main.js",
            "goog.provide('app.main');\ngoog.require('goog.dom');\n",
        ),
        ("app/plain.js", "var answer = 42;\n"),
    ])
}

/// Parse the JSON text payload of a successful tool result
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
