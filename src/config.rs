//! Project configuration loaded from `.googdepsrc.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".googdepsrc.json";

/// Globs excluded when `ignoreTestFiles` is set.
pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*_test.js",
    "**/*.test.js",
    "**/*.spec.js",
    "**/*_test.ts",
    "**/*.test.ts",
    "**/*.spec.ts",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directories (or directory globs) to scan, relative to the source root.
    /// Empty means the whole source root.
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
    /// Prefix prepended to every path in `deps.js` output, e.g. `../../`
    /// when the output is loaded relative to `base.js`.
    pub deps_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: vec!["**/node_modules/**".to_string()],
            ignore_test_files: false,
            deps_prefix: String::new(),
        }
    }
}

impl Config {
    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject glob patterns that cannot compile.
    ///
    /// Every `ignores` entry is checked; `includes` entries only when they
    /// contain a wildcard, since the rest are literal directories.
    pub fn validate(&self) -> Result<()> {
        check_patterns("ignores", self.ignores.iter())?;
        check_patterns(
            "includes",
            self.includes.iter().filter(|p| p.contains(['*', '?'])),
        )
    }
}

fn check_patterns<'a>(field: &str, patterns: impl Iterator<Item = &'a String>) -> Result<()> {
    for pattern in patterns {
        if let Err(e) = Pattern::new(pattern) {
            bail!("Invalid glob pattern in '{}': \"{}\" ({})", field, pattern, e);
        }
    }
    Ok(())
}

/// Pretty-printed default configuration, as written by `goog-deps init`.
pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

/// Look for the config file in `start_dir` and its ancestors.
///
/// Relative paths are resolved against the working directory first, so `.`
/// still reaches parent directories. The search stops at the first
/// directory holding a `.git` entry.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let start_dir = std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

pub struct ConfigLoadResult {
    pub config: Config,
    /// False when no config file was found and defaults are in use.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        });
    };

    Ok(ConfigLoadResult {
        config: Config::from_file(&path)?,
        from_file: true,
    })
}
