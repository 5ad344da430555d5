//! Source file discovery.
//!
//! Walks the configured include roots under the source root and keeps every
//! JavaScript/TypeScript file that no ignore rule excludes.

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Extensions of files that may contain `goog.provide` / `goog.require` calls.
pub const SCANNABLE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

/// Files found by [`scan_files`].
pub struct ScanResult {
    pub files: HashSet<String>,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
}

/// Entries without `*` or `?` are literal paths relative to the source root.
fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

fn warn(verbose: bool, message: fmt::Arguments) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

/// Compiled ignore rules.
///
/// Literal entries exclude everything beneath that path. Glob entries are
/// matched against the full path of each walked entry.
struct IgnoreRules {
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(base_dir: &Path, ignores: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut rules = Self {
            prefixes: Vec::new(),
            globs: Vec::new(),
        };

        for entry in ignores {
            if !has_wildcard(entry) {
                rules.prefixes.push(base_dir.join(entry));
                continue;
            }
            match Pattern::new(entry) {
                Ok(pattern) => rules.globs.push(pattern),
                Err(e) => warn(
                    verbose,
                    format_args!("Invalid ignore pattern '{}': {}", entry, e),
                ),
            }
        }

        if ignore_test_files {
            rules
                .globs
                .extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        rules
    }

    fn excludes(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.globs.iter().any(|glob| glob.matches(&path_str))
    }
}

/// Resolve `includes` into the directories to walk.
///
/// An empty list means the whole source root.
fn include_roots(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let joined = base_dir.join(include);

        if !has_wildcard(include) {
            if joined.exists() {
                roots.push(joined);
            } else {
                warn(
                    verbose,
                    format_args!("Include path does not exist: {}", joined.display()),
                );
            }
            continue;
        }

        match glob(&joined.to_string_lossy()) {
            Ok(matches) => roots.extend(matches.flatten().filter(|path| path.is_dir())),
            Err(e) => warn(
                verbose,
                format_args!("Invalid glob pattern '{}': {}", include, e),
            ),
        }
    }
    roots
}

fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCANNABLE_EXTENSIONS.contains(&ext))
}

/// Collect the source files to analyze under `base_dir`.
///
/// Overlapping include roots yield each file once. Unreadable entries are
/// counted in `skipped_count` and reported only when `verbose` is set.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let rules = IgnoreRules::new(base_dir, ignores, ignore_test_files, verbose);

    let mut files = HashSet::new();
    let mut skipped_count = 0;

    for root in include_roots(base_dir, includes, verbose) {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    warn(verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_scannable_file(path) && !rules.excludes(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}
