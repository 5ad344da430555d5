use std::{
    cell::OnceCell,
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        data::{FileDependencies, ParseError},
        extract::DependencyExtractor,
        file_scanner::scan_files,
        parsers::js::parse_js_source,
    },
    utils::relative_path,
};

/// Output of analyzing every scanned file.
pub struct AnalysisData {
    /// One entry per successfully parsed file, sorted by path.
    pub files: Vec<FileDependencies>,
    /// Files that could not be read or parsed, sorted by path.
    pub parse_errors: Vec<ParseError>,
}

/// Analysis context for one scan of a source tree.
///
/// Holds the merged configuration and the list of files to analyze. The
/// per-file extraction runs lazily on first call to `analysis()`.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--source-root`)
/// 2. `.googdepsrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Source root; reported paths are relative to it.
    pub root_dir: PathBuf,

    /// All source files to analyze.
    pub files: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    analysis: OnceCell<AnalysisData>,
}

impl ScanContext {
    /// Create a new `ScanContext` from command line arguments.
    ///
    /// Loads configuration from the source root and scans it for source files.
    ///
    /// # Errors
    ///
    /// Returns error if the source root is not a directory or the config file
    /// is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        if !root_dir.is_dir() {
            bail!("Source root is not a directory: {}", root_dir.display());
        }

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let scan_result = scan_files(
            &root_dir,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            analysis: OnceCell::new(),
        })
    }

    /// Extract dependencies from every scanned file (lazy initialization).
    ///
    /// Files are read and parsed in parallel; each file gets its own
    /// `SourceMap` and its own extractor.
    pub fn analysis(&self) -> &AnalysisData {
        self.analysis.get_or_init(|| {
            let root_dir = &self.root_dir;

            let outcomes: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let display_path = relative_path(Path::new(file_path), root_dir);
                    let outcome = analyze_file(file_path, &display_path);
                    (display_path, outcome)
                })
                .collect();

            let mut files = Vec::new();
            let mut parse_errors = Vec::new();

            for (display_path, outcome) in outcomes {
                match outcome {
                    Ok(deps) => files.push(deps),
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {}", "warning:".bold().yellow(), e);
                        }
                        parse_errors.push(ParseError {
                            file_path: display_path,
                            message: e.to_string(),
                        });
                    }
                }
            }

            files.sort_by(|a, b| a.file_path.cmp(&b.file_path));
            parse_errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));

            AnalysisData {
                files,
                parse_errors,
            }
        })
    }

    pub fn parse_errors(&self) -> &[ParseError] {
        &self.analysis().parse_errors
    }
}

fn analyze_file(file_path: &str, display_path: &str) -> Result<FileDependencies> {
    let code = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", display_path))?;
    let program = parse_js_source(code, display_path, Arc::new(SourceMap::default()))?;
    let result = DependencyExtractor::extract(&program);
    Ok(FileDependencies::new(display_path, result))
}
