use crate::cli::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::{FileDependencies, ParseError};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub format: OutputFormat,
    /// Files to report, sorted by path.
    pub files: Vec<FileDependencies>,
    pub parse_errors: Vec<ParseError>,
    /// Number of source files that were scanned, including unparseable ones.
    pub source_files_checked: usize,
    /// Prefix for paths in deps output.
    pub deps_prefix: String,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running a goog-deps command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Scan(scan) if !scan.parse_errors.is_empty() => ExitStatus::Failure,
            CommandSummary::Init(init) if !init.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
