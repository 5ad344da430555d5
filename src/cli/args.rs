//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract goog.provide / goog.require namespaces from a source tree
//! - `init`: Initialize goog-deps configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for `scan`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON document with files and parse errors
    Json,
    /// Closure Library deps.js (goog.addDependency lines)
    Deps,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include files that neither provide nor require anything
    #[arg(long)]
    pub all: bool,

    /// Prefix for paths in deps output (overrides config file)
    #[arg(long)]
    pub deps_prefix: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract goog.provide / goog.require namespaces from source files
    Scan(ScanCommand),
    /// Initialize a new .googdepsrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
