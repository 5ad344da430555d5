use anyhow::Result;

use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{cli::args::ScanCommand, core::ScanContext};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let analysis = ctx.analysis();

    let files = analysis
        .files
        .iter()
        .filter(|file| cmd.all || !file.is_empty())
        .cloned()
        .collect();

    let deps_prefix = cmd
        .deps_prefix
        .unwrap_or_else(|| ctx.config.deps_prefix.clone());

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            format: cmd.format,
            files,
            parse_errors: analysis.parse_errors.clone(),
            source_files_checked: ctx.files.len(),
            deps_prefix,
        }),
    })
}
