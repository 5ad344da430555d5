use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose)?;

    Ok(result.exit_status())
}
