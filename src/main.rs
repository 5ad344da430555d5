use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use goog_deps::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = goog_deps::mcp::run_server() {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match goog_deps::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
