use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, scan::scan},
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
