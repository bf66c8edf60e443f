use super::{
    args::{Arguments, Command},
    commands::{CommandResult, annotate::annotate, check::check, init::init},
};
use anyhow::Result;

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with per-file outcomes and totals
/// - `Err` if the command cannot start (missing input root, bad config, ...)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Annotate(cmd)) => annotate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
