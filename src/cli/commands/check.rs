use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, resolve_config, run_batch};
use crate::batch::resolve_input_root;

/// Annotate in memory and report what `annotate` would change.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let input_root = resolve_input_root(&cmd.input)?;
    let config = resolve_config(&input_root, &cmd.common)?;

    let report = run_batch(&config, input_root, None, 0, cmd.common.verbose);

    Ok(CommandResult {
        summary: CommandSummary::Batch(report),
    })
}
