use anyhow::Result;

use super::super::args::AnnotateCommand;
use super::super::prompt::confirm_reset;
use super::{CommandResult, CommandSummary, resolve_config, run_batch};
use crate::batch::{has_contents, reset_output_root, resolve_input_root, resolve_output_root};

pub fn annotate(cmd: AnnotateCommand) -> Result<CommandResult> {
    let input_root = resolve_input_root(&cmd.input)?;
    let output_root = resolve_output_root(&input_root, &cmd.output)?;
    let config = resolve_config(&input_root, &cmd.common)?;

    if !cmd.yes && has_contents(&output_root)? && !confirm_reset(&output_root)? {
        return Ok(CommandResult {
            summary: CommandSummary::Cancelled,
        });
    }

    let cleaned_entries = reset_output_root(&output_root)?;
    let report = run_batch(
        &config,
        input_root,
        Some(output_root),
        cleaned_entries,
        cmd.common.verbose,
    );

    Ok(CommandResult {
        summary: CommandSummary::Batch(report),
    })
}
