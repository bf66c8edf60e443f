//! Command-line layer: argument parsing, command dispatch and reporting.
//!
//! Kept apart from the annotator and batch driver so weldtag can be used as a
//! library without any console output.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod prompt;
pub mod report;
mod run;

pub use args::{Arguments, Command, OutputFormat};

/// Process exit status of a weldtag run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every program was annotated (or checked), or there was nothing to do.
    Success,
    /// At least one program could not be read, annotated or written, or
    /// `init` found an existing configuration file.
    Failure,
    /// Nothing was processed: bad input or output root, invalid config.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let format = args.format();
    let verbose = args.verbose();

    let result = run::run(args)?;
    report::print(&result, format, verbose)?;

    Ok(result.exit_status())
}
