//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `annotate`: Tag every program under an input root into an output root
//! - `check`: Report what `annotate` would change, without writing anything
//! - `init`: Create a `.weldtagrc.json` configuration file

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
            Some(Command::Annotate(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }

    /// Get the report format from the command's common args.
    pub fn format(&self) -> OutputFormat {
        match &self.command {
            Some(Command::Annotate(cmd)) => cmd.common.format,
            Some(Command::Check(cmd)) => cmd.common.format,
            Some(Command::Init) | None => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Common arguments shared by batch commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Tag with the zero-padded spot number as written in the comment (overrides config file)
    #[arg(long)]
    pub keep_leading_zeros: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnnotateCommand {
    /// Directory containing the untagged .ls programs
    pub input: PathBuf,

    /// Directory to write tagged programs to (its contents are erased first)
    pub output: PathBuf,

    /// Erase a non-empty output directory without asking
    #[arg(short, long, env = "WELDTAG_YES")]
    pub yes: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Directory containing the .ls programs to inspect
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tag motion points with their weld-spot identifiers into an output directory
    Annotate(AnnotateCommand),
    /// Show which points would be tagged without writing any file
    Check(CheckCommand),
    /// Initialize a new .weldtagrc.json configuration file
    Init,
}
