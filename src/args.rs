//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Returns the parsed command line: the `Args` return value's `action` field
/// says whether to print help, print the version, or compare two files.
#[must_use]
pub fn parsed() -> Args {
    Args::from(CliArgs::parse())
}

/// `Args` is the parsed command line
pub struct Args {
    /// `action` is what we've been asked to do
    pub action: Action,
    /// `color` says whether to style the output
    pub color: ColorChoice,
    /// With `quiet` set, nothing is printed and only the exit status reports
    /// the result
    pub quiet: bool,
}

/// The three things `patcmp` knows how to do
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Action {
    /// Print the help message
    Help,
    /// Print the name and version
    Version,
    /// Compare the records of `left` with those of `right`
    Compare {
        /// The first file named on the command line
        left: PathBuf,
        /// The second file named on the command line
        right: PathBuf,
    },
}

/// When to color the output
#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    Auto,
    /// Always emit color escapes
    Always,
    /// Never emit color escapes
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "patcmp", disable_help_flag = true, disable_version_flag = true)]
/// `CliArgs` is what clap sees; `Args` is what the rest of the crate sees.
struct CliArgs {
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    version: bool,
    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    #[arg(required_unless_present_any = ["help", "version"])]
    left: Option<PathBuf>,
    #[arg(required_unless_present_any = ["help", "version"])]
    right: Option<PathBuf>,
}

impl From<CliArgs> for Args {
    fn from(parsed: CliArgs) -> Self {
        let action = match (parsed.help, parsed.version, parsed.left, parsed.right) {
            (true, _, _, _) => Action::Help,
            (false, true, _, _) => Action::Version,
            (false, false, Some(left), Some(right)) => Action::Compare { left, right },
            // clap has already insisted on both operands
            (false, false, _, _) => Action::Help,
        };
        Args { action, color: parsed.color, quiet: parsed.quiet }
    }
}
