use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// Command-line interface definition for cpunch
/// CLI application to punch in/out against hourly-rated work types
#[derive(Parser)]
#[command(
    name = "cpunch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch clock CLI: track hours per work type and compute earnings",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory holding worktypes.json / punches.json
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Without a command the available work types are listed
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Punch in using the n-th listed work type (1-based)
    Start {
        /// Work type number as shown by `cpunch listtypes`
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,

        /// Extra words after the number are ignored
        #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },

    /// Punch out of the ongoing punch and print hours and amount
    Stop,

    /// Add a new work type (prompts for anything not given)
    #[command(name = "addtype")]
    AddType {
        /// Work type name
        #[arg(long)]
        name: Option<String>,

        /// Hourly rate (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        rate: Option<String>,
    },

    /// List work types with their number and rate
    #[command(name = "listtypes")]
    ListTypes,

    /// Print total hours and amounts per work type
    Report,

    /// Initialize the configuration file and the data directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },

    /// Export punch records with hours and amounts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Skip the ongoing punch
        #[arg(long)]
        closed: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Lowercase the command word so `START 1` and `Report` behave like their
/// lowercase forms. The program name, options and the value given to
/// `--data-dir` are left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut args = args.into_iter();

    if let Some(bin) = args.next() {
        out.push(bin);
    }

    while let Some(arg) = args.next() {
        if arg.to_str() == Some("--data-dir") {
            out.push(arg);
            if let Some(value) = args.next() {
                out.push(value);
            }
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            out.push(arg);
            continue;
        }

        let lowered = arg.to_str().map(str::to_lowercase);
        out.push(lowered.map(OsString::from).unwrap_or(arg));
        out.extend(args.by_ref());
        break;
    }

    out
}
