//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "swimreg",
    version,
    about = "Swim lesson administration - reconcile class selections against enrollment exports",
    long_about = "Match a selected class (\"Stage 2 (Monday, 9:00 AM)\") against a roster\n\
                  export, derive the stage-relevant skill curriculum, and print the\n\
                  resulting worksheet data. Matching tolerates differing export layouts\n\
                  and day/time notations, and falls back to labeled sample data rather\n\
                  than blocking on imperfect source data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile one class selection against a roster export.
    Reconcile(ReconcileArgs),

    /// List the distinct class selection values present in a roster export.
    Classes(ClassesArgs),
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Path to the enrollment export CSV.
    #[arg(value_name = "ROSTER_CSV")]
    pub roster: PathBuf,

    /// The class selection string, e.g. "Stage 2 (Monday, 9:00 AM)".
    #[arg(long = "class", value_name = "DESCRIPTOR")]
    pub class: String,

    /// Read the skill catalog from a separate CSV's header row instead of
    /// the roster export.
    #[arg(long = "skills", value_name = "CSV")]
    pub skills: Option<PathBuf>,

    /// Return an empty student list instead of labeled sample data when no
    /// roster row matches.
    #[arg(long = "no-fallback")]
    pub no_fallback: bool,

    /// Run the token-overlap pass aggressively from the start (looser
    /// gating, broader day/time variation use).
    #[arg(long = "aggressive")]
    pub aggressive: bool,

    /// Emit the reconciliation result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ClassesArgs {
    /// Path to the enrollment export CSV.
    #[arg(value_name = "ROSTER_CSV")]
    pub roster: PathBuf,

    /// Emit the class list as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
