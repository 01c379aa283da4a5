//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use patternlab_core::domain::SortAlgorithm;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "patternlab",
    bin_name = "patternlab",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Strategy-pattern sorting and a parking lot allocator",
    long_about = "patternlab sorts integers with a swappable strategy \
                  (bubble, merge, quick) and runs a small parking lot: \
                  typed spots, tickets, tiered fees and payment at exit.",
    after_help = "EXAMPLES:\n\
        \x20 patternlab sort -a merge 5 3 9 1\n\
        \x20 patternlab fee 3.5\n\
        \x20 patternlab lot demo --hours 2\n\
        \x20 patternlab completions bash > /usr/share/bash-completion/completions/patternlab",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort integers with a chosen strategy.
    #[command(
        visible_alias = "s",
        about = "Sort integers",
        after_help = "EXAMPLES:\n\
            \x20 patternlab sort 4 2 7 1\n\
            \x20 patternlab sort -a bubble --stats 5 4 3 2 1\n\
            \x20 patternlab sort -a quick -- -3 10 -7"
    )]
    Sort(SortArgs),

    /// Price a parked duration.
    #[command(
        about = "Calculate the parking fee for a duration",
        after_help = "EXAMPLES:\n\
            \x20 patternlab fee 0.5   # $4.00\n\
            \x20 patternlab fee 1.5   # $7.50\n\
            \x20 patternlab fee 5"
    )]
    Fee(FeeArgs),

    /// Run or inspect a parking lot.
    #[command(
        about = "Parking lot commands",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 patternlab lot demo\n\
            \x20 patternlab lot demo --layout my-lot.toml --hours 4\n\
            \x20 patternlab lot show --output-format plain > my-lot.toml"
    )]
    Lot(LotCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 patternlab completions bash > ~/.local/share/bash-completion/completions/patternlab\n\
            \x20 patternlab completions zsh  > ~/.zfunc/_patternlab\n\
            \x20 patternlab completions fish > ~/.config/fish/completions/patternlab.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the patternlab configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 patternlab config get sorting.algorithm\n\
            \x20 patternlab config list\n\
            \x20 patternlab config path"
    )]
    Config(ConfigCommands),
}

// ── sort ──────────────────────────────────────────────────────────────────────

/// Arguments for `patternlab sort`.
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Strategy to use; falls back to `sorting.algorithm` from config.
    #[arg(
        short = 'a',
        long = "algorithm",
        value_name = "ALGORITHM",
        value_enum,
        help = "Sorting algorithm"
    )]
    pub algorithm: Option<AlgorithmArg>,

    /// Print comparison/swap/pass counters.
    #[arg(long = "stats", help = "Show work counters")]
    pub stats: bool,

    /// Values to sort.
    #[arg(
        value_name = "VALUES",
        required = true,
        allow_negative_numbers = true,
        help = "Integers to sort"
    )]
    pub values: Vec<i64>,
}

// ── fee ───────────────────────────────────────────────────────────────────────

/// Arguments for `patternlab fee`.
#[derive(Debug, Args)]
pub struct FeeArgs {
    /// Hours parked; started hours are charged in full.
    #[arg(
        value_name = "HOURS",
        allow_negative_numbers = true,
        help = "Hours parked (e.g. 1.5)"
    )]
    pub hours: f64,
}

// ── lot ───────────────────────────────────────────────────────────────────────

/// Subcommands for `patternlab lot`.
#[derive(Debug, Subcommand)]
pub enum LotCommands {
    /// Park and release a handful of vehicles and show what happened.
    Demo(DemoArgs),
    /// Print a lot's layout and free spots.
    Show(ShowArgs),
}

/// Arguments for `patternlab lot demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// TOML layout file; falls back to `parking.layout`, then the built-in lot.
    #[arg(short = 'l', long = "layout", value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// How long the first vehicles stay before leaving.
    #[arg(long = "hours", value_name = "HOURS", allow_negative_numbers = true)]
    pub hours: Option<f64>,
}

/// Arguments for `patternlab lot show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// TOML layout file; falls back to `parking.layout`, then the built-in lot.
    #[arg(short = 'l', long = "layout", value_name = "FILE")]
    pub layout: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `patternlab completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `patternlab config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `sorting.algorithm`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Sorting algorithms selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AlgorithmArg {
    /// Also accepted as `bubblesort`.
    #[value(alias = "bubblesort")]
    Bubble,
    #[value(alias = "mergesort")]
    Merge,
    #[value(alias = "quicksort")]
    Quick,
}

impl From<AlgorithmArg> for SortAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bubble => SortAlgorithm::Bubble,
            AlgorithmArg::Merge => SortAlgorithm::Merge,
            AlgorithmArg::Quick => SortAlgorithm::Quick,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
