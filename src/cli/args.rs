//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    browse::BrowseArgs,
    completions::CompletionsArgs,
    fav::FavCommands,
    list::ListArgs,
    show::ShowArgs,
    stats::StatsArgs,
    vocab::VocabArgs,
};
use crate::core::Config;

#[derive(Parser)]
#[command(name = "orgdex")]
#[command(author, version, about = "Orgdex Company Directory")]
#[command(long_about = "A Unix-style CLI for searching, filtering, sorting, and analyzing a curated directory of companies.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Favorites file (default: per-user data directory)
    #[arg(long, global = true, env = "ORGDEX_FAVORITES")]
    pub favorites: Option<PathBuf>,
}

impl GlobalOpts {
    /// The effective format: the flag wins, then the configured default.
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        if self.format != OutputFormat::Auto {
            return self.format;
        }
        config
            .default_format
            .as_deref()
            .and_then(|name| OutputFormat::from_str(name, true).ok())
            .unwrap_or(OutputFormat::Auto)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the directory with filtering, sorting, and pagination
    List(ListArgs),

    /// Show a company's details
    Show(ShowArgs),

    /// Favorites management
    #[command(subcommand)]
    Fav(FavCommands),

    /// Analytics dashboard over the full directory
    Stats(StatsArgs),

    /// List the enumerated filter vocabularies
    Vocab(VocabArgs),

    /// Interactive directory session
    Browse(BrowseArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (human tables for list, yaml for show)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just ids, one per line
    Id,
}
