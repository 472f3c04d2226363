//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Glean
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `extract`: Scan sources and write one JSON catalog per target language
//! - `init`: Initialize glean configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Target language codes, one catalog per code (overrides config file)
    /// Can be specified multiple times or comma-separated: --lang fr_FR,en_CA
    #[arg(long, env = "GLEAN_LANG", value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Output directory for the catalogs (overrides config file)
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Catalog filename prefix before the language code
    #[arg(long)]
    pub prefix: Option<String>,

    /// Catalog filename suffix after the language code
    #[arg(long)]
    pub suffix: Option<String>,

    /// Language whose catalog receives empty-value path filling
    #[arg(long)]
    pub default_lang: Option<String>,

    /// Reshape dotted keys into a nested namespace tree
    #[arg(long)]
    pub namespace: bool,

    /// Replace empty values with their dotted key path
    #[arg(long)]
    pub null_empty: bool,

    /// Reserved tolerance toggle for malformed matches
    #[arg(long)]
    pub safe_mode: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys and write one JSON catalog per language
    Extract(ExtractArgs),
    /// Initialize a new .gleanrc.json configuration file
    Init,
}
