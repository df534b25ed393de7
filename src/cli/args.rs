//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Cairn - Git tutorial challenge verification.
#[derive(Debug, Parser)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the progress file (overrides ~/.cairn/progress.json)
    #[arg(long, global = true, env = "CAIRN_PROGRESS_FILE")]
    pub progress_file: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify a challenge against your repository
    Verify(VerifyArgs),

    /// Show challenge completion status
    Status(StatusArgs),

    /// List all challenges in tutorial order
    List(ListArgs),

    /// Clear completion for one challenge, or all of them
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `verify` command.
#[derive(Debug, Clone, clap::Args)]
pub struct VerifyArgs {
    /// Challenge id (e.g. get_git, repository, commit_to_it)
    pub challenge: String,

    /// Directory of the repository being checked
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResetArgs {
    /// Challenge id to clear
    pub challenge: Option<String>,

    /// Clear every challenge
    #[arg(long, conflicts_with = "challenge")]
    pub all: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
