// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ReportingMode, Strategy};

/// merge-checks - commit hygiene gate for pull requests
///
/// Verifies that a branch contains no fixup/squash or merge commits, no
/// duplicated messages, and only conventional commit subjects.
#[derive(Parser, Debug)]
#[command(name = "merge-checks")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit hygiene gate for pull requests", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Log statuses instead of posting them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check the pushed commit and report a commit status (CI entry point)
    Run(RunArgs),

    /// Check a local commit range without reporting anything
    Check(CheckArgs),

    /// Write an example configuration file
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Identifiers of the current CI run, read from the environment.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RunEnvironment {
    /// Repository in `owner/name` form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Commit to check
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: String,

    /// API token used for comparing and posting statuses
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Web URL of the hosting server
    #[arg(long, env = "GITHUB_SERVER_URL", default_value = "https://github.com")]
    pub server_url: String,

    /// Id of the workflow run, used for the status details link
    #[arg(long, env = "GITHUB_RUN_ID")]
    pub run_id: String,
}

impl RunEnvironment {
    /// Link to the workflow run shown next to the status.
    pub fn details_url(&self) -> String {
        format!(
            "{}/{}/actions/runs/{}",
            self.server_url.trim_end_matches('/'),
            self.repository,
            self.run_id
        )
    }
}

/// Arguments for the run command.
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub env: RunEnvironment,

    /// Branch to compare against (default: from config, then the repository default)
    #[arg(long)]
    pub base_ref: Option<String>,

    /// Override the resolution strategy
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Override the exit code convention
    #[arg(long, value_enum)]
    pub mode: Option<ReportingMode>,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Base revision (default: <remote>/<base_ref> from config)
    #[arg(long)]
    pub base: Option<String>,

    /// Head revision
    #[arg(long, default_value = "HEAD")]
    pub head: String,

    /// Check exactly these commits instead of a range
    #[arg(long, num_args = 1.., conflicts_with = "base")]
    pub commits: Vec<String>,

    /// Fetch the base branch before resolving
    #[arg(long)]
    pub fetch: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}
