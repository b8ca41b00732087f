// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from
//! merge-checks.toml.

use serde::{Deserialize, Serialize};

use crate::commit::ALLOWED_COMMIT_TYPES;
use crate::error::{ConfigError, Result};

/// Base branch of the local strategy when none is configured.
pub const DEFAULT_LOCAL_BASE_REF: &str = "master";

/// The main configuration structure for merge-checks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MergeChecksConfig {
    /// Commit policy configuration.
    pub policy: PolicyConfig,

    /// How the commit range is resolved.
    pub resolver: ResolverConfig,

    /// How the verdict is reported.
    pub reporting: ReportingConfig,

    /// Hosting platform API configuration.
    pub hosting: HostingConfig,
}

impl MergeChecksConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Reject values that would make the checks meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.policy.allowed_types.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "policy.allowed_types".to_string(),
                message: "at least one commit type is required".to_string(),
            }
            .into());
        }

        if let Some(bad) = self
            .policy
            .allowed_types
            .iter()
            .find(|t| t.is_empty() || !t.chars().all(|c| c.is_ascii_lowercase()))
        {
            return Err(ConfigError::InvalidValue {
                key: "policy.allowed_types".to_string(),
                message: format!("'{}' must be lowercase letters only", bad),
            }
            .into());
        }

        if self.reporting.status_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "reporting.status_name".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Commit policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Commit types accepted by the format check.
    pub allowed_types: Vec<String>,

    /// Whether duplicated commit messages fail the range.
    pub check_duplicates: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allowed_types: ALLOWED_COMMIT_TYPES.iter().map(|t| t.to_string()).collect(),
            check_duplicates: true,
        }
    }
}

/// Commit-range resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Walk the local repository history.
    Local,
    /// Ask the hosting platform to compare the two revisions.
    Remote,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Local => write!(f, "local"),
            Strategy::Remote => write!(f, "remote"),
        }
    }
}

/// Resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Which strategy to use.
    pub strategy: Strategy,

    /// Remote name used by the local strategy.
    pub remote: String,

    /// Base branch. Local strategy falls back to `master`, remote strategy
    /// to the repository's default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_ref: Option<String>,

    /// Whether the local strategy fetches before reading history.
    pub fetch: bool,
}

impl ResolverConfig {
    /// Base branch used by the local strategy.
    pub fn local_base_ref(&self) -> &str {
        self.base_ref.as_deref().unwrap_or(DEFAULT_LOCAL_BASE_REF)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Remote,
            remote: "origin".to_string(),
            base_ref: None,
            fetch: true,
        }
    }
}

/// How a failed verdict affects the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportingMode {
    /// Exit with 1 when the checks fail.
    ExitCode,
    /// Always exit with 0; the posted status is authoritative.
    StatusOnly,
}

impl ReportingMode {
    /// Process exit code for a verdict.
    pub fn exit_code(&self, passed: bool) -> i32 {
        match self {
            ReportingMode::ExitCode if !passed => 1,
            _ => 0,
        }
    }
}

/// Reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Exit-code convention.
    pub mode: ReportingMode,

    /// Status context name shown on the hosting platform.
    pub status_name: String,

    /// Description posted with the pending status.
    pub pending_description: String,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            mode: ReportingMode::StatusOnly,
            status_name: "Merge checks / Result".to_string(),
            pending_description: "Merge checks running".to_string(),
        }
    }
}

/// Hosting platform API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Base URL of the REST API.
    pub api_url: String,

    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            user_agent: format!("merge-checks/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
