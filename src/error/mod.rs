// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for merge-checks.
//!
//! Policy violations are not errors: they are reported through
//! [`CheckResult`](crate::checks::CheckResult). Everything in here is fatal
//! for the current run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for merge-checks operations.
#[derive(Error, Debug)]
pub enum MergeCheckError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hosting API errors
    #[error("Hosting API error: {0}")]
    Hosting(#[from] HostingError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Failed to walk history: {message}")]
    WalkFailed { message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Hosting platform (REST API) errors.
#[derive(Error, Debug)]
pub enum HostingError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Authentication rejected by {url} (HTTP {status})")]
    Unauthorized { url: String, status: u16 },

    #[error("Not found: {url}")]
    NotFound { url: String },

    #[error("Unexpected response from {url} (HTTP {status}): {message}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Result type alias for merge-checks operations.
pub type Result<T> = std::result::Result<T, MergeCheckError>;
