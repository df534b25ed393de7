//! Error types for Cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CairnError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors
//! - A failed sub-check inside a verifier is NOT an error: it is reported to
//!   the result list and encoded in the verifier outcome. Errors here are for
//!   transport and persistence failures.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// The supplied target path does not exist or is not a directory.
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A git subcommand could not be spawned or exited non-zero.
    ///
    /// Carries the raw stderr so callers can surface it verbatim. Some
    /// subcommands exit non-zero to signal an unmet condition (`git status`
    /// outside a repository); those callers match on this variant instead
    /// of propagating it.
    #[error("git {command} failed: {stderr}")]
    GitCommand { command: String, stderr: String },

    /// Progress file missing at the expected location.
    #[error("Progress file not found: {path}")]
    ProgressMissing { path: PathBuf },

    /// Progress file exists but could not be parsed.
    #[error("Failed to parse progress file at {path}: {message}")]
    ProgressParse { path: PathBuf, message: String },

    /// Challenge name not in the tutorial set.
    #[error("Unknown challenge: {name}")]
    UnknownChallenge { name: String },

    /// A lookup endpoint answered with an unexpected HTTP status.
    #[error("HTTP {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Network-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;
