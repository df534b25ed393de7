//! Git executable resolution and invocation.
//!
//! All repository inspection goes through [`GitRunner`]. The executable is
//! resolved exactly once, at construction: Windows installs may carry a
//! portable Git next to the application binary so learners don't need a
//! system Git; everywhere else the system `git` on PATH is used.
//!
//! Subcommands are passed as argument vectors, never as shell strings, so
//! paths and usernames with spaces or shell metacharacters cannot change
//! the command's meaning.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{CairnError, Result};

/// Captured output of one git subcommand.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output, lossily decoded.
    pub stdout: String,

    /// Standard error, lossily decoded.
    pub stderr: String,
}

impl GitOutput {
    /// Trimmed stdout, the form every predicate matches against.
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Runs git subcommands with a fixed, pre-resolved executable.
#[derive(Debug, Clone)]
pub struct GitRunner {
    program: PathBuf,
}

impl GitRunner {
    /// Resolve the git executable for this platform.
    ///
    /// On Windows, prefers a bundled `PortableGit/bin/git.exe` next to the
    /// running executable when one exists. Falls back to `git` on PATH.
    pub fn resolve() -> Self {
        if let Some(bundled) = bundled_git() {
            return Self { program: bundled };
        }
        Self {
            program: PathBuf::from("git"),
        }
    }

    /// Use an explicit executable path. Intended for tests.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this runner invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run a git subcommand, optionally in a working directory.
    ///
    /// A spawn failure or non-zero exit is an `Err` carrying the raw stderr
    /// text. The caller decides whether a non-zero exit is itself meaningful:
    /// `git status` outside a repository exits 128 and that exit IS the
    /// answer for the repository check.
    pub fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<GitOutput> {
        let command = args.join(" ");

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| CairnError::GitCommand {
            command: command.clone(),
            stderr: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(CairnError::GitCommand { command, stderr });
        }

        Ok(GitOutput { stdout, stderr })
    }
}

impl GitRunner {
    /// Read a config value, treating an unset key as the empty string.
    ///
    /// `git config <key>` exits 1 with no stderr when the key is simply not
    /// set; that is an answer, not a failure. Any other failure propagates.
    pub fn read_config(&self, key: &str, cwd: Option<&Path>) -> Result<String> {
        match self.run(&["config", key], cwd) {
            Ok(output) => Ok(output.trimmed().to_string()),
            Err(CairnError::GitCommand { ref stderr, .. }) if stderr.trim().is_empty() => {
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }
}

/// Locate a portable Git bundled alongside the application binary.
///
/// Only meaningful on Windows; other platforms always resolve to the
/// system git.
fn bundled_git() -> Option<PathBuf> {
    if !cfg!(target_os = "windows") {
        return None;
    }
    let exe_dir = std::env::current_exe().ok()?.parent()?.to_path_buf();
    let candidate = exe_dir.join("PortableGit").join("bin").join("git.exe");
    candidate.is_file().then_some(candidate)
}
