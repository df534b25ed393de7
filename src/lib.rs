//! Cairn - Git tutorial challenge verification from the command line.
//!
//! Cairn checks a learner's progress through a Git/GitHub tutorial by
//! inspecting their local repository with git subcommands, querying GitHub
//! and the tutorial's helper service, and recording completed challenges
//! in a per-user progress file.
//!
//! # Modules
//!
//! - [`api`] - GitHub and Reporobot HTTP lookups
//! - [`challenges`] - The fixed, ordered challenge set
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`git`] - Git executable resolution and subprocess execution
//! - [`progress`] - Persisted completion state
//! - [`verify`] - The per-challenge verification engine
//!
//! # Example
//!
//! ```no_run
//! use cairn::challenges::ChallengeId;
//! use cairn::git::GitRunner;
//! use cairn::api::ApiClient;
//! use cairn::progress::ProgressStore;
//! use cairn::verify::{run_challenge, Reporter, VerifyContext};
//!
//! let git = GitRunner::resolve();
//! let api = ApiClient::new();
//! let store = ProgressStore::at_default_path();
//! store.seed_if_missing().unwrap();
//!
//! let ctx = VerifyContext::new(&git, &api);
//! let mut list = Reporter::new();
//! let outcome = run_challenge(
//!     ChallengeId::Repository,
//!     &ctx,
//!     std::path::Path::new("/home/me/patchwork"),
//!     &mut list,
//!     &store,
//! );
//! for entry in list.entries() {
//!     println!("{} {}", if entry.passed { "ok" } else { "fail" }, entry.message);
//! }
//! println!("complete: {}", outcome.is_complete());
//! ```

pub mod api;
pub mod challenges;
pub mod cli;
pub mod error;
pub mod git;
pub mod progress;
pub mod verify;

pub use error::{CairnError, Result};
