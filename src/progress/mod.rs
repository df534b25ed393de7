//! Persisted challenge completion state.

pub mod store;

pub use store::{ChallengeRecord, ProgressStore};
