//! Challenge progress persistence.
//!
//! Progress is a single JSON file at a well-known per-user path, keyed by
//! challenge id:
//!
//! ```json
//! {
//!   "get_git": { "completed": false, "next_challenge": "repository" },
//!   ...
//! }
//! ```
//!
//! Every access reads the whole file; every mutation writes it whole, via
//! a temp-file-then-rename so the file is never half-written. There is no
//! locking: one writer at a time is assumed, and concurrent writers are
//! last-writer-wins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::challenges::ChallengeId;
use crate::error::{CairnError, Result};

/// Persisted state of a single challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRecord {
    /// Whether the paired verifier has fully passed.
    pub completed: bool,

    /// Id of the following challenge, `"done"` for the last one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_challenge: Option<String>,
}

/// The full mapping, ordered by tutorial position.
pub type ProgressData = BTreeMap<ChallengeId, ChallengeRecord>;

/// Read/write access to the progress file.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// A store over an explicit file path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store at the default per-user location.
    pub fn at_default_path() -> Self {
        Self::open(Self::default_path())
    }

    /// `~/.cairn/progress.json`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".cairn")
            .join("progress.json")
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The default data: every challenge incomplete, chained in order.
    pub fn default_data() -> ProgressData {
        ChallengeId::ALL
            .iter()
            .map(|id| {
                let next = id
                    .next()
                    .map(|n| n.as_str().to_string())
                    .unwrap_or_else(|| "done".to_string());
                (
                    *id,
                    ChallengeRecord {
                        completed: false,
                        next_challenge: Some(next),
                    },
                )
            })
            .collect()
    }

    /// Write the default all-incomplete file, replacing any existing one.
    pub fn seed(&self) -> Result<()> {
        self.save(&Self::default_data())
    }

    /// Seed only when no file exists yet.
    pub fn seed_if_missing(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.seed()
    }

    /// Load the full mapping.
    ///
    /// Missing and corrupt files are distinct errors; seeding a default file
    /// is the caller's job, not this method's.
    pub fn load(&self) -> Result<ProgressData> {
        if !self.path.exists() {
            return Err(CairnError::ProgressMissing {
                path: self.path.clone(),
            });
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| CairnError::ProgressParse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Mark one challenge completed. Idempotent.
    pub fn mark_completed(&self, id: ChallengeId) -> Result<()> {
        let mut data = self.load()?;
        if let Some(record) = data.get_mut(&id) {
            record.completed = true;
        } else {
            // File predates this challenge; add it rather than lose the write.
            data.insert(
                id,
                ChallengeRecord {
                    completed: true,
                    next_challenge: id.next().map(|n| n.as_str().to_string()),
                },
            );
        }
        self.save(&data)
    }

    /// Clear one challenge back to incomplete.
    pub fn clear(&self, id: ChallengeId) -> Result<()> {
        let mut data = self.load()?;
        if let Some(record) = data.get_mut(&id) {
            record.completed = false;
        }
        self.save(&data)
    }

    /// Clear every challenge back to incomplete.
    pub fn clear_all(&self) -> Result<()> {
        let mut data = self.load()?;
        for record in data.values_mut() {
            record.completed = false;
        }
        self.save(&data)
    }

    /// Number of completed challenges.
    pub fn completed_count(&self) -> Result<usize> {
        Ok(self.load()?.values().filter(|r| r.completed).count())
    }

    /// The first incomplete challenge in tutorial order, if any.
    pub fn next_incomplete(&self) -> Result<Option<ChallengeId>> {
        let data = self.load()?;
        Ok(ChallengeId::ALL
            .iter()
            .find(|id| !data.get(id).map(|r| r.completed).unwrap_or(false))
            .copied())
    }

    /// Serialize and write the whole file atomically.
    fn save(&self, data: &ProgressData) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(data).map_err(|e| {
            CairnError::ProgressParse {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        // Atomic write: temp file in the same directory, then rename.
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, ProgressStore) {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::open(temp.path().join("progress.json"));
        (temp, store)
    }

    #[test]
    fn load_without_file_is_progress_missing() {
        let (_temp, store) = temp_store();
        let err = store.load().unwrap_err();
        assert!(matches!(err, CairnError::ProgressMissing { .. }));
    }

    #[test]
    fn load_corrupt_file_is_parse_error() {
        let (_temp, store) = temp_store();
        fs::write(store.path(), "{not json").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, CairnError::ProgressParse { .. }));
    }

    #[test]
    fn seed_writes_every_challenge_incomplete() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        let data = store.load().unwrap();
        assert_eq!(data.len(), ChallengeId::ALL.len());
        for id in ChallengeId::ALL {
            assert!(!data[&id].completed, "{id} should start incomplete");
        }
    }

    #[test]
    fn seed_chains_next_challenge_in_order() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        let data = store.load().unwrap();
        assert_eq!(
            data[&ChallengeId::GetGit].next_challenge.as_deref(),
            Some("repository")
        );
        assert_eq!(
            data[&ChallengeId::PullNeverOutOfDate].next_challenge.as_deref(),
            Some("done")
        );
    }

    #[test]
    fn seed_if_missing_preserves_existing_file() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        store.mark_completed(ChallengeId::GetGit).unwrap();
        store.seed_if_missing().unwrap();
        assert!(store.load().unwrap()[&ChallengeId::GetGit].completed);
    }

    #[test]
    fn mark_completed_flips_only_that_record() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        store.mark_completed(ChallengeId::Repository).unwrap();
        let data = store.load().unwrap();
        for id in ChallengeId::ALL {
            assert_eq!(data[&id].completed, id == ChallengeId::Repository);
        }
    }

    #[test]
    fn mark_completed_is_idempotent() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        store.mark_completed(ChallengeId::GetGit).unwrap();
        store.mark_completed(ChallengeId::GetGit).unwrap();
        let data = store.load().unwrap();
        assert!(data[&ChallengeId::GetGit].completed);
        assert_eq!(data.len(), ChallengeId::ALL.len());
    }

    #[test]
    fn clear_reverses_mark_completed() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        store.mark_completed(ChallengeId::MergeTada).unwrap();
        store.clear(ChallengeId::MergeTada).unwrap();
        assert!(!store.load().unwrap()[&ChallengeId::MergeTada].completed);
    }

    #[test]
    fn clear_all_resets_everything() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        for id in ChallengeId::ALL {
            store.mark_completed(id).unwrap();
        }
        store.clear_all().unwrap();
        let data = store.load().unwrap();
        assert!(data.values().all(|r| !r.completed));
    }

    #[test]
    fn completed_count_tracks_marks() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        assert_eq!(store.completed_count().unwrap(), 0);
        store.mark_completed(ChallengeId::GetGit).unwrap();
        store.mark_completed(ChallengeId::Repository).unwrap();
        assert_eq!(store.completed_count().unwrap(), 2);
    }

    #[test]
    fn next_incomplete_follows_tutorial_order() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        assert_eq!(
            store.next_incomplete().unwrap(),
            Some(ChallengeId::GetGit)
        );
        store.mark_completed(ChallengeId::GetGit).unwrap();
        assert_eq!(
            store.next_incomplete().unwrap(),
            Some(ChallengeId::Repository)
        );
        for id in ChallengeId::ALL {
            store.mark_completed(id).unwrap();
        }
        assert_eq!(store.next_incomplete().unwrap(), None);
    }

    #[test]
    fn file_is_pretty_printed_json() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n  \"get_git\""));
        assert!(raw.contains("\"completed\": false"));
    }

    #[test]
    fn no_temp_file_left_behind_after_save() {
        let (_temp, store) = temp_store();
        store.seed().unwrap();
        assert!(!store.path().with_extension("json.tmp").exists());
    }
}
