//! Progress store properties over the whole challenge set.

use cairn::challenges::ChallengeId;
use cairn::progress::ProgressStore;
use tempfile::TempDir;

fn seeded_store() -> (TempDir, ProgressStore) {
    let temp = TempDir::new().unwrap();
    let store = ProgressStore::open(temp.path().join("progress.json"));
    store.seed().unwrap();
    (temp, store)
}

#[test]
fn mark_completed_flips_one_record_and_preserves_the_rest() {
    for marked in ChallengeId::ALL {
        let (_temp, store) = seeded_store();
        store.mark_completed(marked).unwrap();

        let data = store.load().unwrap();
        for id in ChallengeId::ALL {
            assert_eq!(
                data[&id].completed,
                id == marked,
                "after marking {marked}, record {id} is wrong"
            );
        }
    }
}

#[test]
fn clear_all_resets_every_record() {
    let (_temp, store) = seeded_store();
    for id in ChallengeId::ALL {
        store.mark_completed(id).unwrap();
    }
    store.clear_all().unwrap();

    let data = store.load().unwrap();
    for id in ChallengeId::ALL {
        assert!(!data[&id].completed, "{id} should be cleared");
    }
}

#[test]
fn marks_survive_unrelated_mutations() {
    let (_temp, store) = seeded_store();
    store.mark_completed(ChallengeId::GetGit).unwrap();
    store.mark_completed(ChallengeId::MergeTada).unwrap();
    store.clear(ChallengeId::MergeTada).unwrap();

    let data = store.load().unwrap();
    assert!(data[&ChallengeId::GetGit].completed);
    assert!(!data[&ChallengeId::MergeTada].completed);
}

#[test]
fn seeded_file_chains_challenges_in_tutorial_order() {
    let (_temp, store) = seeded_store();
    let data = store.load().unwrap();

    for id in ChallengeId::ALL {
        let expected_next = id
            .next()
            .map(|n| n.as_str().to_string())
            .unwrap_or_else(|| "done".to_string());
        assert_eq!(data[&id].next_challenge.as_deref(), Some(expected_next.as_str()));
    }
}

#[test]
fn file_round_trips_through_raw_json() {
    let (_temp, store) = seeded_store();
    store.mark_completed(ChallengeId::Repository).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["repository"]["completed"], true);
    assert_eq!(value["get_git"]["completed"], false);
    assert_eq!(value["get_git"]["next_challenge"], "repository");
}
