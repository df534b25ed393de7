//! The fixed tutorial challenge set.
//!
//! Challenges form an ordered curriculum: local Git setup, first repository
//! and commit, a GitHub account, then the fork/branch/pull-request cycle.
//! [`ChallengeId`] is the canonical identifier used for verifier dispatch,
//! progress-file keys, and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CairnError;

/// Identifier of one tutorial challenge.
///
/// Declaration order is tutorial order; `Ord` and [`ChallengeId::ordinal`]
/// follow it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeId {
    GetGit,
    Repository,
    CommitToIt,
    Githubbin,
    RemoteControl,
    ForksAndClones,
    BranchesArentJustForBirds,
    ItsASmallWorld,
    RequestingYouPullPlease,
    MergeTada,
    PullNeverOutOfDate,
}

impl ChallengeId {
    /// Every challenge, in tutorial order.
    pub const ALL: [ChallengeId; 11] = [
        ChallengeId::GetGit,
        ChallengeId::Repository,
        ChallengeId::CommitToIt,
        ChallengeId::Githubbin,
        ChallengeId::RemoteControl,
        ChallengeId::ForksAndClones,
        ChallengeId::BranchesArentJustForBirds,
        ChallengeId::ItsASmallWorld,
        ChallengeId::RequestingYouPullPlease,
        ChallengeId::MergeTada,
        ChallengeId::PullNeverOutOfDate,
    ];

    /// The snake_case id used in the progress file and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeId::GetGit => "get_git",
            ChallengeId::Repository => "repository",
            ChallengeId::CommitToIt => "commit_to_it",
            ChallengeId::Githubbin => "githubbin",
            ChallengeId::RemoteControl => "remote_control",
            ChallengeId::ForksAndClones => "forks_and_clones",
            ChallengeId::BranchesArentJustForBirds => "branches_arent_just_for_birds",
            ChallengeId::ItsASmallWorld => "its_a_small_world",
            ChallengeId::RequestingYouPullPlease => "requesting_you_pull_please",
            ChallengeId::MergeTada => "merge_tada",
            ChallengeId::PullNeverOutOfDate => "pull_never_out_of_date",
        }
    }

    /// Human-readable title for lists and headers.
    pub fn title(self) -> &'static str {
        match self {
            ChallengeId::GetGit => "Get Git",
            ChallengeId::Repository => "Repository",
            ChallengeId::CommitToIt => "Commit To It",
            ChallengeId::Githubbin => "GitHubbin",
            ChallengeId::RemoteControl => "Remote Control",
            ChallengeId::ForksAndClones => "Forks And Clones",
            ChallengeId::BranchesArentJustForBirds => "Branches Aren't Just For Birds",
            ChallengeId::ItsASmallWorld => "It's A Small World",
            ChallengeId::RequestingYouPullPlease => "Requesting You Pull Please",
            ChallengeId::MergeTada => "Merge Tada",
            ChallengeId::PullNeverOutOfDate => "Pull Never Out Of Date",
        }
    }

    /// One-based position in the tutorial.
    pub fn ordinal(self) -> usize {
        ChallengeId::ALL
            .iter()
            .position(|c| *c == self)
            .expect("every ChallengeId is in ALL")
            + 1
    }

    /// The challenge that follows this one, if any.
    pub fn next(self) -> Option<ChallengeId> {
        ChallengeId::ALL
            .iter()
            .position(|c| *c == self)
            .and_then(|i| ChallengeId::ALL.get(i + 1))
            .copied()
    }

    /// Whether this challenge needs a repository directory from the user.
    ///
    /// Setup and account challenges run against the home directory or pure
    /// HTTP lookups; the rest inspect the learner's working copy.
    pub fn needs_directory(self) -> bool {
        !matches!(
            self,
            ChallengeId::GetGit
                | ChallengeId::Githubbin
                | ChallengeId::ItsASmallWorld
                | ChallengeId::RequestingYouPullPlease
        )
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeId {
    type Err = CairnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChallengeId::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| CairnError::UnknownChallenge {
                name: s.to_string(),
            })
    }
}
