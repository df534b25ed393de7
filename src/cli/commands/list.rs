//! List command implementation.

use crate::challenges::ChallengeId;
use crate::error::Result;

pub fn run() -> Result<i32> {
    for id in ChallengeId::ALL {
        println!("{:>2}. {:<30} {}", id.ordinal(), id.as_str(), id.title());
    }
    Ok(0)
}
