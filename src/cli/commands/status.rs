//! Status command implementation.
//!
//! Shows each challenge's completion state and where the learner left off.

use console::style;

use crate::challenges::ChallengeId;
use crate::cli::style::StatusKind;
use crate::error::Result;
use crate::progress::ProgressStore;

pub fn run(store: &ProgressStore) -> Result<i32> {
    store.seed_if_missing()?;
    let data = store.load()?;

    println!("{}", style("Challenges").bold());
    for id in ChallengeId::ALL {
        let completed = data.get(&id).map(|r| r.completed).unwrap_or(false);
        let kind = if completed {
            StatusKind::Pass
        } else {
            StatusKind::Pending
        };
        println!(
            "{} {:>2}. {}",
            kind.styled(),
            id.ordinal(),
            id.title()
        );
    }

    let completed = data.values().filter(|r| r.completed).count();
    println!();
    println!("{completed} of {} complete", ChallengeId::ALL.len());

    match store.next_incomplete()? {
        Some(next) if completed > 0 => {
            println!("Up next: {} ({})", next.title(), next);
        }
        None => {
            println!("{}", style("All challenges complete!").green().bold());
        }
        _ => {}
    }

    Ok(0)
}
