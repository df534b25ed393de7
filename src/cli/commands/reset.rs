//! Reset command implementation.
//!
//! Clearing completion is the only sanctioned false→true→false transition,
//! and clearing everything is destructive enough to confirm first.

use dialoguer::Confirm;

use crate::challenges::ChallengeId;
use crate::cli::args::ResetArgs;
use crate::error::Result;
use crate::progress::ProgressStore;

pub fn run(args: &ResetArgs, store: &ProgressStore) -> Result<i32> {
    store.seed_if_missing()?;

    if args.all {
        if !args.yes {
            let confirmed = Confirm::new()
                .with_prompt("Clear completion for ALL challenges?")
                .default(false)
                .interact()
                .map_err(|e| anyhow::anyhow!("confirmation prompt failed: {e}"))?;
            if !confirmed {
                println!("Nothing cleared.");
                return Ok(0);
            }
        }
        store.clear_all()?;
        println!("All challenges cleared.");
        return Ok(0);
    }

    match &args.challenge {
        Some(name) => {
            let id: ChallengeId = name.parse()?;
            store.clear(id)?;
            println!("Cleared {}.", id.title());
            Ok(0)
        }
        None => {
            eprintln!("Specify a challenge id or --all.");
            Ok(2)
        }
    }
}
