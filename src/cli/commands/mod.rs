//! Command implementations and dispatch.

mod list;
mod reset;
mod status;
mod verify;

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::progress::ProgressStore;

/// Route the parsed CLI to its command and return the process exit code.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let store = match &cli.progress_file {
        Some(path) => ProgressStore::open(path.clone()),
        None => ProgressStore::at_default_path(),
    };

    match cli.command {
        Commands::Verify(ref args) => verify::run(args, &store, cli.quiet),
        Commands::Status(_) => status::run(&store),
        Commands::List(_) => list::run(),
        Commands::Reset(ref args) => reset::run(args, &store),
        Commands::Completions(ref args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "cairn",
                &mut std::io::stdout(),
            );
            Ok(0)
        }
    }
}
