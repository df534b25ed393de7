//! Command-line interface.

pub mod args;
pub mod commands;
pub mod style;

pub use args::{Cli, Commands};
pub use commands::dispatch;
