//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{Commands, TallyArgs},
    handlers::{handle_config, handle_tally, handle_verify},
};
use crate::exit::TallyExit;
use anyhow::Result;
use std::path::Path;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<TallyExit> {
    match command {
        Commands::Tally {
            input,
            updated,
            today,
            pretty,
            summary,
        } => handle_tally(
            config_path,
            &TallyArgs {
                input,
                updated,
                today,
                pretty,
                summary,
            },
        ),
        Commands::Verify { input, today, json } => {
            handle_verify(config_path, &input, today.as_deref(), json)
        }
        Commands::Config => handle_config(config_path),
    }
}
