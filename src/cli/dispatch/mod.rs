//! Map parsed CLI arguments to the action the binary executes.

use crate::cli::{
    actions::{Action, server::Args},
    commands::{ARG_PORT, ARG_SEED_DEMO_USER},
};
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(ARG_PORT)
        .copied()
        .context("missing required argument: --port")?;

    Ok(Action::Server(Args {
        port,
        seed_demo_user: matches.get_flag(ARG_SEED_DEMO_USER),
    }))
}
