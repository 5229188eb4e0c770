use crate::{api, auth::AuthStore, cli::telemetry};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub seed_demo_user: bool,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("server args: {:?}", args);

    let store = if args.seed_demo_user {
        info!(
            email = crate::auth::DEMO_USER_EMAIL,
            "Seeding demo account"
        );
        AuthStore::with_demo_user()
    } else {
        AuthStore::new()
    };

    let result = api::new(args.port, Arc::new(store)).await;

    telemetry::shutdown_tracer();

    result
}
