pub mod utility;

pub use airtelmoney_primitives::error::ApiError;

use crate::utility::logging::setup_logging;
use crate::utility::tasks::{disbursement_from_env, load_env};
use airtelmoney_core::AirtelClient;
use airtelmoney_primitives::models::app_state::AirtelInfo;
use eyre::Report;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables (RUST_LOG may come from .env)
    let env_file = load_env();

    // 2. initialize logging
    setup_logging();

    match env_file {
        Some(path) => info!(path = %path.display(), "Loaded .env file"),
        None => info!("No .env file found, using system environment"),
    }

    // 3. load configuration and build the client
    let config = AirtelInfo::new()?;
    let client = AirtelClient::from_config(&config)?;

    info!(
        environment = %config.airtel_environment,
        base_url = %client.base_url(),
        "Airtel client ready"
    );

    // 4. authenticate
    let auth = client.authenticate().await?;
    info!(
        token_type = %auth.token_type,
        expires_in = %auth.expires_in,
        "Authentication successful"
    );

    // 5. disburse
    let request = disbursement_from_env()?;
    let response = client.make_authorized_disbursement(&auth, &request).await?;

    info!(
        transaction_id = %response.data.transaction.id,
        airtel_money_id = %response.data.transaction.airtel_money_id,
        status = %response.data.transaction.status,
        "Disbursement successful"
    );

    Ok(())
}
