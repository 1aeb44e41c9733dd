use airtelmoney_primitives::models::dtos::{DisbursementRequest, Payee, Transaction};
use eyre::{Report, eyre};
use std::env;
use std::path::PathBuf;
use uuid::Uuid;

/// Loads `.env` into the process environment, returning the file path when one was found.
pub fn load_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Builds the payout to send from `AIRTEL_*` variables.
pub fn disbursement_from_env() -> Result<DisbursementRequest, Report> {
    Ok(DisbursementRequest {
        payee: Payee {
            msisdn: required("AIRTEL_PAYEE_MSISDN")?,
            wallet_type: env::var("AIRTEL_WALLET_TYPE").unwrap_or_else(|_| "NORMAL".into()),
        },
        reference: required("AIRTEL_REFERENCE")?,
        pin: required("AIRTEL_PIN")?,
        transaction: Transaction {
            amount: required("AIRTEL_AMOUNT")?,
            id: env::var("AIRTEL_TRANSACTION_ID").unwrap_or_else(|_| Uuid::new_v4().to_string()),
            transaction_type: Some(
                env::var("AIRTEL_TRANSACTION_TYPE").unwrap_or_else(|_| "B2C".into()),
            ),
        },
    })
}

fn required(key: &str) -> Result<String, Report> {
    env::var(key).map_err(|_| eyre!("{} must be set", key))
}
