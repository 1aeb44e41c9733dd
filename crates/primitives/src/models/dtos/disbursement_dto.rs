use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    pub msisdn: String,
    pub wallet_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Decimal amount as the provider expects it, e.g. `"1000"`.
    pub amount: String,
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
}

/// Payout request for `/standard/v3/disbursements`.
///
/// `pin` must already be encrypted with the provider's public key; it is sent as given.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisbursementRequest {
    pub payee: Payee,
    pub reference: String,
    pub pin: String,
    pub transaction: Transaction,
}

impl fmt::Debug for DisbursementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisbursementRequest")
            .field("payee", &self.payee)
            .field("reference", &self.reference)
            .field("pin", &"[REDACTED]")
            .field("transaction", &self.transaction)
            .finish()
    }
}

/// Success body of a disbursement. `data.transaction` and `status` must be present;
/// individual fields inside them may be missing while a payout is pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisbursementResponse {
    pub data: DisbursementData,
    pub status: ResponseStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisbursementData {
    pub transaction: DisbursementTransaction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisbursementTransaction {
    pub reference_id: String,
    pub airtel_money_id: String,
    pub id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseStatus {
    pub response_code: String,
    pub code: String,
    pub success: bool,
    pub message: String,
}
