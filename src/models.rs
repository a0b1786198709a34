//! Core remittance records
//!
//! `RemittanceRoute`, `Transaction` and `ProofOfPayment` plus the identifier
//! synthesis used wherever the demo needs a ledger-looking reference. Wire
//! names are camelCase to match the demo's JSON contract.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::directory::Anchor;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const HEX: &[u8] = b"0123456789abcdef";

/// Per-leg fee components, each in percent of the sent amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub on_ramp: f64,
    pub bridge: f64,
    pub off_ramp: f64,
}

/// One candidate path from an origin anchor to a destination anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemittanceRoute {
    pub id: String,
    pub origin_anchor: Anchor,
    pub destination_anchor: Anchor,
    pub origin_country: String,
    pub origin_currency: String,
    pub destination_country: String,
    pub destination_currency: String,
    pub fee_percentage: f64,
    pub fee_amount: f64,
    pub fee_breakdown: FeeBreakdown,
    pub estimated_time: String,
    pub estimated_minutes: u32,
    pub exchange_rate: f64,
    pub received_amount: f64,
    pub available: bool,
    pub escrow: bool,
    pub risks: Vec<String>,
    pub recommended: bool,
}

/// Transaction lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Escrow,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Processing => "processing",
            TransactionStatus::Escrow => "escrow",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transfer execution record. Created when execution begins, finalized
/// exactly once when the step sequence reaches its terminal step.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub route: RemittanceRoute,
    pub amount: f64,
    pub status: TransactionStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stellar_tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_payment: Option<ProofOfPayment>,
}

/// Proof documents are always issued verified; there is no pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProofStatus {
    Verified,
}

/// Generated receipt asserting a completed transfer's terms and settlement
/// reference. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProofOfPayment {
    pub id: String,
    pub transaction_id: String,
    pub timestamp: String,
    pub sender: String,
    pub receiver: String,
    pub origin_amount: f64,
    pub origin_currency: String,
    pub destination_amount: f64,
    pub destination_currency: String,
    pub exchange_rate: f64,
    pub total_fees: f64,
    pub route: String,
    pub stellar_tx_hash: String,
    pub status: ProofStatus,
}

/// Random base36 suffix, as used in route and transaction identifiers.
pub fn base36_suffix<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Transaction identifier: `POP-<epoch_ms>-<6 uppercase base36>`.
pub fn transaction_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "POP-{}-{}",
        Utc::now().timestamp_millis(),
        base36_suffix(rng, 6).to_uppercase()
    )
}

/// Proof identifier: `POP-PROOF-<epoch_ms>`.
pub fn proof_id() -> String {
    format!("POP-PROOF-{}", Utc::now().timestamp_millis())
}

/// 64-character lowercase hex value standing in for a real ledger
/// transaction hash.
pub fn settlement_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..64)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_settlement_hash_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let hash = settlement_hash(&mut rng);
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_settlement_hash_varies() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_ne!(settlement_hash(&mut rng), settlement_hash(&mut rng));
    }

    #[test]
    fn test_transaction_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = transaction_id(&mut rng);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "POP");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_proof_id_shape() {
        assert!(proof_id().starts_with("POP-PROOF-"));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(TransactionStatus::Completed).unwrap(),
            "completed"
        );
        assert_eq!(serde_json::to_value(ProofStatus::Verified).unwrap(), "verified");
    }
}
