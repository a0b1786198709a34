//! Ledger network scaffold
//!
//! All Stellar interactions are stubbed behind this module so the UI-facing
//! layers never touch blockchain plumbing directly. Every operation returns
//! a fixed placeholder result until a real SDK integration lands; the only
//! honest output is [`LedgerClient::verification_url`], which points at the
//! public explorer for a given settlement hash.

use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;
use crate::directory::AnchorStatus;

/// Result of a (simulated) payment submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub tx_hash: String,
    pub ledger: u64,
    pub timestamp: String,
    pub success: bool,
}

/// Anchor metadata as a real directory lookup would return it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorInfo {
    pub name: String,
    pub domain: String,
    pub currency: String,
    pub status: AnchorStatus,
}

/// Stubbed Horizon client.
pub struct LedgerClient {
    config: LedgerConfig,
}

impl LedgerClient {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Query anchors serving a currency.
    ///
    /// TODO: implement via SEP-1 toml lookup and SEP-24/31 info endpoints.
    pub async fn query_anchors(&self, currency: &str) -> Vec<AnchorInfo> {
        tracing::debug!(%currency, "query_anchors stub called");
        Vec::new()
    }

    /// Submit a payment on the network.
    ///
    /// TODO: implement with a transaction builder once the SDK is wired in.
    pub async fn submit_payment(
        &self,
        _destination: &str,
        _asset_code: &str,
        _amount: f64,
    ) -> PaymentResult {
        PaymentResult {
            tx_hash: "placeholder_hash".to_string(),
            ledger: 0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            success: true,
        }
    }

    /// Create a programmatic escrow account.
    ///
    /// TODO: implement with multi-sig and time-bounded transactions.
    pub async fn create_escrow(&self, _asset_code: &str, _amount: f64) -> String {
        "placeholder_escrow_key".to_string()
    }

    /// Verify a transaction on the ledger.
    ///
    /// TODO: implement via Horizon transaction lookup.
    pub async fn verify_transaction(&self, _tx_hash: &str) -> (bool, u64) {
        (true, 0)
    }

    /// Public explorer URL for a settlement hash.
    pub fn verification_url(&self, tx_hash: &str) -> String {
        format!("https://stellar.expert/explorer/public/tx/{}", tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LedgerClient {
        LedgerClient::new(LedgerConfig::default())
    }

    #[test]
    fn test_default_config_targets_public_network() {
        let client = client();
        assert_eq!(client.config().horizon_url, "https://horizon.stellar.org");
        assert!(client.config().network_passphrase.contains("Public Global"));
    }

    #[test]
    fn test_verification_url() {
        let url = client().verification_url("abc123");
        assert_eq!(url, "https://stellar.expert/explorer/public/tx/abc123");
    }

    #[tokio::test]
    async fn test_stub_operations_return_placeholders() {
        let client = client();
        assert!(client.query_anchors("USD").await.is_empty());

        let result = client.submit_payment("GDEST", "USDC", 10.0).await;
        assert!(result.success);
        assert_eq!(result.tx_hash, "placeholder_hash");
        assert_eq!(result.ledger, 0);

        assert_eq!(client.create_escrow("USDC", 10.0).await, "placeholder_escrow_key");
        assert_eq!(client.verify_transaction("abc").await, (true, 0));
    }
}
