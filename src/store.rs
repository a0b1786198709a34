//! Remittance table scaffold
//!
//! Stands in for the managed database the demo will eventually record
//! transactions and proofs in. The default deployment runs without one, so
//! [`UnconfiguredStore`] reports the missing backend; [`MemoryStore`] backs
//! the enabled configuration and tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Database is not configured")]
    NotConfigured,
}

/// Row to insert into the remittances table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewRemittance {
    pub sender_wallet: String,
    pub origin_country: String,
    pub destination_country: String,
    pub amount: f64,
    pub status: String,
}

/// Inserted remittance row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemittanceRow {
    pub id: i64,
    pub sender_wallet: String,
    pub origin_country: String,
    pub destination_country: String,
    pub amount: f64,
    pub status: String,
    pub created_at: String,
}

/// Remittance table backend.
#[async_trait]
pub trait RemitStore: Send + Sync {
    async fn insert_remittance(&self, row: NewRemittance) -> Result<RemittanceRow, StoreError>;
}

/// No backend configured; every operation reports the gap.
pub struct UnconfiguredStore;

#[async_trait]
impl RemitStore for UnconfiguredStore {
    async fn insert_remittance(&self, _row: NewRemittance) -> Result<RemittanceRow, StoreError> {
        Err(StoreError::NotConfigured)
    }
}

/// In-memory table used when the database section is enabled.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<RemittanceRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<RemittanceRow> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemitStore for MemoryStore {
    async fn insert_remittance(&self, row: NewRemittance) -> Result<RemittanceRow, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let inserted = RemittanceRow {
            id: rows.len() as i64 + 1,
            sender_wallet: row.sender_wallet,
            origin_country: row.origin_country,
            destination_country: row.destination_country,
            amount: row.amount,
            status: row.status,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        rows.push(inserted.clone());
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> NewRemittance {
        NewRemittance {
            sender_wallet: "PayOnProofWallet1".to_string(),
            origin_country: "CR".to_string(),
            destination_country: "CO".to_string(),
            amount: 100.0,
            status: "pending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_memory_store_assigns_ids() {
        let store = MemoryStore::new();
        let first = store.insert_remittance(sample_row()).await.unwrap();
        let second = store.insert_remittance(sample_row()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.sender_wallet, "PayOnProofWallet1");
        assert_eq!(store.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_store_reports_gap() {
        let err = UnconfiguredStore
            .insert_remittance(sample_row())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotConfigured);
        assert_eq!(err.to_string(), "Database is not configured");
    }
}
