//! Wallet state persistence
//!
//! Only the CONNECTED state is durable: `{address, walletType}` as JSON in a
//! small state file. Corrupt or missing files are treated as "nothing
//! stored" rather than errors, matching how the demo tolerates a cleared
//! browser store.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::state::WalletKind;

/// The durable slice of wallet state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWallet {
    pub address: String,
    pub wallet_type: WalletKind,
}

/// JSON-file store for the connected wallet.
#[derive(Debug, Clone)]
pub struct WalletStore {
    path: PathBuf,
}

impl WalletStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Option<PersistedWallet> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(persisted) => Some(persisted),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring corrupt wallet state");
                None
            }
        }
    }

    pub fn save(&self, persisted: &PersistedWallet) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string(persisted) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    tracing::warn!(path = %self.path.display(), %err, "failed to persist wallet state");
                }
            }
            Err(err) => tracing::warn!(%err, "failed to encode wallet state"),
        }
    }

    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> WalletStore {
        let path = std::env::temp_dir().join(format!("pop_wallet_{}_{}.json", name, std::process::id()));
        let store = WalletStore::new(&path);
        store.clear();
        store
    }

    #[test]
    fn test_roundtrip() {
        let store = temp_store("roundtrip");
        let persisted = PersistedWallet {
            address: "0xabc1234567890abcdef1234567890abcdef12345".to_string(),
            wallet_type: WalletKind::Metamask,
        };
        store.save(&persisted);
        assert_eq!(store.load(), Some(persisted));
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_missing_file_is_none() {
        let store = temp_store("missing");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_file_is_none() {
        let store = temp_store("corrupt");
        if let Some(parent) = store.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        fs::write(&store.path, "{not json").unwrap();
        assert_eq!(store.load(), None);
        store.clear();
    }

    #[test]
    fn test_wire_field_names() {
        let persisted = PersistedWallet {
            address: "GABC".to_string(),
            wallet_type: WalletKind::Freighter,
        };
        let json = serde_json::to_value(&persisted).unwrap();
        assert_eq!(json["walletType"], "freighter");
        assert_eq!(json["address"], "GABC");
    }
}
