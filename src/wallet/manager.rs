//! Wallet manager
//!
//! Explicit state holder for the wallet connection lifecycle. Consumers hold
//! a reference (or an `Arc`) and observe changes through the watch channel;
//! there is no ambient context to look up.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

use super::connector::{ExtensionWallet, connect_extension, mock_address};
use super::state::{WalletKind, WalletState};
use super::store::{PersistedWallet, WalletStore};

pub struct WalletManager {
    extension: Arc<dyn ExtensionWallet>,
    store: WalletStore,
    connect_delay: Duration,
    state_tx: watch::Sender<WalletState>,
    last_attempted: Mutex<Option<WalletKind>>,
}

impl WalletManager {
    /// Build a manager, restoring a previously persisted connection if the
    /// state file holds one.
    pub fn new(
        extension: Arc<dyn ExtensionWallet>,
        store: WalletStore,
        connect_delay: Duration,
    ) -> Self {
        let initial = match store.load() {
            Some(PersistedWallet {
                address,
                wallet_type,
            }) => {
                tracing::info!(wallet = %wallet_type, "restored wallet connection");
                WalletState::connected(address, wallet_type)
            }
            None => WalletState::disconnected(),
        };
        let (state_tx, _) = watch::channel(initial);
        Self {
            extension,
            store,
            connect_delay,
            state_tx,
            last_attempted: Mutex::new(None),
        }
    }

    pub fn state(&self) -> WalletState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WalletState> {
        self.state_tx.subscribe()
    }

    /// Attempt a connection with the given wallet type.
    ///
    /// Freighter goes through the extension seam; every other type sleeps
    /// the simulated delay and synthesizes an address. Failures land in the
    /// ERROR state with the underlying message.
    pub async fn connect(&self, kind: WalletKind) {
        *self.last_attempted.lock().unwrap() = Some(kind);
        self.publish(WalletState::connecting(kind));

        let result = match kind {
            WalletKind::Freighter => connect_extension(self.extension.as_ref()).await,
            other => {
                tokio::time::sleep(self.connect_delay).await;
                Ok(mock_address(other, &mut StdRng::from_entropy()))
            }
        };

        match result {
            Ok(address) => {
                self.store.save(&PersistedWallet {
                    address: address.clone(),
                    wallet_type: kind,
                });
                tracing::info!(wallet = %kind, "wallet connected");
                self.publish(WalletState::connected(address, kind));
            }
            Err(err) => {
                tracing::warn!(wallet = %kind, %err, "wallet connection failed");
                self.publish(WalletState::error(err.to_string()));
            }
        }
    }

    /// Reset to DISCONNECTED unconditionally and drop the persisted state.
    pub fn disconnect(&self) {
        self.store.clear();
        self.publish(WalletState::disconnected());
    }

    /// Re-attempt the most recently attempted wallet type. No-op when
    /// nothing was ever attempted.
    pub async fn retry(&self) {
        let last = *self.last_attempted.lock().unwrap();
        if let Some(kind) = last {
            self.connect(kind).await;
        }
    }

    fn publish(&self, state: WalletState) {
        self.state_tx.send_replace(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::connector::{NoExtension, WalletError};
    use crate::wallet::state::ConnectionStatus;
    use async_trait::async_trait;

    struct FakeExtension {
        address: Option<String>,
    }

    #[async_trait]
    impl ExtensionWallet for FakeExtension {
        async fn is_connected(&self) -> bool {
            true
        }

        async fn request_access(&self) -> Result<String, WalletError> {
            match &self.address {
                Some(addr) => Ok(addr.clone()),
                None => Err(WalletError::Extension("User declined access".to_string())),
            }
        }
    }

    fn temp_store(name: &str) -> WalletStore {
        let path = std::env::temp_dir().join(format!(
            "pop_wallet_mgr_{}_{}.json",
            name,
            std::process::id()
        ));
        let store = WalletStore::new(&path);
        store.clear();
        store
    }

    fn manager(name: &str, extension: Arc<dyn ExtensionWallet>) -> WalletManager {
        WalletManager::new(extension, temp_store(name), Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_simulated_connect_reaches_connected() {
        let mgr = manager("sim", Arc::new(NoExtension));
        mgr.connect(WalletKind::Metamask).await;

        let state = mgr.state();
        assert_eq!(state.status, ConnectionStatus::Connected);
        assert_eq!(state.wallet_type, Some(WalletKind::Metamask));
        let addr = state.address.unwrap();
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 42);

        mgr.disconnect();
        assert_eq!(mgr.state(), WalletState::disconnected());
    }

    #[tokio::test]
    async fn test_missing_extension_surfaces_error() {
        let mgr = manager("noext", Arc::new(NoExtension));
        mgr.connect(WalletKind::Freighter).await;

        let state = mgr.state();
        assert_eq!(state.status, ConnectionStatus::Error);
        assert_eq!(state.error.as_deref(), Some("Freighter is not installed"));
        assert!(state.address.is_none());
        assert!(state.wallet_type.is_none());
    }

    #[tokio::test]
    async fn test_extension_failure_message_is_verbatim() {
        let mgr = manager("declined", Arc::new(FakeExtension { address: None }));
        mgr.connect(WalletKind::Freighter).await;
        assert_eq!(mgr.state().error.as_deref(), Some("User declined access"));
    }

    #[tokio::test]
    async fn test_extension_success_connects() {
        let addr = "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37";
        let mgr = manager(
            "ext_ok",
            Arc::new(FakeExtension {
                address: Some(addr.to_string()),
            }),
        );
        mgr.connect(WalletKind::Freighter).await;

        let state = mgr.state();
        assert_eq!(state.status, ConnectionStatus::Connected);
        assert_eq!(state.address.as_deref(), Some(addr));
    }

    #[tokio::test]
    async fn test_retry_reattempts_last_kind() {
        let mgr = manager("retry", Arc::new(NoExtension));
        mgr.connect(WalletKind::Freighter).await;
        assert_eq!(mgr.state().status, ConnectionStatus::Error);

        // Retry re-runs the same failing path.
        mgr.retry().await;
        let state = mgr.state();
        assert_eq!(state.status, ConnectionStatus::Error);
        assert_eq!(state.error.as_deref(), Some("Freighter is not installed"));
    }

    #[tokio::test]
    async fn test_retry_without_prior_attempt_is_noop() {
        let mgr = manager("retry_noop", Arc::new(NoExtension));
        mgr.retry().await;
        assert_eq!(mgr.state(), WalletState::disconnected());
    }

    #[tokio::test]
    async fn test_connected_state_restores_from_store() {
        let store = temp_store("restore");
        store.save(&PersistedWallet {
            address: "0x1111111111111111111111111111111111111111".to_string(),
            wallet_type: WalletKind::Coinbase,
        });

        let mgr = WalletManager::new(Arc::new(NoExtension), store.clone(), Duration::from_millis(1));
        let state = mgr.state();
        assert_eq!(state.status, ConnectionStatus::Connected);
        assert_eq!(state.wallet_type, Some(WalletKind::Coinbase));

        mgr.disconnect();
        assert_eq!(store.load(), None);
    }
}
