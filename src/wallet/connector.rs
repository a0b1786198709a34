//! Wallet connectors
//!
//! Freighter is the one wallet type with a real integration seam, expressed
//! as the [`ExtensionWallet`] trait: a capability probe plus an address
//! request whose failure message is surfaced to the user verbatim. Every
//! other wallet type is simulated with a synthesized address.

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;

use super::state::WalletKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Freighter is not installed")]
    ExtensionMissing,

    /// Failure reported by the extension itself, passed through verbatim.
    #[error("{0}")]
    Extension(String),
}

/// Seam to the browser-extension wallet.
#[async_trait]
pub trait ExtensionWallet: Send + Sync {
    /// Capability probe: is the extension reachable at all?
    async fn is_connected(&self) -> bool;

    /// Request access and return the account address.
    async fn request_access(&self) -> Result<String, WalletError>;
}

/// Default seam implementation: no extension exists in this environment, so
/// the capability probe always fails. Swapped for a real bridge when the
/// demo grows one.
pub struct NoExtension;

#[async_trait]
impl ExtensionWallet for NoExtension {
    async fn is_connected(&self) -> bool {
        false
    }

    async fn request_access(&self) -> Result<String, WalletError> {
        Err(WalletError::ExtensionMissing)
    }
}

/// Connect through the extension seam: probe first, then request access.
pub async fn connect_extension(ext: &dyn ExtensionWallet) -> Result<String, WalletError> {
    if !ext.is_connected().await {
        return Err(WalletError::ExtensionMissing);
    }
    ext.request_access().await
}

const HEX: &[u8] = b"0123456789abcdef";

/// Synthesize a pseudo-address in the wallet family's format: Stellar-style
/// `G` + 55 uppercase characters, or EVM-style `0x` + 40 hex characters.
pub fn mock_address<R: Rng + ?Sized>(kind: WalletKind, rng: &mut R) -> String {
    if kind.is_stellar() {
        let body: String = (0..55)
            .map(|_| (HEX[rng.gen_range(0..HEX.len())] as char).to_ascii_uppercase())
            .collect();
        format!("G{}", body)
    } else {
        let body: String = (0..40)
            .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
            .collect();
        format!("0x{}", body)
    }
}
