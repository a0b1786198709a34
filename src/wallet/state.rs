//! Wallet state definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported wallet families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Freighter,
    Metamask,
    Walletconnect,
    Coinbase,
    Trust,
}

impl WalletKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletKind::Freighter => "freighter",
            WalletKind::Metamask => "metamask",
            WalletKind::Walletconnect => "walletconnect",
            WalletKind::Coinbase => "coinbase",
            WalletKind::Trust => "trust",
        }
    }

    /// Freighter is the only Stellar-native family; the rest present
    /// EVM-style addresses.
    pub fn is_stellar(&self) -> bool {
        matches!(self, WalletKind::Freighter)
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Connection lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Error,
}

/// Observable wallet state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub status: ConnectionStatus,
    pub address: Option<String>,
    pub wallet_type: Option<WalletKind>,
    pub error: Option<String>,
}

impl WalletState {
    pub fn disconnected() -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            address: None,
            wallet_type: None,
            error: None,
        }
    }

    pub fn connecting(kind: WalletKind) -> Self {
        Self {
            status: ConnectionStatus::Connecting,
            address: None,
            wallet_type: Some(kind),
            error: None,
        }
    }

    pub fn connected(address: String, kind: WalletKind) -> Self {
        Self {
            status: ConnectionStatus::Connected,
            address: Some(address),
            wallet_type: Some(kind),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: ConnectionStatus::Error,
            address: None,
            wallet_type: None,
            error: Some(message),
        }
    }

    pub fn truncated_address(&self) -> Option<String> {
        self.address.as_deref().map(truncate_address)
    }
}

/// Shorten an address for display: first six characters, ellipsis, last four.
pub fn truncate_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
