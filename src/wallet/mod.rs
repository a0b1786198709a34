//! Wallet connection state machine
//!
//! ```text
//! DISCONNECTED -> CONNECTING -> CONNECTED
//!                     |
//!                   ERROR  (retry re-attempts the same wallet type)
//! ```
//!
//! The manager is an explicit state holder passed by reference to consumers;
//! UI layers observe it through a watch channel instead of an ambient
//! context. Only the CONNECTED state is persisted (address + wallet type),
//! and it is restored on construction. Freighter is the one wallet type with
//! a real integration seam; every other type is simulated behind a fixed
//! delay.

pub mod connector;
pub mod manager;
pub mod state;
pub mod store;

pub use connector::{ExtensionWallet, NoExtension, WalletError, mock_address};
pub use manager::WalletManager;
pub use state::{ConnectionStatus, WalletKind, WalletState, truncate_address};
pub use store::{PersistedWallet, WalletStore};
