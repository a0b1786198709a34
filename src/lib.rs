//! POP - Proof of Payment remittance demo core
//!
//! Route comparison, simulated transfer execution and mock Proof of Payment
//! generation for cross-border remittances. Everything here is deliberately
//! synthetic: routes carry randomized fees over a static anchor directory,
//! transfers advance on timers with an injected bridge fault, and the ledger
//! and database layers are explicit placeholders awaiting real integrations.
//!
//! # Modules
//!
//! - [`directory`] - Country, anchor and exchange-rate reference data
//! - [`models`] - Route, transaction and proof records plus id synthesis
//! - [`routes`] - Randomized route synthesizer
//! - [`transfer`] - Timer-driven transfer state machine
//! - [`wallet`] - Wallet connection state machine with durable state
//! - [`ledger`] - Stubbed Stellar network scaffold
//! - [`store`] - Stubbed remittance table backend
//! - [`gateway`] - Mock HTTP API surface

pub mod config;
pub mod directory;
pub mod gateway;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod routes;
pub mod store;
pub mod transfer;
pub mod wallet;

// Convenient re-exports at crate root
pub use directory::{Anchor, AnchorDirectory, AnchorKind, AnchorStatus, Country, RateTable};
pub use models::{FeeBreakdown, ProofOfPayment, RemittanceRoute, Transaction, TransactionStatus};
pub use routes::generate_routes;
pub use transfer::{RunState, StepTiming, TransferExecutor, TransferSession, TransferStep};
pub use wallet::{ConnectionStatus, WalletKind, WalletManager, WalletState};
