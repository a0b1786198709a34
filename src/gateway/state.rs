use std::sync::Arc;

use crate::directory::{AnchorDirectory, RateTable};
use crate::ledger::LedgerClient;
use crate::store::RemitStore;

/// Gateway shared state.
#[derive(Clone)]
pub struct AppState {
    /// Corridor directory (read-only)
    pub directory: Arc<AnchorDirectory>,
    /// Exchange-rate snapshot (read-only)
    pub rates: Arc<RateTable>,
    /// Stubbed ledger client
    pub ledger: Arc<LedgerClient>,
    /// Remittance table backend
    pub store: Arc<dyn RemitStore>,
}

impl AppState {
    pub fn new(
        directory: Arc<AnchorDirectory>,
        rates: Arc<RateTable>,
        ledger: Arc<LedgerClient>,
        store: Arc<dyn RemitStore>,
    ) -> Self {
        Self {
            directory,
            rates,
            ledger,
            store,
        }
    }
}
