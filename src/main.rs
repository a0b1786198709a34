//! POP gateway entry point
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌──────────┐
//! │  Config  │───▶│ Directory  │───▶│ Gateway  │
//! │  (YAML)  │    │ + Rates    │    │  (HTTP)  │
//! └──────────┘    └────────────┘    └──────────┘
//! ```
//!
//! Loads the environment config, seeds the corridor directory and serves the
//! mock API. The wallet manager is constructed up front so a persisted
//! connection is restored (and logged) at boot.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use pop_remit::config::AppConfig;
use pop_remit::directory::{AnchorDirectory, RateTable};
use pop_remit::gateway::{self, AppState};
use pop_remit::ledger::LedgerClient;
use pop_remit::logging::init_logging;
use pop_remit::store::{MemoryStore, RemitStore, UnconfiguredStore};
use pop_remit::wallet::{NoExtension, WalletManager, WalletStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = init_logging(&config);

    println!("💸 POP Remit v{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    println!("   env: {}", env);

    let directory = Arc::new(AnchorDirectory::builtin());
    let rates = Arc::new(RateTable::builtin());
    println!(
        "🌎 Corridor directory: {} countries, {} anchors",
        directory.countries().len(),
        directory.anchors().len()
    );

    let ledger = Arc::new(LedgerClient::new(config.ledger.clone()));
    tracing::info!(horizon = %ledger.config().horizon_url, "ledger scaffold ready (placeholder)");

    let store: Arc<dyn RemitStore> = if config.database.enabled {
        println!("🗄️  Remittance table: in-memory");
        Arc::new(MemoryStore::new())
    } else {
        println!("⚠️  Remittance table: not configured");
        Arc::new(UnconfiguredStore)
    };

    // Restore a persisted wallet connection, if any.
    if let Some(dir) = Path::new(&config.wallet.state_file).parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create wallet state dir {}", dir.display()))?;
    }
    let wallet = WalletManager::new(
        Arc::new(NoExtension),
        WalletStore::new(&config.wallet.state_file),
        Duration::from_millis(config.wallet.connect_delay_ms),
    );
    let wallet_state = wallet.state();
    println!(
        "👛 Wallet: {:?}{}",
        wallet_state.status,
        wallet_state
            .truncated_address()
            .map(|a| format!(" ({})", a))
            .unwrap_or_default()
    );

    let state = Arc::new(AppState::new(directory, rates, ledger, store));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state).await;

    Ok(())
}
