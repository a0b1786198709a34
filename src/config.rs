use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Ledger network endpoints for the (stubbed) settlement layer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LedgerConfig {
    pub horizon_url: String,
    pub network_passphrase: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            horizon_url: "https://horizon.stellar.org".to_string(),
            network_passphrase: "Public Global Stellar Network ; September 2015".to_string(),
        }
    }
}

/// Remittance table backend. Disabled by default: the demo ships without a
/// real database, and the test endpoint reports the missing backend instead.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub enabled: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WalletConfig {
    /// Where the connected wallet state is persisted between runs.
    pub state_file: String,
    /// Simulated connect latency for wallet types without a real integration.
    pub connect_delay_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            state_file: "./data/pop_wallet_state.json".to_string(),
            connect_delay_ms: 1000,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}
