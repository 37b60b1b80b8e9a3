use crate::error::{LedgerError, Result};
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub static GLOBAL_SETTINGS: Lazy<Settings> = Lazy::new(|| match Settings::load() {
    Ok(settings) => settings,
    Err(e) => {
        warn!("Falling back to default settings: {e}");
        Settings::default()
    }
});

const CONFIG_PATH_KEY: &str = "LEDGERDB_CONFIG";
const DB_PATH_KEY: &str = "LEDGERDB_DB_PATH";
const DEFAULT_CONFIG_PATH: &str = "ledgerdb.toml";
const DEFAULT_DB_PATH: &str = "data";

/// Tunable constants of the difficulty/reward schedule and the nonce bound.
///
/// The defaults reproduce the classic teaching configuration: a 50-token
/// reward halved every 1000 blocks, one extra difficulty bit every 100 blocks,
/// and a 2^32 nonce search bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainParams {
    pub initial_reward: f64,
    pub reward_halving_interval: u64,
    pub difficulty_bits_interval: u64,
    pub difficulty_recompute_interval: u64,
    pub max_nonce: u64,
}

impl Default for ChainParams {
    fn default() -> Self {
        ChainParams {
            initial_reward: 50.0,
            reward_halving_interval: 1000,
            difficulty_bits_interval: 100,
            difficulty_recompute_interval: 100,
            max_nonce: 1 << 32,
        }
    }
}

/// Node-level settings: where the block database lives plus the chain
/// parameters. Read from an optional TOML file with environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub db_path: String,
    pub params: ChainParams,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            db_path: DEFAULT_DB_PATH.to_string(),
            params: ChainParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from `ledgerdb.toml` (path overridable via
    /// `LEDGERDB_CONFIG`); a missing file yields the defaults. The database
    /// path can additionally be overridden via `LEDGERDB_DB_PATH`.
    pub fn load() -> Result<Settings> {
        let config_path =
            env::var(CONFIG_PATH_KEY).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut settings = if Path::new(&config_path).exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Invalid config {config_path}: {e}")))?
        } else {
            Settings::default()
        };

        if let Ok(db_path) = env::var(DB_PATH_KEY) {
            settings.db_path = db_path;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_teaching_configuration() {
        let params = ChainParams::default();
        assert_eq!(params.initial_reward, 50.0);
        assert_eq!(params.reward_halving_interval, 1000);
        assert_eq!(params.difficulty_bits_interval, 100);
        assert_eq!(params.difficulty_recompute_interval, 100);
        assert_eq!(params.max_nonce, 1 << 32);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            db_path = "chain-data"

            [params]
            initial_reward = 32.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.db_path, "chain-data");
        assert_eq!(settings.params.initial_reward, 32.0);
        assert_eq!(settings.params.reward_halving_interval, 1000);
    }
}
