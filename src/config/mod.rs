//! Configuration management
//!
//! Chain parameters (reward/difficulty schedule, nonce bound) and node
//! settings, loadable from a TOML file with environment overrides.

pub mod settings;

pub use settings::{ChainParams, Settings, GLOBAL_SETTINGS};
