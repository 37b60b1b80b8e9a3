//! # ledgerdb - A Single-Node Educational Proof-of-Work Ledger
//!
//! This is my teaching chain: it assembles transactions into blocks, links
//! blocks by hash, proves block validity with a brute-force proof-of-work
//! search and schedules a decaying reward and rising difficulty.
//!
//! ## What I Built
//! - **Canonical Hasher**: sorted-key JSON serialization hashed with SHA-256,
//!   so equal records always produce equal digests
//! - **Merkle Aggregator**: order-sensitive pairwise reduction of the
//!   transaction ids in each block
//! - **Schedule**: reward halving and exponential difficulty growth as pure
//!   functions of the previous block
//! - **Proof-of-Work Engine**: ascending nonce search against a 256-bit
//!   numeric target with a configurable bound
//! - **Ledger**: the orchestrator owning the pending pool and handing sealed
//!   blocks to a pluggable block store (sled-backed or in-memory)
//!
//! ## How I Organized My Code
//! - `core/`: hashing, Merkle, schedule, proof-of-work, ledger and the data
//!   types they share
//! - `storage/`: the `BlockStore` trait, its sled and in-memory backends and
//!   the CLI's pending-transaction queue
//! - `config/`: chain parameters and node settings (TOML file + env)
//! - `utils/`: binary serialization helpers and the wall-clock timestamp
//! - `cli/`: command-line interface for all ledger operations
//!
//! ## What I Deliberately Left Out
//! No peer networking, no signatures, no balance checks, no fork resolution.
//! One node, one chain, one miner - the parts with real algorithmic content
//! are the point.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{ChainParams, Settings, GLOBAL_SETTINGS};
pub use core::{
    canonical_hash, canonical_json, hash_string_pair, merkle_root, sha256_digest, Block,
    CandidateBlock, Ledger, ProofOfWork, Transaction, TransactionInfo, MINER_ADDRESS,
    REWARD_SENDER,
};
pub use error::{LedgerError, Result};
pub use storage::{BlockStore, MemoryBlockStore, PendingPool, SledBlockStore, SortField};
pub use utils::current_timestamp;
