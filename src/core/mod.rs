//! Core ledger functionality
//!
//! Canonical hashing, Merkle aggregation, the reward/difficulty schedule,
//! the proof-of-work engine and the ledger orchestrator that ties them to
//! the external block store.

pub mod block;
pub mod hashing;
pub mod ledger;
pub mod merkle;
pub mod proof_of_work;
pub mod schedule;
pub mod transaction;

pub use block::{Block, CandidateBlock};
pub use hashing::{canonical_hash, canonical_json, hash_string_pair, sha256_digest};
pub use ledger::{Ledger, MINER_ADDRESS, REWARD_SENDER};
pub use merkle::merkle_root;
pub use proof_of_work::ProofOfWork;
pub use schedule::{next_block_reward, next_difficulty, next_difficulty_bits};
pub use transaction::{Transaction, TransactionInfo};
