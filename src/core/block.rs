use crate::core::Transaction;
use serde::{Deserialize, Serialize};

/// A sealed block, exactly as it is persisted by the block store.
///
/// The genesis block (height 1) has no predecessor, so `previous_hash` is
/// `None`; `merkle_root` is `None` iff the block carries no transactions.
/// `elapsed_time` and `hash_power` record the mining run that sealed the
/// block (both 0 for a seeded genesis).
#[derive(Debug, Clone, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Block {
    height: u64,
    previous_hash: Option<String>,
    merkle_root: Option<String>,
    transactions: Vec<Transaction>,
    number_of_transactions: u64,
    nonce: u64,
    difficulty_bits: u32,
    difficulty: u64,
    block_reward: f64,
    timestamp: String,
    elapsed_time: f64,
    hash_power: f64,
}

/// The pre-nonce candidate record the proof-of-work engine searches over.
///
/// Identical to `Block` minus the three fields only known once the search
/// finishes (`nonce`, `elapsed_time`, `hash_power`). Its canonical JSON
/// serialization is the proof-of-work pre-image.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateBlock {
    height: u64,
    previous_hash: Option<String>,
    merkle_root: Option<String>,
    transactions: Vec<Transaction>,
    number_of_transactions: u64,
    difficulty_bits: u32,
    difficulty: u64,
    block_reward: f64,
    timestamp: String,
}

impl CandidateBlock {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        height: u64,
        previous_hash: Option<String>,
        merkle_root: Option<String>,
        transactions: Vec<Transaction>,
        difficulty_bits: u32,
        difficulty: u64,
        block_reward: f64,
        timestamp: String,
    ) -> CandidateBlock {
        let number_of_transactions = transactions.len() as u64;
        CandidateBlock {
            height,
            previous_hash,
            merkle_root,
            transactions,
            number_of_transactions,
            difficulty_bits,
            difficulty,
            block_reward,
            timestamp,
        }
    }

    pub fn get_height(&self) -> u64 {
        self.height
    }

    pub fn get_difficulty_bits(&self) -> u32 {
        self.difficulty_bits
    }

    /// Attach the found nonce and the mining measurements, producing the
    /// immutable block record handed to the store.
    pub fn seal(self, nonce: u64, elapsed_time: f64, hash_power: f64) -> Block {
        Block {
            height: self.height,
            previous_hash: self.previous_hash,
            merkle_root: self.merkle_root,
            transactions: self.transactions,
            number_of_transactions: self.number_of_transactions,
            nonce,
            difficulty_bits: self.difficulty_bits,
            difficulty: self.difficulty,
            block_reward: self.block_reward,
            timestamp: self.timestamp,
            elapsed_time,
            hash_power,
        }
    }
}

impl Block {
    pub fn get_height(&self) -> u64 {
        self.height
    }

    pub fn get_previous_hash(&self) -> Option<&str> {
        self.previous_hash.as_deref()
    }

    pub fn get_merkle_root(&self) -> Option<&str> {
        self.merkle_root.as_deref()
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get_number_of_transactions(&self) -> u64 {
        self.number_of_transactions
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    pub fn get_difficulty_bits(&self) -> u32 {
        self.difficulty_bits
    }

    pub fn get_difficulty(&self) -> u64 {
        self.difficulty
    }

    pub fn get_block_reward(&self) -> f64 {
        self.block_reward
    }

    pub fn get_timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn get_elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn get_hash_power(&self) -> f64 {
        self.hash_power
    }

    /// Create a block with fixed schedule fields (for testing only)
    #[cfg(test)]
    pub fn new_test_block(
        height: u64,
        block_reward: f64,
        difficulty_bits: u32,
        difficulty: u64,
    ) -> Block {
        Block {
            height,
            previous_hash: None,
            merkle_root: None,
            transactions: Vec::new(),
            number_of_transactions: 0,
            nonce: 0,
            difficulty_bits,
            difficulty,
            block_reward,
            timestamp: "Sat Jan  1 00:00:00 2022".to_string(),
            elapsed_time: 0.0,
            hash_power: 0.0,
        }
    }
}
