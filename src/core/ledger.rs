// This is the core ledger implementation - the orchestrator of the whole chain
// It owns the pending-transaction pool, builds candidate blocks from the
// schedule, runs the proof-of-work search and hands finished blocks to the
// external block store.

use crate::config::ChainParams;
use crate::core::block::{Block, CandidateBlock};
use crate::core::hashing::canonical_hash;
use crate::core::merkle::merkle_root;
use crate::core::proof_of_work::ProofOfWork;
use crate::core::schedule;
use crate::core::Transaction;
use crate::error::{LedgerError, Result};
use crate::storage::BlockStore;
use crate::utils::clock::current_timestamp;
use log::info;
use std::time::Instant;

// Fixed addresses for the reward transaction credited on every mined block
pub const REWARD_SENDER: &str = "00000000000000000000x0";
pub const MINER_ADDRESS: &str = "00000000000000000000x1";

/// The ledger instance. It exclusively owns the pending pool between blocks;
/// `mine` and `reset` take `&mut self` and must not run concurrently with
/// each other on the same chain (heights come from the store's row count, so
/// inserts must stay serialized).
pub struct Ledger<S: BlockStore> {
    store: S,
    params: ChainParams,
    pending: Vec<Transaction>,
    // Measurements of the latest mining run, carried onto the next block
    // record the way the original chain did (genesis carries zeros)
    elapsed_time: f64,
    hash_power: f64,
}

impl<S: BlockStore> Ledger<S> {
    pub fn new(store: S, params: ChainParams) -> Ledger<S> {
        Ledger {
            store,
            params,
            pending: Vec::new(),
            elapsed_time: 0.0,
            hash_power: 0.0,
        }
    }

    /// Append a transfer to the pending pool and return its derived id.
    /// No balance or signature validation happens here.
    pub fn add_transaction(&mut self, sender: &str, recipient: &str, amount: f64) -> Result<String> {
        let tx = Transaction::new(sender, recipient, amount)?;
        let id = tx.get_id().to_string();
        self.pending.push(tx);
        Ok(id)
    }

    /// Inject an already-formed transaction (used by the CLI wiring when it
    /// reloads queued transactions).
    pub fn submit_transaction(&mut self, tx: Transaction) {
        self.pending.push(tx);
    }

    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending
    }

    /// Mine the next block: schedule the reward and difficulty, credit the
    /// miner, search for a nonce and persist the sealed block.
    ///
    /// A `NonceNotFound` abort leaves the pending pool exactly as it was, so
    /// the caller can retry with adjusted parameters.
    pub fn mine(&mut self) -> Result<Block> {
        let previous = self.store.last_block()?;

        // The reward transaction goes into a local copy of the pool; the real
        // pool is only cleared once the block is safely persisted
        let reward = schedule::next_block_reward(previous.as_ref(), &self.params);
        let mut transactions = self.pending.clone();
        transactions.push(Transaction::new(REWARD_SENDER, MINER_ADDRESS, reward)?);

        let candidate = self.build_candidate(previous.as_ref(), transactions)?;
        let difficulty_bits = candidate.get_difficulty_bits();
        info!(
            "Mining block at height {} with difficulty bits {difficulty_bits}",
            candidate.get_height()
        );

        let pow = ProofOfWork::new(&candidate, self.params.max_nonce)?;
        let started = Instant::now();
        let nonce = pow
            .run()
            .ok_or(LedgerError::NonceNotFound { difficulty_bits })?;

        // Hash power is nonce count over wall-clock time; a zero elapsed time
        // keeps the previous estimate instead of dividing by zero
        self.elapsed_time = started.elapsed().as_secs_f64();
        if self.elapsed_time > 0.0 {
            self.hash_power = nonce as f64 / self.elapsed_time;
        }

        let block = candidate.seal(nonce, self.elapsed_time, self.hash_power);
        self.store.insert(&block)?;
        self.pending.clear();

        info!(
            "Block #{} added to the chain (nonce {nonce}, {:.4}s)",
            block.get_height(),
            block.get_elapsed_time()
        );
        Ok(block)
    }

    /// Drop every persisted block and re-seed the genesis block with no
    /// predecessor and nonce 0.
    pub fn reset(&mut self) -> Result<Block> {
        self.store.drop_all()?;
        self.elapsed_time = 0.0;
        self.hash_power = 0.0;

        let candidate = self.build_candidate(None, self.pending.clone())?;
        let block = candidate.seal(0, 0.0, 0.0);
        self.store.insert(&block)?;
        self.pending.clear();

        info!("Chain reset, genesis block seeded");
        Ok(block)
    }

    // Assemble the pre-nonce candidate record: next height from the store's
    // row count, link hash over the previous block's full record, Merkle root
    // over the transaction ids in pool order, and the scheduled fields
    fn build_candidate(
        &self,
        previous: Option<&Block>,
        transactions: Vec<Transaction>,
    ) -> Result<CandidateBlock> {
        let height = self.store.count()? + 1;
        let previous_hash = match previous {
            Some(block) => Some(canonical_hash(block)?),
            None => None,
        };

        let transaction_ids: Vec<String> = transactions
            .iter()
            .map(|tx| tx.get_id().to_string())
            .collect();
        let root = merkle_root(&transaction_ids);

        Ok(CandidateBlock::new(
            height,
            previous_hash,
            root,
            transactions,
            schedule::next_difficulty_bits(previous, &self.params),
            schedule::next_difficulty(previous, &self.params),
            schedule::next_block_reward(previous, &self.params),
            current_timestamp(),
        ))
    }

    pub fn chain_length(&self) -> Result<u64> {
        self.store.count()
    }

    pub fn last_block(&self) -> Result<Option<Block>> {
        self.store.last_block()
    }

    pub fn genesis_block(&self) -> Result<Option<Block>> {
        self.store.find_by_height(1)
    }

    pub fn block_by_height(&self, height: u64) -> Result<Option<Block>> {
        self.store.find_by_height(height)
    }

    /// The most recent `n` blocks, newest first.
    pub fn last_n_blocks(&self, n: usize) -> Result<Vec<Block>> {
        self.store.find_top_n("height", n)
    }

    /// Top `n` blocks by one of the documented metrics; an unknown metric
    /// yields an empty list.
    pub fn top_blocks(&self, sort_field: &str, n: usize) -> Result<Vec<Block>> {
        self.store.find_top_n(sort_field, n)
    }
}
