use crate::core::Transaction;
use crate::error::{LedgerError, Result};
use crate::utils::{deserialize, serialize};
use sled::{Db, Tree};

const PENDING_TREE: &str = "pending";

/// Persists submitted-but-unmined transactions between CLI invocations.
///
/// The ledger itself owns its pending pool in memory; this tree only bridges
/// one-shot CLI runs, keyed by a monotonic counter so insertion order (and
/// therefore Merkle ordering) survives the round trip.
pub struct PendingPool {
    db: Db,
}

impl PendingPool {
    pub fn new(db: Db) -> PendingPool {
        PendingPool { db }
    }

    fn tree(&self) -> Result<Tree> {
        self.db
            .open_tree(PENDING_TREE)
            .map_err(|e| LedgerError::Store(format!("Failed to open pending tree: {e}")))
    }

    pub fn add(&self, tx: &Transaction) -> Result<()> {
        let tree = self.tree()?;
        let next_key = match tree
            .last()
            .map_err(|e| LedgerError::Store(format!("Failed to read pending tree: {e}")))?
        {
            Some((key, _)) => {
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&key);
                u64::from_be_bytes(bytes) + 1
            }
            None => 0,
        };

        tree.insert(next_key.to_be_bytes(), serialize(tx)?)
            .map_err(|e| LedgerError::Store(format!("Failed to queue transaction: {e}")))?;
        Ok(())
    }

    pub fn all(&self) -> Result<Vec<Transaction>> {
        let tree = self.tree()?;
        let mut transactions = Vec::with_capacity(tree.len());
        for entry in tree.iter() {
            let (_, bytes) = entry
                .map_err(|e| LedgerError::Store(format!("Failed to scan pending tree: {e}")))?;
            transactions.push(deserialize::<Transaction>(&bytes)?);
        }
        Ok(transactions)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.tree()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> Result<()> {
        self.db
            .drop_tree(PENDING_TREE)
            .map_err(|e| LedgerError::Store(format!("Failed to clear pending tree: {e}")))?;
        Ok(())
    }

    /// Take every queued transaction in insertion order, emptying the pool.
    pub fn drain(&self) -> Result<Vec<Transaction>> {
        let transactions = self.all()?;
        self.clear()?;
        Ok(transactions)
    }
}
