// Sled-backed block store. Blocks live in their own tree keyed by big-endian
// height so the natural key order is chain order; values are bincode records.

use crate::core::Block;
use crate::error::{LedgerError, Result};
use crate::storage::block_store::{rank_blocks, BlockStore};
use crate::utils::{deserialize, serialize};
use sled::{Db, Tree};

const BLOCKS_TREE: &str = "blocks";

pub struct SledBlockStore {
    db: Db,
}

impl SledBlockStore {
    /// Open (or create) a store at the given filesystem path.
    pub fn open(db_path: &str) -> Result<SledBlockStore> {
        let db = sled::open(db_path)
            .map_err(|e| LedgerError::Store(format!("Failed to open database: {e}")))?;
        Ok(SledBlockStore { db })
    }

    /// Wrap an already-open database, sharing it with other trees.
    pub fn with_db(db: Db) -> SledBlockStore {
        SledBlockStore { db }
    }

    fn blocks_tree(&self) -> Result<Tree> {
        self.db
            .open_tree(BLOCKS_TREE)
            .map_err(|e| LedgerError::Store(format!("Failed to open blocks tree: {e}")))
    }
}

impl BlockStore for SledBlockStore {
    fn insert(&self, block: &Block) -> Result<()> {
        let tree = self.blocks_tree()?;
        let block_data = serialize(block)?;
        tree.insert(block.get_height().to_be_bytes(), block_data)
            .map_err(|e| LedgerError::Store(format!("Failed to insert block: {e}")))?;
        Ok(())
    }

    fn count(&self) -> Result<u64> {
        Ok(self.blocks_tree()?.len() as u64)
    }

    fn find_by_height(&self, height: u64) -> Result<Option<Block>> {
        if height == 0 {
            return Ok(None);
        }
        let tree = self.blocks_tree()?;
        let bytes = tree
            .get(height.to_be_bytes())
            .map_err(|e| LedgerError::Store(format!("Failed to get block: {e}")))?;

        match bytes {
            Some(bytes) => Ok(Some(deserialize::<Block>(&bytes)?)),
            None => Ok(None),
        }
    }

    fn find_top_n(&self, sort_field: &str, n: usize) -> Result<Vec<Block>> {
        let tree = self.blocks_tree()?;
        let mut blocks = Vec::with_capacity(tree.len());
        for entry in tree.iter() {
            let (_, bytes) =
                entry.map_err(|e| LedgerError::Store(format!("Failed to scan blocks: {e}")))?;
            blocks.push(deserialize::<Block>(&bytes)?);
        }
        Ok(rank_blocks(blocks, sort_field, n))
    }

    fn drop_all(&self) -> Result<()> {
        self.db
            .drop_tree(BLOCKS_TREE)
            .map_err(|e| LedgerError::Store(format!("Failed to drop blocks tree: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn block(height: u64) -> Block {
        Block::new_test_block(height, 50.0, 0, 1)
    }

    #[test]
    fn test_insert_count_and_lookup() {
        let dir = tempdir().unwrap();
        let store = SledBlockStore::open(dir.path().to_str().unwrap()).unwrap();

        store.insert(&block(1)).unwrap();
        store.insert(&block(2)).unwrap();

        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(store.find_by_height(2).unwrap().unwrap().get_height(), 2);
        assert!(store.find_by_height(3).unwrap().is_none());
        assert!(store.find_by_height(0).unwrap().is_none());
    }

    #[test]
    fn test_top_n_over_persisted_blocks() {
        let dir = tempdir().unwrap();
        let store = SledBlockStore::open(dir.path().to_str().unwrap()).unwrap();
        for height in 1..=5 {
            store.insert(&block(height)).unwrap();
        }

        let top = store.find_top_n("height", 3).unwrap();
        let heights: Vec<u64> = top.iter().map(|b| b.get_height()).collect();
        assert_eq!(heights, vec![5, 4, 3]);

        assert!(store.find_top_n("no_such_field", 3).unwrap().is_empty());
    }

    #[test]
    fn test_drop_all_then_reuse() {
        let dir = tempdir().unwrap();
        let store = SledBlockStore::open(dir.path().to_str().unwrap()).unwrap();
        store.insert(&block(1)).unwrap();
        store.drop_all().unwrap();

        assert_eq!(store.count().unwrap(), 0);
        store.insert(&block(1)).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }
}
