use crate::core::Block;
use crate::error::{LedgerError, Result};
use crate::storage::block_store::{rank_blocks, BlockStore};
use std::sync::RwLock;

/// In-memory block store for tests and embedding, ordered by insertion.
pub struct MemoryBlockStore {
    inner: RwLock<Vec<Block>>,
}

impl Default for MemoryBlockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBlockStore {
    pub fn new() -> MemoryBlockStore {
        MemoryBlockStore {
            inner: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Block>>> {
        self.inner
            .read()
            .map_err(|_| LedgerError::Store("Block store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Block>>> {
        self.inner
            .write()
            .map_err(|_| LedgerError::Store("Block store lock poisoned".to_string()))
    }
}

impl BlockStore for MemoryBlockStore {
    fn insert(&self, block: &Block) -> Result<()> {
        self.write()?.push(block.clone());
        Ok(())
    }

    fn count(&self) -> Result<u64> {
        Ok(self.read()?.len() as u64)
    }

    fn find_by_height(&self, height: u64) -> Result<Option<Block>> {
        let blocks = self.read()?;
        if height == 0 || height > blocks.len() as u64 {
            return Ok(None);
        }
        Ok(blocks
            .iter()
            .find(|b| b.get_height() == height)
            .cloned())
    }

    fn find_top_n(&self, sort_field: &str, n: usize) -> Result<Vec<Block>> {
        let blocks = self.read()?.clone();
        Ok(rank_blocks(blocks, sort_field, n))
    }

    fn drop_all(&self) -> Result<()> {
        self.write()?.clear();
        Ok(())
    }
}
