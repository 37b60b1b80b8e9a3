use crate::core::Block;
use crate::error::Result;
use std::cmp::Ordering;
use std::str::FromStr;

/// The persistent ordered block collection the ledger hands finished blocks
/// to. Heights are assigned as `count() + 1` at insertion time, so inserts
/// into one chain must be externally serialized or heights can be assigned
/// non-monotonically.
pub trait BlockStore {
    /// Append a sealed block. Blocks are never mutated or deleted afterwards
    /// except by `drop_all`.
    fn insert(&self, block: &Block) -> Result<()>;

    /// Number of persisted blocks; the ledger uses this as the next height
    /// minus one.
    fn count(&self) -> Result<u64>;

    /// Point lookup by height. Heights outside `[1, count]` yield `None`,
    /// not an error.
    fn find_by_height(&self, height: u64) -> Result<Option<Block>>;

    /// The top `n` blocks ordered descending by the named metric. An
    /// unrecognized metric name yields an empty list.
    fn find_top_n(&self, sort_field: &str, n: usize) -> Result<Vec<Block>>;

    /// Delete every block. The ledger re-seeds a genesis block afterwards.
    fn drop_all(&self) -> Result<()>;

    /// The most recently persisted block, if any.
    fn last_block(&self) -> Result<Option<Block>> {
        self.find_by_height(self.count()?)
    }
}

/// Block metrics a store can rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Difficulty,
    ElapsedTime,
    BlockReward,
    HashPower,
    Height,
    Nonce,
    NumberOfTransactions,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "difficulty" => Ok(SortField::Difficulty),
            "elapsed_time" => Ok(SortField::ElapsedTime),
            "block_reward" => Ok(SortField::BlockReward),
            "hash_power" => Ok(SortField::HashPower),
            "height" => Ok(SortField::Height),
            "nonce" => Ok(SortField::Nonce),
            "number_of_transactions" => Ok(SortField::NumberOfTransactions),
            _ => Err(format!("Unknown sort field: {s}")),
        }
    }
}

impl SortField {
    fn compare(&self, a: &Block, b: &Block) -> Ordering {
        match self {
            SortField::Difficulty => a.get_difficulty().cmp(&b.get_difficulty()),
            SortField::ElapsedTime => a.get_elapsed_time().total_cmp(&b.get_elapsed_time()),
            SortField::BlockReward => a.get_block_reward().total_cmp(&b.get_block_reward()),
            SortField::HashPower => a.get_hash_power().total_cmp(&b.get_hash_power()),
            SortField::Height => a.get_height().cmp(&b.get_height()),
            SortField::Nonce => a.get_nonce().cmp(&b.get_nonce()),
            SortField::NumberOfTransactions => a
                .get_number_of_transactions()
                .cmp(&b.get_number_of_transactions()),
        }
    }
}

/// Shared ranking used by the store implementations: descending by the named
/// metric, truncated to `n`. Unknown metric names rank nothing.
pub(crate) fn rank_blocks(mut blocks: Vec<Block>, sort_field: &str, n: usize) -> Vec<Block> {
    let field = match SortField::from_str(sort_field) {
        Ok(field) => field,
        Err(_) => return Vec::new(),
    };

    blocks.sort_by(|a, b| field.compare(b, a));
    blocks.truncate(n);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(height: u64, reward: f64, bits: u32, difficulty: u64) -> Block {
        Block::new_test_block(height, reward, bits, difficulty)
    }

    #[test]
    fn test_rank_blocks_descending_by_height() {
        let blocks = vec![block(2, 50.0, 0, 1), block(3, 50.0, 0, 1), block(1, 50.0, 0, 1)];
        let ranked = rank_blocks(blocks, "height", 2);
        let heights: Vec<u64> = ranked.iter().map(|b| b.get_height()).collect();
        assert_eq!(heights, vec![3, 2]);
    }

    #[test]
    fn test_rank_blocks_by_float_metric() {
        let blocks = vec![block(1, 12.5, 0, 1), block(2, 50.0, 0, 1), block(3, 25.0, 0, 1)];
        let ranked = rank_blocks(blocks, "block_reward", 3);
        let rewards: Vec<f64> = ranked.iter().map(|b| b.get_block_reward()).collect();
        assert_eq!(rewards, vec![50.0, 25.0, 12.5]);
    }

    #[test]
    fn test_unknown_sort_field_ranks_nothing() {
        let blocks = vec![block(1, 50.0, 0, 1)];
        assert!(rank_blocks(blocks, "timestamp", 5).is_empty());
    }

    #[test]
    fn test_every_documented_metric_parses() {
        for name in [
            "difficulty",
            "elapsed_time",
            "block_reward",
            "hash_power",
            "height",
            "nonce",
            "number_of_transactions",
        ] {
            assert!(SortField::from_str(name).is_ok(), "{name}");
        }
    }
}
