//! Data storage and persistence
//!
//! The block store trait the ledger hands finished blocks to, plus its
//! sled-backed and in-memory implementations and the CLI's pending-transaction
//! queue.

pub mod block_store;
pub mod memory_store;
pub mod pending_pool;
pub mod sled_store;

pub use block_store::{BlockStore, SortField};
pub use memory_store::MemoryBlockStore;
pub use pending_pool::PendingPool;
pub use sled_store::SledBlockStore;
