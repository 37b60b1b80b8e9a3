//! Block reward and difficulty schedule
//!
//! Pure functions of the previous block's metadata and the chain parameters.
//! All three are total: given a well-formed previous block they cannot fail.
//!
//! `next_difficulty_bits` and `next_difficulty` are deliberately kept as two
//! independent recurrences rather than deriving the difficulty from the bits.
//! They agree only while their intervals coincide; at a shared boundary the
//! stored difficulty is computed from a locally incremented copy of the
//! previous bits while the stored bits also increment, which double-counts.
//! This reproduces the historical schedule exactly (see DESIGN.md).

use crate::config::ChainParams;
use crate::core::Block;
use log::info;

/// Reward for the block following `previous`.
///
/// Genesis gets `initial_reward`. The reward halves when the previous height
/// lands on a halving boundary, drops to 0 permanently once it falls below 1,
/// and otherwise carries over unchanged. Monotonically non-increasing.
pub fn next_block_reward(previous: Option<&Block>, params: &ChainParams) -> f64 {
    let previous = match previous {
        Some(block) => block,
        None => return params.initial_reward,
    };

    let current_reward = previous.get_block_reward();
    if current_reward > 1.0 && previous.get_height() % params.reward_halving_interval == 0 {
        let halved = current_reward / 2.0;
        info!(
            "Block reward halves after height {}: {current_reward} -> {halved}",
            previous.get_height()
        );
        halved
    } else if current_reward < 1.0 {
        0.0
    } else {
        current_reward
    }
}

/// Difficulty bits for the block following `previous`.
///
/// Genesis gets 0; one extra bit whenever the previous height lands on a bits
/// boundary. Monotonically non-decreasing.
pub fn next_difficulty_bits(previous: Option<&Block>, params: &ChainParams) -> u32 {
    let previous = match previous {
        Some(block) => block,
        None => return 0,
    };

    let current_bits = previous.get_difficulty_bits();
    if previous.get_height() % params.difficulty_bits_interval == 0 {
        current_bits + 1
    } else {
        current_bits
    }
}

/// Numeric difficulty for the block following `previous`.
///
/// Genesis gets 1. At a recompute boundary the difficulty becomes
/// `2^(previous_bits + 1)`, computed from a local increment of the previous
/// block's bits; otherwise the previous difficulty carries over.
pub fn next_difficulty(previous: Option<&Block>, params: &ChainParams) -> u64 {
    let previous = match previous {
        Some(block) => block,
        None => return 1,
    };

    if previous.get_height() % params.difficulty_recompute_interval == 0 {
        let incremented_bits = previous.get_difficulty_bits() + 1;
        power_of_two(incremented_bits)
    } else {
        previous.get_difficulty()
    }
}

fn power_of_two(bits: u32) -> u64 {
    1u64.checked_shl(bits).unwrap_or(u64::MAX)
}
