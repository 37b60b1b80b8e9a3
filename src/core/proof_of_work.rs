use crate::core::block::CandidateBlock;
use crate::core::hashing::{canonical_json, sha256_digest};
use crate::error::Result;
use log::debug;
use num_bigint::BigUint;

/// Brute-force nonce search for a candidate block.
///
/// The pre-image is the candidate's canonical serialization; each trial
/// appends the decimal form of the nonce, hashes, and interprets the digest
/// as a 256-bit unsigned integer. The first nonce (ascending from 0) whose
/// digest value falls strictly below `2^(256 - difficulty_bits)` wins, so the
/// result is deterministic given identical input bytes and difficulty.
pub struct ProofOfWork {
    pre_image: String,
    target: BigUint,
    difficulty_bits: u32,
    max_nonce: u64,
}

impl ProofOfWork {
    pub fn new(candidate: &CandidateBlock, max_nonce: u64) -> Result<ProofOfWork> {
        let difficulty_bits = candidate.get_difficulty_bits();
        let pre_image = canonical_json(candidate)?;
        let target = BigUint::from(1u8) << 256usize.saturating_sub(difficulty_bits as usize);

        Ok(ProofOfWork {
            pre_image,
            target,
            difficulty_bits,
            max_nonce,
        })
    }

    /// Search the nonce space in strictly ascending order. Returns `None`
    /// when the bound is exhausted; the caller treats that as a fatal mining
    /// failure, never a silent retry.
    pub fn run(&self) -> Option<u64> {
        for nonce in 0..self.max_nonce {
            if self.hash_attempt(nonce) < self.target {
                debug!(
                    "Found nonce {nonce} for difficulty bits {}",
                    self.difficulty_bits
                );
                return Some(nonce);
            }
        }
        None
    }

    /// Re-check the proof-of-work inequality for an already-found nonce.
    pub fn verify(candidate: &CandidateBlock, nonce: u64) -> Result<bool> {
        let pow = ProofOfWork::new(candidate, 0)?;
        Ok(pow.hash_attempt(nonce) < pow.target)
    }

    fn hash_attempt(&self, nonce: u64) -> BigUint {
        let data = format!("{}{}", self.pre_image, nonce);
        let digest = sha256_digest(data.as_bytes());
        BigUint::from_bytes_be(&digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transaction;

    fn test_candidate(difficulty_bits: u32) -> CandidateBlock {
        let tx = Transaction::new("alice", "bob", 5.0).unwrap();
        CandidateBlock::new(
            2,
            Some("aa".repeat(32)),
            Some(tx.get_id().to_string()),
            vec![tx],
            difficulty_bits,
            1 << difficulty_bits,
            50.0,
            "Sat Jan  1 00:00:00 2022".to_string(),
        )
    }

    #[test]
    fn test_zero_bits_accepts_the_first_nonce() {
        // Target 2^256 exceeds every possible digest, so nonce 0 qualifies
        let pow = ProofOfWork::new(&test_candidate(0), 1 << 32).unwrap();
        assert_eq!(pow.run(), Some(0));
    }

    #[test]
    fn test_found_nonce_satisfies_the_target() {
        let candidate = test_candidate(8);
        let pow = ProofOfWork::new(&candidate, 1 << 32).unwrap();
        let nonce = pow.run().expect("8 bits should be minable quickly");

        assert!(ProofOfWork::verify(&candidate, nonce).unwrap());
    }

    #[test]
    fn test_search_returns_the_first_qualifying_nonce() {
        let candidate = test_candidate(8);
        let pow = ProofOfWork::new(&candidate, 1 << 32).unwrap();
        let nonce = pow.run().unwrap();

        // Every earlier trial must have missed the target
        for earlier in 0..nonce {
            assert!(pow.hash_attempt(earlier) >= pow.target);
        }
        assert!(pow.hash_attempt(nonce) < pow.target);
    }

    #[test]
    fn test_search_is_deterministic() {
        let candidate = test_candidate(4);
        let first = ProofOfWork::new(&candidate, 1 << 32).unwrap().run();
        let second = ProofOfWork::new(&candidate, 1 << 32).unwrap().run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exhausted_bound_reports_not_found() {
        let pow = ProofOfWork::new(&test_candidate(0), 0).unwrap();
        assert_eq!(pow.run(), None);
    }

    #[test]
    fn test_higher_bits_shrink_the_target() {
        let easy = ProofOfWork::new(&test_candidate(4), 1).unwrap();
        let hard = ProofOfWork::new(&test_candidate(8), 1).unwrap();
        assert!(hard.target < easy.target);
    }
}
