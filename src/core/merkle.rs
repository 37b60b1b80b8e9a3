//! Merkle aggregation over transaction ids
//!
//! Reduces an ordered sequence of hex transaction-id digests to a single root
//! digest by pairwise hashing. The reduction is order-sensitive: ids are taken
//! in insertion order, never sorted.

use crate::core::hashing::hash_string_pair;

/// Compute the Merkle root of an ordered list of transaction-id digests.
///
/// - Empty input yields `None` (a block with no transactions has no root).
/// - A single id is returned unchanged; it is NOT re-hashed.
/// - Otherwise ids are combined in disjoint consecutive pairs, a trailing
///   odd element is paired with itself, and the half-length level is reduced
///   recursively until one digest remains.
pub fn merkle_root(transaction_ids: &[String]) -> Option<String> {
    if transaction_ids.is_empty() {
        return None;
    }
    if transaction_ids.len() == 1 {
        return Some(transaction_ids[0].clone());
    }

    let mut next_level = Vec::with_capacity(transaction_ids.len().div_ceil(2));
    for pair in transaction_ids.chunks(2) {
        match pair {
            [left, right] => next_level.push(hash_string_pair(left, right)),
            [last] => next_level.push(hash_string_pair(last, last)),
            _ => unreachable!("chunks(2) yields one- or two-element slices"),
        }
    }

    merkle_root(&next_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_list_has_no_root() {
        assert_eq!(merkle_root(&[]), None);
    }

    #[test]
    fn test_single_id_is_identity() {
        let root = merkle_root(&ids(&["abc123"]));
        // The lone id passes through untouched, no re-hashing
        assert_eq!(root, Some("abc123".to_string()));
    }

    #[test]
    fn test_pair_reduces_to_ordered_pair_hash() {
        let root = merkle_root(&ids(&["aa", "bb"])).unwrap();
        assert_eq!(root, hash_string_pair("aa", "bb"));
        assert_ne!(root, hash_string_pair("bb", "aa"));
    }

    #[test]
    fn test_root_is_order_sensitive() {
        let forward = merkle_root(&ids(&["aa", "bb"]));
        let reversed = merkle_root(&ids(&["bb", "aa"]));
        assert_ne!(forward, reversed);
        assert_eq!(reversed.unwrap(), hash_string_pair("bb", "aa"));
    }

    #[test]
    fn test_odd_tail_pairs_with_itself() {
        let root = merkle_root(&ids(&["aa", "bb", "cc"])).unwrap();
        let expected = hash_string_pair(
            &hash_string_pair("aa", "bb"),
            &hash_string_pair("cc", "cc"),
        );
        assert_eq!(root, expected);
    }

    #[test]
    fn test_four_ids_reduce_in_two_levels() {
        let root = merkle_root(&ids(&["aa", "bb", "cc", "dd"])).unwrap();
        let expected = hash_string_pair(
            &hash_string_pair("aa", "bb"),
            &hash_string_pair("cc", "dd"),
        );
        assert_eq!(root, expected);
    }

    #[test]
    fn test_root_is_deterministic() {
        let list = ids(&["11", "22", "33", "44", "55"]);
        assert_eq!(merkle_root(&list), merkle_root(&list));
    }
}
