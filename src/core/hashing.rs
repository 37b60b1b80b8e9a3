//! Canonical hashing
//!
//! Every digest in the chain comes from here: transaction ids, block links
//! and the proof-of-work pre-image all hash the same canonical serialization,
//! so semantically-equal records always produce the same digest regardless of
//! how they were constructed.

use crate::error::Result;
use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};
use serde::Serialize;

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// Canonical serialization of a structured value: JSON with mapping keys in
/// lexicographic order. `serde_json::Map` is BTreeMap-backed, so routing the
/// value through `serde_json::Value` sorts keys independently of struct field
/// declaration order.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&value)?)
}

/// SHA-256 of the canonical serialization, rendered as lowercase hex.
pub fn canonical_hash<T: Serialize>(value: &T) -> Result<String> {
    let canonical = canonical_json(value)?;
    Ok(HEXLOWER.encode(&sha256_digest(canonical.as_bytes())))
}

/// Digest of two hex digests joined left-to-right. Concatenation happens on
/// the hex strings themselves, not the raw bytes, and the order matters:
/// `hash_string_pair(a, b) != hash_string_pair(b, a)` for distinct inputs.
pub fn hash_string_pair(left: &str, right: &str) -> String {
    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(left);
    joined.push_str(right);
    HEXLOWER.encode(&sha256_digest(joined.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_hash_ignores_key_construction_order() {
        let a = json!({"sender": "alice", "recipient": "bob", "amount": 5});
        let b = json!({"amount": 5, "recipient": "bob", "sender": "alice"});

        assert_eq!(canonical_hash(&a).unwrap(), canonical_hash(&b).unwrap());
    }

    #[test]
    fn test_canonical_json_sorts_keys() {
        let value = json!({"zeta": 1, "alpha": 2, "mid": 3});
        let canonical = canonical_json(&value).unwrap();
        assert_eq!(canonical, r#"{"alpha":2,"mid":3,"zeta":1}"#);
    }

    #[test]
    fn test_canonical_hash_is_lowercase_hex() {
        let digest = canonical_hash(&json!({"k": "v"})).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_string_pair_is_order_sensitive() {
        let ab = hash_string_pair("aa", "bb");
        let ba = hash_string_pair("bb", "aa");
        assert_ne!(ab, ba);

        // Same as hashing the concatenated string directly
        assert_eq!(ab, HEXLOWER.encode(&sha256_digest(b"aabb")));
    }

    #[test]
    fn test_distinct_values_hash_differently() {
        let a = canonical_hash(&json!({"amount": 1})).unwrap();
        let b = canonical_hash(&json!({"amount": 2})).unwrap();
        assert_ne!(a, b);
    }
}
