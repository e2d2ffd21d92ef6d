//! Content-derived identifiers for nodes the document does not name.
//!
//! Ids depend only on the input and where a value sits in it, so
//! rebuilding the same document yields the same ids.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

const ENTITY_PREFIX: &str = "_:b";
const LEAF_PREFIX: &str = "_:v";

/// Id for an anonymous entity: its serialized properties plus its
/// traversal ordinal. `salt` is bumped by the caller on collision.
#[must_use]
pub fn anonymous_entity_id(object: &Map<String, Value>, ordinal: usize, salt: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(object).unwrap_or_default());
    hasher.update([0]);
    hasher.update(ordinal.to_le_bytes());
    if salt > 0 {
        hasher.update(salt.to_le_bytes());
    }
    format!("{ENTITY_PREFIX}{}", short_hex(&hasher.finalize()))
}

/// Id for an anonymous object nested under `parent`: the slot it fills
/// (`relation`, `position`) plus its serialized properties. Walking the same
/// parent definition again yields the same child id.
#[must_use]
pub fn nested_entity_id(
    parent: &str,
    relation: &str,
    position: usize,
    object: &Map<String, Value>,
) -> String {
    let mut hasher = Sha256::new();
    for part in [parent, relation] {
        hasher.update(part.as_bytes());
        hasher.update([0]);
    }
    hasher.update(position.to_le_bytes());
    hasher.update(serde_json::to_vec(object).unwrap_or_default());
    format!("{ENTITY_PREFIX}{}", short_hex(&hasher.finalize()))
}

/// Id for a literal leaf, keyed by `(source, relation, value)`.
///
/// `value_tag` separates literals that print alike (`"1"` vs `1`).
#[must_use]
pub fn leaf_id(source: &str, relation: &str, value_tag: &str, value: &str) -> String {
    let mut hasher = Sha256::new();
    for part in [source, relation, value_tag, value] {
        hasher.update(part.as_bytes());
        hasher.update([0]);
    }
    format!("{LEAF_PREFIX}{}", short_hex(&hasher.finalize()))
}

fn short_hex(digest: &[u8]) -> String {
    digest.iter().take(8).map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_ids_are_stable_and_position_sensitive() {
        let obj = json!({ "name": "x" });
        let map = obj.as_object().unwrap();

        let a = anonymous_entity_id(map, 3, 0);
        assert_eq!(a, anonymous_entity_id(map, 3, 0));
        assert_ne!(a, anonymous_entity_id(map, 4, 0));
        assert_ne!(a, anonymous_entity_id(map, 3, 1));
        assert!(a.starts_with("_:b"));
        assert_eq!(a.len(), 3 + 16);
    }

    #[test]
    fn nested_ids_follow_the_slot() {
        let obj = json!({ "street": "Main" });
        let map = obj.as_object().unwrap();

        let id = nested_entity_id("a", "address", 0, map);
        assert_eq!(id, nested_entity_id("a", "address", 0, map));
        assert_ne!(id, nested_entity_id("b", "address", 0, map));
        assert_ne!(id, nested_entity_id("a", "home", 0, map));
        assert_ne!(id, nested_entity_id("a", "address", 1, map));
        assert!(id.starts_with("_:b"));
    }

    #[test]
    fn leaf_ids_separate_sources_and_value_types() {
        let base = leaf_id("s", "rel", "string", "1");
        assert_ne!(base, leaf_id("t", "rel", "string", "1"));
        assert_ne!(base, leaf_id("s", "rel", "number", "1"));
        assert_ne!(leaf_id("ab", "c", "string", "v"), leaf_id("a", "bc", "string", "v"));
    }
}
