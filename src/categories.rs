//! Category bitmask decoding.
//!
//! ## Encoding
//!
//! A template carries two category nodes (primary and secondary), each made
//! of two 64-bit words. A set bit at position `p` in the low word encodes
//! category id `p`; in the high word it encodes `p + 64`. Category ids are
//! published as `card_category_<id>`, which is also the key into the display
//! name table.
//!
//! ## Ordering
//!
//! Decoding scans low bits before high bits and the primary node before the
//! secondary one, so ids come out in a stable order with primary categories
//! first. A category set in both nodes is reported once, at its first
//! occurrence.

use crate::input::CategorySums;
use std::collections::{BTreeMap, BTreeSet};

/// Decodes both category nodes into published `card_category_<id>` strings.
pub fn category_ids(primary: CategorySums, secondary: CategorySums) -> Vec<String> {
    let mut ids = Vec::new();
    let mut seen = BTreeSet::new();
    for (word, offset) in [
        (primary.low, 0),
        (primary.high, 64),
        (secondary.low, 0),
        (secondary.high, 64),
    ] {
        decode_word(word, offset, &mut ids, &mut seen);
    }
    ids
}

/// Pushes one `card_category_<id>` per set bit, lowest bit first.
fn decode_word(word: u64, offset: u32, ids: &mut Vec<String>, seen: &mut BTreeSet<u32>) {
    let mut bits = word;
    while bits != 0 {
        let id = bits.trailing_zeros() + offset;
        bits &= bits - 1; // clear the lowest set bit
        if seen.insert(id) {
            ids.push(format!("card_category_{id}"));
        }
    }
}

/// Resolves category ids to display names. Ids with no entry in the name
/// table are dropped, not placeholdered.
pub fn display_names(ids: &[String], names: &BTreeMap<String, String>) -> Vec<String> {
    ids.iter()
        .filter_map(|id| names.get(id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sums(low: u64, high: u64) -> CategorySums {
        CategorySums { low, high }
    }

    // =========================================================================
    // Bit decoding
    // =========================================================================

    #[test]
    fn empty_nodes_decode_to_nothing() {
        assert!(category_ids(CategorySums::default(), CategorySums::default()).is_empty());
    }

    #[test]
    fn low_word_bit_positions_are_the_ids() {
        let ids = category_ids(sums(0b1001, 0), CategorySums::default());
        assert_eq!(ids, vec!["card_category_0", "card_category_3"]);
    }

    #[test]
    fn high_word_ids_start_at_64() {
        let ids = category_ids(sums(0, 0b101), CategorySums::default());
        assert_eq!(ids, vec!["card_category_64", "card_category_66"]);
    }

    #[test]
    fn low_word_decodes_before_high_word() {
        let ids = category_ids(sums(1 << 63, 1), CategorySums::default());
        assert_eq!(ids, vec!["card_category_63", "card_category_64"]);
    }

    #[test]
    fn primary_node_decodes_before_secondary() {
        let ids = category_ids(sums(0b10, 0), sums(0b1, 0));
        assert_eq!(ids, vec!["card_category_1", "card_category_0"]);
    }

    #[test]
    fn duplicate_across_nodes_is_reported_once() {
        let ids = category_ids(sums(0b110, 0), sums(0b010, 0));
        assert_eq!(ids, vec!["card_category_1", "card_category_2"]);
    }

    #[test]
    fn topmost_bit_decodes() {
        let ids = category_ids(CategorySums::default(), sums(0, 1 << 63));
        assert_eq!(ids, vec!["card_category_127"]);
    }

    // =========================================================================
    // Display names
    // =========================================================================

    #[test]
    fn names_resolve_in_id_order() {
        let names = BTreeMap::from([
            ("card_category_5".to_string(), "Witcher".to_string()),
            ("card_category_9".to_string(), "Beast".to_string()),
        ]);
        let ids = vec!["card_category_5".to_string(), "card_category_9".to_string()];
        assert_eq!(display_names(&ids, &names), vec!["Witcher", "Beast"]);
    }

    #[test]
    fn unnamed_ids_are_dropped() {
        let names = BTreeMap::from([("card_category_5".to_string(), "Witcher".to_string())]);
        let ids = vec![
            "card_category_5".to_string(),
            "card_category_999".to_string(),
        ];
        assert_eq!(display_names(&ids, &names), vec!["Witcher"]);
    }
}
