//! Release propagation and pruning.
//!
//! ## Propagation
//!
//! Mapping marks a card released when its variation is collectible (or the
//! card is on the always-released list). Tokens are not collectible, yet a
//! token summoned by a released card must be published with it. Propagation
//! extends the released set from each initially released card to the cards
//! it lists as related.
//!
//! The extension is computed against a snapshot of the initial flags and runs
//! exactly one step: a token that becomes released this way does not pull in
//! its own related cards. That keeps the result independent of iteration
//! order, where flag mutation during the walk would let an early-sorting
//! released card chain through a later token.
//!
//! ## Pruning
//!
//! The published catalog contains released cards only. Pruning drops
//! everything outside the released set, drops the invalid-token placeholders
//! unconditionally, and stamps `released: true` on the survivors so the
//! flag's transient mapping-stage value never leaks out.

use crate::card::Catalog;
use crate::tables::GameTables;
use std::collections::BTreeSet;

/// Computes the final set of released card ids from a catalog snapshot.
pub fn released_ids(catalog: &Catalog, tables: &GameTables) -> BTreeSet<String> {
    let mut released = BTreeSet::new();
    for (id, card) in catalog {
        if !card.released {
            continue;
        }
        released.insert(id.clone());
        let Some(related) = &card.related else {
            continue;
        };
        for token_id in related {
            if tables.is_invalid_token(token_id) {
                continue;
            }
            if catalog.contains_key(token_id) {
                released.insert(token_id.clone());
            }
        }
    }
    released
}

/// Keeps only released cards and stamps the flag on the survivors.
pub fn prune(catalog: Catalog, released: &BTreeSet<String>, tables: &GameTables) -> Catalog {
    catalog
        .into_iter()
        .filter(|(id, _)| released.contains(id) && !tables.is_invalid_token(id))
        .map(|(id, mut card)| {
            card.released = true;
            (id, card)
        })
        .collect()
}
