//! Shared test utilities for the gwent-catalog test suite.
//!
//! Provides builders for templates, bundles and cards, plus lookup helpers
//! over the transformed catalog.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let bundle = bundle_with(vec![template("112101", 1), template("200001", 0)]);
//! let (catalog, _) = build_catalog(&bundle, &GameTables::default(), &test_config()).unwrap();
//!
//! let card = find_card(&catalog, "112101");
//! assert!(card.released);
//! ```

use crate::card::{Card, Catalog};
use crate::config::CatalogConfig;
use crate::input::{CardTemplate, DataBundle, Placement};

// =========================================================================
// Builders
// =========================================================================

/// A config with a short test CDN template covering all placeholders.
pub fn test_config() -> CatalogConfig {
    CatalogConfig {
        patch: "13.2".to_string(),
        image_url: "https://cdn.test/{patch}/{cardId}/{variationId}/{artId}_{size}.png"
            .to_string(),
    }
}

/// A representative unit template: Gold Monster unit, Legendary, 5 power.
///
/// Tests override the fields they care about.
pub fn template(id: &str, availability: u32) -> CardTemplate {
    CardTemplate {
        id: id.to_string(),
        availability,
        art_id: Some(1121),
        power: 5,
        tier: 8,
        card_type: 4,
        faction_id: 2,
        provision: 9,
        rarity: 8,
        placement: Placement {
            player_side: 1,
            opponent_side: 0,
        },
        ..CardTemplate::default()
    }
}

/// A bundle holding just the given templates; all lookup tables empty.
pub fn bundle_with(templates: Vec<CardTemplate>) -> DataBundle {
    DataBundle {
        templates: templates
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect(),
        ..DataBundle::default()
    }
}

/// A bare catalog card with just an id and a release flag.
pub fn card(id: &str, released: bool) -> Card {
    Card {
        ingame_id: id.to_string(),
        released,
        ..Card::default()
    }
}

/// A bare catalog card that lists the given related ids.
pub fn card_with_related(id: &str, released: bool, related: &[&str]) -> Card {
    Card {
        related: Some(related.iter().map(|s| s.to_string()).collect()),
        ..card(id, released)
    }
}

/// Builds a catalog from cards, keyed by their ids.
pub fn catalog_of(cards: Vec<Card>) -> Catalog {
    cards
        .into_iter()
        .map(|c| (c.ingame_id.clone(), c))
        .collect()
}

// =========================================================================
// Catalog lookups — panics with a clear message on miss
// =========================================================================

/// Find a card by id. Panics if not found.
pub fn find_card<'a>(catalog: &'a Catalog, id: &str) -> &'a Card {
    catalog.get(id).unwrap_or_else(|| {
        let ids: Vec<&str> = catalog.keys().map(String::as_str).collect();
        panic!("card '{id}' not found. Available: {ids:?}")
    })
}
