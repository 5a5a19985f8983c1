//! Variation resolution: availability, economy values and art URLs.
//!
//! Every card currently ships exactly one variation, whose id is the card id
//! with `"00"` appended. Resolution turns the template's set id into a named
//! availability (the one place the pipeline refuses bad input), attaches
//! craft and mill values for the card's rarity, and, for cards that start
//! out released, builds one art URL per published size by substituting into
//! the configured template.
//!
//! A card counts as initially released when its variation is collectible, or
//! when the card id is on the always-released list.

use crate::card::{Art, Variation};
use crate::config::CatalogConfig;
use crate::input::CardTemplate;
use crate::tables::{CardSet, GameTables, IMAGE_SIZES, Rarity};
use crate::transform::TransformError;
use std::collections::BTreeMap;

/// A resolved variation plus the release verdict it implies for its card.
#[derive(Debug, Clone)]
pub struct ResolvedVariation {
    pub id: String,
    pub variation: Variation,
    pub released: bool,
}

/// Resolves a template's single variation.
///
/// Fails only on an unknown set id: that means the input comes from a newer
/// game version than this tool models, and publishing guessed availability
/// would be worse than stopping.
pub fn resolve_variation(
    template: &CardTemplate,
    tables: &GameTables,
    config: &CatalogConfig,
) -> Result<ResolvedVariation, TransformError> {
    let set = CardSet::from_id(template.availability).ok_or_else(|| {
        TransformError::UnknownCardSet {
            card_id: template.id.clone(),
            set_id: template.availability,
        }
    })?;

    let id = variation_id(&template.id);
    let collectible = tables.is_collectible(set);
    let released = collectible || tables.is_always_released(&template.id);
    let rarity = Rarity::from_id(template.rarity);

    let variation = Variation {
        variation_id: id.clone(),
        availability: set.label().to_string(),
        rarity: rarity.map(|r| r.label().to_string()),
        craft: rarity.and_then(|r| tables.craft_values(r)).copied(),
        mill: rarity.and_then(|r| tables.mill_values(r)).copied(),
        collectible,
        art: art(template, &id, config, released),
    };

    Ok(ResolvedVariation {
        id,
        variation,
        released,
    })
}

/// The variation id for a card: card id + `"00"`.
pub fn variation_id(card_id: &str) -> String {
    format!("{card_id}00")
}

/// Builds the art block for one variation.
///
/// URLs are generated only for cards that start out released; everything
/// else keeps its in-game art id (when known) and an empty URL map. A
/// template without an art id still gets URLs, with `{artId}` replaced by
/// the empty string.
fn art(
    template: &CardTemplate,
    variation_id: &str,
    config: &CatalogConfig,
    released: bool,
) -> Art {
    let mut urls = BTreeMap::new();
    if released {
        let art_id_text = template
            .art_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        for size in IMAGE_SIZES {
            let url = config
                .image_url
                .replace("{patch}", &config.patch)
                .replace("{cardId}", &template.id)
                .replace("{variationId}", variation_id)
                .replace("{size}", size)
                .replace("{artId}", &art_id_text);
            urls.insert(size.to_string(), url);
        }
    }
    Art {
        ingame_art_id: template.art_id,
        urls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CostTable;
    use pretty_assertions::assert_eq;

    fn config() -> CatalogConfig {
        CatalogConfig {
            patch: "13.2".to_string(),
            image_url: "https://cdn.test/{patch}/{cardId}/{variationId}/{artId}_{size}.png"
                .to_string(),
        }
    }

    fn template(id: &str, availability: u32, rarity: u32) -> CardTemplate {
        CardTemplate {
            id: id.to_string(),
            availability,
            art_id: Some(1121),
            rarity,
            ..CardTemplate::default()
        }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    #[test]
    fn base_set_card_is_collectible_and_released() {
        let resolved =
            resolve_variation(&template("112101", 1, 8), &GameTables::default(), &config())
                .unwrap();
        assert_eq!(resolved.id, "11210100");
        assert_eq!(resolved.variation.availability, "BaseSet");
        assert!(resolved.variation.collectible);
        assert!(resolved.released);
    }

    #[test]
    fn token_card_is_neither_collectible_nor_released() {
        let resolved =
            resolve_variation(&template("200001", 0, 1), &GameTables::default(), &config())
                .unwrap();
        assert_eq!(resolved.variation.availability, "NonOwnable");
        assert!(!resolved.variation.collectible);
        assert!(!resolved.released);
    }

    #[test]
    fn always_released_card_overrides_non_collectible_set() {
        let resolved =
            resolve_variation(&template("202140", 0, 1), &GameTables::default(), &config())
                .unwrap();
        assert!(!resolved.variation.collectible);
        assert!(resolved.released);
    }

    #[test]
    fn unknown_set_id_is_a_hard_error() {
        let err = resolve_variation(&template("999999", 42, 1), &GameTables::default(), &config())
            .unwrap_err();
        match err {
            TransformError::UnknownCardSet { card_id, set_id } => {
                assert_eq!(card_id, "999999");
                assert_eq!(set_id, 42);
            }
        }
    }

    #[test]
    fn economy_values_follow_rarity() {
        let resolved =
            resolve_variation(&template("112101", 1, 8), &GameTables::default(), &config())
                .unwrap();
        assert_eq!(resolved.variation.rarity.as_deref(), Some("Legendary"));
        assert_eq!(resolved.variation.craft, Some(CostTable::new(800, 1600, 400)));
        assert_eq!(resolved.variation.mill, Some(CostTable::new(200, 200, 120)));
    }

    #[test]
    fn unmapped_rarity_omits_economy_values() {
        let resolved =
            resolve_variation(&template("112101", 1, 3), &GameTables::default(), &config())
                .unwrap();
        assert_eq!(resolved.variation.rarity, None);
        assert_eq!(resolved.variation.craft, None);
        assert_eq!(resolved.variation.mill, None);
    }

    // =========================================================================
    // Art URLs
    // =========================================================================

    #[test]
    fn art_urls_substitute_every_placeholder() {
        let resolved =
            resolve_variation(&template("112101", 1, 8), &GameTables::default(), &config())
                .unwrap();
        let art = &resolved.variation.art;
        assert_eq!(art.ingame_art_id, Some(1121));
        assert_eq!(art.urls.len(), IMAGE_SIZES.len());
        assert_eq!(
            art.urls["original"],
            "https://cdn.test/13.2/112101/11210100/1121_original.png"
        );
        assert_eq!(
            art.urls["thumbnail"],
            "https://cdn.test/13.2/112101/11210100/1121_thumbnail.png"
        );
    }

    #[test]
    fn missing_art_id_substitutes_empty_and_omits_the_id() {
        let mut no_art = template("112101", 1, 8);
        no_art.art_id = None;
        let resolved =
            resolve_variation(&no_art, &GameTables::default(), &config()).unwrap();
        let art = &resolved.variation.art;
        assert_eq!(art.ingame_art_id, None);
        assert_eq!(
            art.urls["original"],
            "https://cdn.test/13.2/112101/11210100/_original.png"
        );
    }

    #[test]
    fn unreleased_card_gets_no_urls_even_with_an_art_id() {
        let resolved =
            resolve_variation(&template("200001", 0, 1), &GameTables::default(), &config())
                .unwrap();
        let art = &resolved.variation.art;
        assert_eq!(art.ingame_art_id, Some(1121));
        assert!(art.urls.is_empty());
    }

    #[test]
    fn always_released_card_still_gets_urls() {
        let resolved =
            resolve_variation(&template("202140", 0, 1), &GameTables::default(), &config())
                .unwrap();
        assert_eq!(resolved.variation.art.urls.len(), IMAGE_SIZES.len());
    }
}
