//! The transformation pipeline: raw bundle in, published catalog out.
//!
//! ## Stages
//!
//! 1. **Map** — every template becomes a [`Card`]: numeric ids turn into
//!    labels, category bitmasks into id lists, lookup tables into localized
//!    text, and the template's variation is resolved. Cards are independent
//!    here, so the stage runs on a rayon thread pool.
//! 2. **Propagate** — the released set extends from collectible cards to the
//!    tokens they list; see [`crate::release`].
//! 3. **Prune** — unreleased cards drop out and the survivors are stamped
//!    released.
//!
//! The only hard failure is a template whose set id is unknown. One bad
//! template fails the whole build: a catalog silently missing cards (or
//! carrying guessed availability) is worse than no catalog.

use crate::card::{Card, Catalog, Localized};
use crate::categories;
use crate::config::CatalogConfig;
use crate::input::{CardTemplate, DataBundle, LocaleTable};
use crate::markup::strip_markup;
use crate::release;
use crate::tables::{CANONICAL_LOCALE, CardType, Faction, GameTables, POSITIONS, Tier};
use crate::variation::resolve_variation;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Unknown card set id {set_id} on card {card_id}")]
    UnknownCardSet { card_id: String, set_id: u32 },
}

/// Counters for one catalog build, taken after pruning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Templates in the input bundle.
    pub templates: usize,
    /// Cards in the published catalog.
    pub released: usize,
    /// Cards dropped by the release prune.
    pub pruned: usize,
    /// Published cards per faction label, in client faction order.
    pub faction_counts: Vec<(String, usize)>,
}

impl BuildReport {
    fn new(templates: usize, catalog: &Catalog) -> Self {
        let mut by_faction: BTreeMap<&str, usize> = BTreeMap::new();
        for card in catalog.values() {
            if let Some(faction) = card.faction.as_deref() {
                *by_faction.entry(faction).or_default() += 1;
            }
        }
        let faction_counts = Faction::ALL
            .iter()
            .map(|faction| {
                let count = by_faction.get(faction.label()).copied().unwrap_or(0);
                (faction.label().to_string(), count)
            })
            .collect();
        BuildReport {
            templates,
            released: catalog.len(),
            pruned: templates - catalog.len(),
            faction_counts,
        }
    }
}

/// Runs the full pipeline and returns the published catalog with its report.
pub fn build_catalog(
    bundle: &DataBundle,
    tables: &GameTables,
    config: &CatalogConfig,
) -> Result<(Catalog, BuildReport), TransformError> {
    let mapped = map_cards(bundle, tables, config)?;
    let templates = mapped.len();
    let released = release::released_ids(&mapped, tables);
    let catalog = release::prune(mapped, &released, tables);
    let report = BuildReport::new(templates, &catalog);
    Ok((catalog, report))
}

/// Maps every template to a card, in parallel. The first unknown set id
/// fails the stage.
pub fn map_cards(
    bundle: &DataBundle,
    tables: &GameTables,
    config: &CatalogConfig,
) -> Result<Catalog, TransformError> {
    let locales = bundle.locales();
    bundle
        .templates
        .par_iter()
        .map(|(card_id, template)| {
            let card = map_card(template, bundle, &locales, tables, config)?;
            Ok((card_id.clone(), card))
        })
        .collect()
}

/// Builds one card from its template and the bundle's lookup tables.
fn map_card(
    template: &CardTemplate,
    bundle: &DataBundle,
    locales: &BTreeSet<String>,
    tables: &GameTables,
    config: &CatalogConfig,
) -> Result<Card, TransformError> {
    let resolved = resolve_variation(template, tables, config)?;

    let tier = Tier::from_id(template.tier);
    let card_type = CardType::from_id(template.card_type);
    // Leader detection keys on the tier; CardType also has a Leader value.
    let is_leader = tier == Some(Tier::Leader);
    let is_unit = card_type == Some(CardType::Unit);

    let category_ids =
        categories::category_ids(template.primary_categories, template.secondary_categories);
    let category_names = bundle
        .categories
        .get(CANONICAL_LOCALE)
        .map(|names| categories::display_names(&category_ids, names))
        .unwrap_or_default();

    let info_raw = localized(&bundle.tooltips, locales, &template.id);
    let info = info_raw
        .iter()
        .map(|(locale, raw)| (locale.clone(), strip_markup(raw)))
        .collect();

    let mut loyalties = Vec::new();
    if template.placement.player_side != 0 {
        loyalties.push("Loyal".to_string());
    }
    if template.placement.opponent_side != 0 {
        loyalties.push("Disloyal".to_string());
    }

    Ok(Card {
        ingame_id: template.id.clone(),
        strength: template.power,
        tier: tier.map(|t| t.label().to_string()),
        card_type: card_type.map(|t| t.label().to_string()),
        faction: Faction::from_id(template.faction_id).map(|f| f.label().to_string()),
        secondary_faction: Faction::from_id(template.secondary_faction_id)
            .map(|f| f.label().to_string()),
        provision: template.provision,
        mulligans: is_leader.then_some(0),
        provision_boost: is_leader.then_some(template.provision),
        reach: u32::try_from(template.max_range).ok(),
        armor: unit_armor(template, bundle, is_unit),
        name: localized(&bundle.names, locales, &template.id),
        flavor: localized(&bundle.flavor, locales, &template.id),
        info,
        info_raw,
        keywords: bundle
            .keywords
            .get(&template.id)
            .filter(|k| !k.is_empty())
            .cloned(),
        positions: POSITIONS.iter().map(|p| p.to_string()).collect(),
        loyalties,
        categories: category_names,
        category_ids,
        variations: BTreeMap::from([(resolved.id, resolved.variation)]),
        artist: template
            .art_id
            .and_then(|id| bundle.artists.get(&id.to_string()))
            .cloned(),
        related: bundle
            .tokens
            .get(&template.id)
            .filter(|t| !t.is_empty())
            .cloned(),
        released: resolved.released,
    })
}

/// Collects one locale's worth of text per locale tag, skipping locales with
/// no entry for the card.
fn localized(table: &LocaleTable, locales: &BTreeSet<String>, card_id: &str) -> Localized {
    let mut text = Localized::new();
    for locale in locales {
        if let Some(entry) = table.get(locale).and_then(|entries| entries.get(card_id)) {
            text.insert(locale.clone(), entry.clone());
        }
    }
    text
}

/// Armor as published: the armor table is the sole source, and only
/// Unit-type cards carry the key.
fn unit_armor(template: &CardTemplate, bundle: &DataBundle, is_unit: bool) -> Option<u32> {
    if !is_unit {
        return None;
    }
    bundle.armor.get(&template.id).copied()
}
