//! Raw input model: the data bundle produced by the extraction step.
//!
//! ## Format
//!
//! The bundle is a single JSON document holding the card templates plus every
//! lookup table the transformation needs: localized names, flavor text and
//! tooltips, keyword and token lists, category display names, artist credits
//! and armor values. Templates are authoritative for which cards exist;
//! every other table is an overlay keyed by card id (or art id, for artists).
//!
//! All tables except `templates` default to empty, so a thin bundle — say,
//! templates plus names only — still loads and transforms. Locale coverage is
//! discovered from the tables themselves rather than configured; see
//! [`DataBundle::locales`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-locale text tables: locale tag → (card id → text).
pub type LocaleTable = BTreeMap<String, BTreeMap<String, String>>;

/// The raw dataset, straight from the extraction step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataBundle {
    /// Card id → template. The card universe; everything else annotates it.
    pub templates: BTreeMap<String, CardTemplate>,
    #[serde(default)]
    pub names: LocaleTable,
    #[serde(default)]
    pub flavor: LocaleTable,
    /// Tooltip text with the game's markup still in place.
    #[serde(default)]
    pub tooltips: LocaleTable,
    /// Card id → keyword identifiers referenced by its tooltip.
    #[serde(default)]
    pub keywords: BTreeMap<String, Vec<String>>,
    /// Locale tag → (category id `card_category_<n>` → display name).
    #[serde(default)]
    pub categories: LocaleTable,
    /// Card id → ids of the cards it can summon or transform into.
    #[serde(default)]
    pub tokens: BTreeMap<String, Vec<String>>,
    /// Art id → artist credit.
    #[serde(default)]
    pub artists: BTreeMap<String, String>,
    /// Card id → armor value. The sole source of armor; templates carry none.
    #[serde(default)]
    pub armor: BTreeMap<String, u32>,
}

impl DataBundle {
    /// Reads and parses a bundle from disk.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Every locale tag that appears in any localized table. The mapper
    /// iterates this set so that catalog locale coverage follows the data.
    pub fn locales(&self) -> BTreeSet<String> {
        self.names
            .keys()
            .chain(self.flavor.keys())
            .chain(self.tooltips.keys())
            .cloned()
            .collect()
    }
}

/// One card template: the game client's own record of a card, numeric ids
/// and all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: String,
    /// Card set id. Must map to a known set or the build fails.
    pub availability: u32,
    #[serde(default)]
    pub art_id: Option<u32>,
    #[serde(default)]
    pub power: u32,
    pub tier: u32,
    pub card_type: u32,
    pub faction_id: u32,
    /// Zero (the default) means no secondary faction.
    #[serde(default)]
    pub secondary_faction_id: u32,
    /// Engine range; `-1` means none.
    #[serde(default = "default_max_range")]
    pub max_range: i64,
    #[serde(default)]
    pub provision: u32,
    pub rarity: u32,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub primary_categories: CategorySums,
    #[serde(default)]
    pub secondary_categories: CategorySums,
}

fn default_max_range() -> i64 {
    -1
}

// Must agree with the serde field defaults, notably the -1 no-range sentinel.
impl Default for CardTemplate {
    fn default() -> Self {
        CardTemplate {
            id: String::new(),
            availability: 0,
            art_id: None,
            power: 0,
            tier: 0,
            card_type: 0,
            faction_id: 0,
            secondary_faction_id: 0,
            max_range: default_max_range(),
            provision: 0,
            rarity: 0,
            placement: Placement::default(),
            primary_categories: CategorySums::default(),
            secondary_categories: CategorySums::default(),
        }
    }
}

/// Which side of the board the card lands on when played. The client encodes
/// these as integers; any non-zero value sets the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub player_side: u32,
    #[serde(default)]
    pub opponent_side: u32,
}

/// One category node: two 64-bit words of category flags. Bit `p` of `low`
/// encodes category id `p`; bit `p` of `high` encodes category id `p + 64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySums {
    #[serde(default)]
    pub low: u64,
    #[serde(default)]
    pub high: u64,
}
