//! Published catalog model.
//!
//! ## Shape
//!
//! The catalog is a map from in-game card id to [`Card`]. Each card carries
//! its gameplay stats, localized text, category labels and one [`Variation`]
//! per release channel (in practice exactly one, keyed by the card id with
//! `"00"` appended).
//!
//! ## Key names
//!
//! The JSON key names are load-bearing: downstream consumers have parsed
//! `ingameId`, `infoRaw` and friends for years, so the serde renames here pin
//! them exactly. The oddest one is `type`, which carries the card's *tier*
//! (Bronze/Gold/Leader) rather than its card type — a historical quirk that
//! must not be fixed.
//!
//! Optional keys (`reach`, `armor`, `mulligans`, ...) are omitted entirely
//! when absent rather than serialized as `null`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full catalog, ordered by card id.
pub type Catalog = BTreeMap<String, Card>;

/// Localized text, keyed by locale tag (`"en-US"`, `"de-DE"`, ...). Locales
/// with no entry for a given card are omitted rather than mapped to `null`.
pub type Localized = BTreeMap<String, String>;

/// One card as it appears in the published catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub ingame_id: String,
    pub strength: u32,
    /// Tier label (Leader/Bronze/Silver/Gold). Published under the key
    /// `type` since the first catalog release. Absent when the raw id is
    /// outside the client vocabulary, as are `card_type` and `faction`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_faction: Option<String>,
    pub provision: u32,
    /// Leader redraw allowance. Leaders only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mulligans: Option<u32>,
    /// Extra provision a leader grants the deck. Leaders only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_boost: Option<u32>,
    /// Engine range. Only present when the template declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<u32>,
    /// Armor points. Units only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor: Option<u32>,
    pub name: Localized,
    pub flavor: Localized,
    /// Tooltip text with markup stripped.
    pub info: Localized,
    /// Tooltip text as shipped, markup included.
    pub info_raw: Localized,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Lanes the card can be played on. Always all three.
    pub positions: Vec<String>,
    /// `"Loyal"`, `"Disloyal"`, or both.
    pub loyalties: Vec<String>,
    /// Category display names, canonical locale.
    pub categories: Vec<String>,
    /// Stable category identifiers (`card_category_<n>`).
    pub category_ids: Vec<String>,
    pub variations: BTreeMap<String, Variation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Card ids this card can summon or transform into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,
    pub released: bool,
}

/// One release channel of a card: availability, economy values and art.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub variation_id: String,
    /// Label of the card set this variation ships in.
    pub availability: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub craft: Option<CostTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mill: Option<CostTable>,
    pub collectible: bool,
    pub art: Art,
}

/// Art URLs for a variation, one per published size, plus the numeric art id
/// the URLs are derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Art {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingame_art_id: Option<u32>,
    /// Size name → URL (`"original"`, `"high"`, ...).
    #[serde(flatten)]
    pub urls: BTreeMap<String, String>,
}

/// Scrap costs or yields: standard copy, premium copy, leader upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTable {
    pub standard: u32,
    pub premium: u32,
    pub upgrade: u32,
}

impl CostTable {
    pub const fn new(standard: u32, premium: u32, upgrade: u32) -> Self {
        CostTable {
            standard,
            premium,
            upgrade,
        }
    }
}
