//! Fixed game vocabularies and economy tables.
//!
//! The game client encodes tiers, types, factions, rarities and card sets as
//! small integers (bit flags for everything but sets). This module pins those
//! numeric ids to their published labels, and bundles the value tables that
//! depend on them — crafting and milling costs per rarity, the collectible
//! set allow-list, and the handful of card ids with special release handling —
//! into [`GameTables`], an immutable structure built once and passed
//! explicitly through the pipeline.
//!
//! Everything in here is a constant of the game economy. The craft and mill
//! values in particular are published numbers; changing them would silently
//! corrupt every downstream consumer.

use crate::card::CostTable;
use std::collections::{BTreeMap, BTreeSet};

/// Locale whose category display names are authoritative.
pub const CANONICAL_LOCALE: &str = "en-US";

/// Every card occupies all three lanes; row restrictions no longer exist.
pub const POSITIONS: [&str; 3] = ["Melee", "Ranged", "Siege"];

/// Image resolutions published for every card that gets art URLs.
pub const IMAGE_SIZES: [&str; 5] = ["original", "high", "medium", "low", "thumbnail"];

/// Card tier. Client ids are bit flags: 1, 2, 4, 8.
///
/// The published JSON historically calls this field `type`; see
/// [`crate::card::Card::tier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Leader,
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Tier::Leader),
            2 => Some(Tier::Bronze),
            4 => Some(Tier::Silver),
            8 => Some(Tier::Gold),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Leader => "Leader",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
        }
    }
}

/// Card type. Client ids are bit flags: 1, 2, 4, 8, 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardType {
    Leader,
    Spell,
    Unit,
    Artifact,
    Strategem,
}

impl CardType {
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(CardType::Leader),
            2 => Some(CardType::Spell),
            4 => Some(CardType::Unit),
            8 => Some(CardType::Artifact),
            16 => Some(CardType::Strategem),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardType::Leader => "Leader",
            CardType::Spell => "Spell",
            CardType::Unit => "Unit",
            CardType::Artifact => "Artifact",
            CardType::Strategem => "Strategem",
        }
    }
}

/// Faction. Client ids are bit flags: 1 through 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Faction {
    Neutral,
    Monster,
    Nilfgaard,
    NorthernRealms,
    Scoiatael,
    Skellige,
    Syndicate,
}

impl Faction {
    /// All factions in client-id order. Used for stable summary output.
    pub const ALL: [Faction; 7] = [
        Faction::Neutral,
        Faction::Monster,
        Faction::Nilfgaard,
        Faction::NorthernRealms,
        Faction::Scoiatael,
        Faction::Skellige,
        Faction::Syndicate,
    ];

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Faction::Neutral),
            2 => Some(Faction::Monster),
            4 => Some(Faction::Nilfgaard),
            8 => Some(Faction::NorthernRealms),
            16 => Some(Faction::Scoiatael),
            32 => Some(Faction::Skellige),
            64 => Some(Faction::Syndicate),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Faction::Neutral => "Neutral",
            Faction::Monster => "Monster",
            Faction::Nilfgaard => "Nilfgaard",
            Faction::NorthernRealms => "Northern Realms",
            Faction::Scoiatael => "Scoiatael",
            Faction::Skellige => "Skellige",
            Faction::Syndicate => "Syndicate",
        }
    }
}

/// Rarity. Client ids are bit flags: 1, 2, 4, 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Rarity::Common),
            2 => Some(Rarity::Rare),
            4 => Some(Rarity::Epic),
            8 => Some(Rarity::Legendary),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Card set (release batch). Unlike the other vocabularies, set ids are plain
/// integers with gaps: 0–3 for the launch-era sets, 10 onward for expansions.
///
/// A set id outside this enumeration is the pipeline's one hard error — an
/// unknown set means the input comes from a newer game version than this tool
/// models, and guessing would publish wrong availability data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardSet {
    NonOwnable,
    Base,
    Tutorial,
    Thronebreaker,
    Unmillable,
    CrimsonCurse,
    Novigrad,
    IronJudgement,
    MerchantsOfOfir,
    MasterMirror,
    PriceOfPower,
    WayOfTheWitcher,
    BlackSun,
}

impl CardSet {
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(CardSet::NonOwnable),
            1 => Some(CardSet::Base),
            2 => Some(CardSet::Tutorial),
            3 => Some(CardSet::Thronebreaker),
            10 => Some(CardSet::Unmillable),
            11 => Some(CardSet::CrimsonCurse),
            12 => Some(CardSet::Novigrad),
            13 => Some(CardSet::IronJudgement),
            14 => Some(CardSet::MerchantsOfOfir),
            15 => Some(CardSet::MasterMirror),
            16 => Some(CardSet::PriceOfPower),
            17 => Some(CardSet::WayOfTheWitcher),
            18 => Some(CardSet::BlackSun),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardSet::NonOwnable => "NonOwnable",
            CardSet::Base => "BaseSet",
            CardSet::Tutorial => "Tutorial",
            CardSet::Thronebreaker => "Thronebreaker",
            CardSet::Unmillable => "Unmillable",
            CardSet::CrimsonCurse => "CrimsonCurse",
            CardSet::Novigrad => "Novigrad",
            CardSet::IronJudgement => "IronJudgement",
            CardSet::MerchantsOfOfir => "MerchantsOfOfir",
            CardSet::MasterMirror => "MasterMirror",
            CardSet::PriceOfPower => "PriceOfPower",
            CardSet::WayOfTheWitcher => "WayOfTheWitcher",
            CardSet::BlackSun => "BlackSun",
        }
    }
}

/// Immutable lookup tables for the transformation: economy values, the
/// collectible allow-list, and the special-case card ids.
///
/// Built once via [`Default`] (the canonical game constants) and passed by
/// reference into the mapper and resolver. Nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct GameTables {
    /// Crafting cost per rarity (standard / premium / upgrade scrap).
    pub craft: BTreeMap<Rarity, CostTable>,
    /// Milling yield per rarity (standard / premium / upgrade scrap).
    pub mill: BTreeMap<Rarity, CostTable>,
    /// Sets whose cards are obtainable through normal play and crafting.
    /// Token, tutorial and post-Ofir sets are not on the list.
    pub collectible_sets: BTreeSet<CardSet>,
    /// Non-collectible cards that are published anyway.
    /// Currently only Tactical Advantage, which ships with full art.
    pub always_released: BTreeSet<String>,
    /// Placeholder entries that must never be published, even when a released
    /// card lists them as tokens. Gaunter's "Higher than 5" and "Lower than 5"
    /// choice prompts live in the template data but are not cards.
    pub invalid_tokens: BTreeSet<String>,
}

impl Default for GameTables {
    fn default() -> Self {
        let craft = BTreeMap::from([
            (Rarity::Common, CostTable::new(30, 200, 100)),
            (Rarity::Rare, CostTable::new(80, 400, 200)),
            (Rarity::Epic, CostTable::new(200, 800, 300)),
            (Rarity::Legendary, CostTable::new(800, 1600, 400)),
        ]);
        let mill = BTreeMap::from([
            (Rarity::Common, CostTable::new(10, 10, 20)),
            (Rarity::Rare, CostTable::new(20, 20, 50)),
            (Rarity::Epic, CostTable::new(50, 50, 80)),
            (Rarity::Legendary, CostTable::new(200, 200, 120)),
        ]);
        let collectible_sets = BTreeSet::from([
            CardSet::Base,
            CardSet::Thronebreaker,
            CardSet::Unmillable,
            CardSet::CrimsonCurse,
            CardSet::Novigrad,
            CardSet::IronJudgement,
            CardSet::MerchantsOfOfir,
        ]);
        let always_released = BTreeSet::from(["202140".to_string()]);
        let invalid_tokens = BTreeSet::from(["200175".to_string(), "200176".to_string()]);

        GameTables {
            craft,
            mill,
            collectible_sets,
            always_released,
            invalid_tokens,
        }
    }
}

impl GameTables {
    pub fn craft_values(&self, rarity: Rarity) -> Option<&CostTable> {
        self.craft.get(&rarity)
    }

    pub fn mill_values(&self, rarity: Rarity) -> Option<&CostTable> {
        self.mill.get(&rarity)
    }

    pub fn is_collectible(&self, set: CardSet) -> bool {
        self.collectible_sets.contains(&set)
    }

    pub fn is_always_released(&self, card_id: &str) -> bool {
        self.always_released.contains(card_id)
    }

    pub fn is_invalid_token(&self, card_id: &str) -> bool {
        self.invalid_tokens.contains(card_id)
    }
}
