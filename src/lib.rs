//! # Gwent Catalog
//!
//! Builds the released-only Gwent card catalog from the game's raw data.
//! The input is a single JSON bundle — card templates plus the lookup tables
//! extracted alongside them — and the output is one JSON document keyed by
//! card id, shaped the way catalog consumers have always read it.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Map        templates + lookups  →  cards      (ids → labels, bitmasks → categories)
//! 2. Propagate  released cards pull in the tokens they summon
//! 3. Prune      unreleased cards drop out; survivors are stamped released
//! ```
//!
//! The map stage treats every card independently, so it runs on a rayon
//! thread pool. Propagation and pruning are cheap whole-catalog passes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`input`] | The raw bundle: templates and lookup tables, plus loading |
//! | [`tables`] | Fixed game vocabularies, economy values, special-case ids |
//! | [`card`] | The published catalog model with its legacy JSON key names |
//! | [`categories`] | Category bitmask decoding and display-name resolution |
//! | [`markup`] | Tooltip markup stripping (`infoRaw` → `info`) |
//! | [`variation`] | Availability, economy values and art URL building |
//! | [`transform`] | Stage 1 — the parallel template→card mapper and the pipeline driver |
//! | [`release`] | Stages 2 and 3 — release propagation and pruning |
//! | [`config`] | `catalog.toml` loading, CLI overrides, validation |
//! | [`output`] | Catalog serialization and CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## One Bundle In, One Catalog Out
//!
//! Both ends of the pipeline are single human-readable JSON documents. When a
//! build looks wrong, the bundle can be inspected and minimized directly, and
//! catalog diffs between patches review like any other text change. The
//! catalog is a `BTreeMap` keyed by card id throughout, so the same bundle
//! always serializes byte-identically.
//!
//! ## One Hard Error
//!
//! The only input that fails a build is a template whose card-set id is
//! unknown: it means the data comes from a newer game version than this tool
//! models, and guessing availability would publish wrong economy and release
//! data for every card in that set. Everything else degrades by omission —
//! a missing name, artist or rarity simply leaves that key out of the card,
//! never `null`.
//!
//! ## Snapshot Release Propagation
//!
//! Token release status is computed against a snapshot of the
//! initially-released flags rather than by mutating flags mid-walk. Flag
//! mutation makes the result depend on iteration order (a released card that
//! sorts early can chain through a token that sorts later); the snapshot
//! makes propagation a pure function of the mapped catalog. Tokens of tokens
//! are deliberately not pulled in — a token is published because a real card
//! summons it, not because another token does.

pub mod card;
pub mod categories;
pub mod config;
pub mod input;
pub mod markup;
pub mod output;
pub mod release;
pub mod tables;
pub mod transform;
pub mod variation;

#[cfg(test)]
pub(crate) mod test_helpers;
