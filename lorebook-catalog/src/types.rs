//! Data model types for the lore catalog.
//!
//! These mirror the persistent schema: champions, regions, and abilities,
//! with a Region↔Champion junction and Champion-owned abilities.

// ── Champion ────────────────────────────────────────────────────────────────

/// A champion record from the `campeon` table.
///
/// The identifier is assigned once at import time and never changes; it is
/// the foreign-key target for region membership and ability ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Champion {
    pub id: i64,
    pub name: String,
    pub nickname: String,
    /// Number of champions this one has a lore relation with.
    pub related_champions: i64,
    pub biography: String,
    /// Cinematic-appearance flag, kept as the free text found in the source
    /// data rather than coerced to a boolean.
    pub cinematic: String,
    pub short_stories: i64,
    /// Role in the game; used as an exact-match filter key.
    pub role: String,
    pub race: String,
    pub aspects: i64,
    pub difficulty: String,
}

// ── Region ──────────────────────────────────────────────────────────────────

/// A region record from the `region` table.
///
/// Champion membership lives in the `region_campeon` junction table, not on
/// the struct; membership is unordered and carries no ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub story_count: i64,
}

// ── Ability ─────────────────────────────────────────────────────────────────

/// An ability record from the `habilidad` table.
///
/// The name is the primary key and must be unique system-wide. Every ability
/// belongs to exactly one champion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub passive: bool,
    /// Single assigned hotkey character.
    pub hotkey: char,
    pub description: String,
    pub link: String,
    pub champion_id: i64,
}
