//! Field-level partial updates.
//!
//! A patch records which fields the caller wants to change: `None` keeps the
//! current value, `Some` replaces it, independently per field. Applying a
//! patch is a pure function over the record, so interactive prompting stays
//! a thin adapter outside the persistence layer.

use crate::types::{Ability, Champion, Region};

/// Optional overrides for a champion's mutable fields.
#[derive(Debug, Clone, Default)]
pub struct ChampionPatch {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub role: Option<String>,
    pub difficulty: Option<String>,
}

impl ChampionPatch {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.nickname.is_none()
            && self.role.is_none()
            && self.difficulty.is_none()
    }

    pub fn apply(&self, champion: &mut Champion) {
        if let Some(name) = &self.name {
            champion.name = name.clone();
        }
        if let Some(nickname) = &self.nickname {
            champion.nickname = nickname.clone();
        }
        if let Some(role) = &self.role {
            champion.role = role.clone();
        }
        if let Some(difficulty) = &self.difficulty {
            champion.difficulty = difficulty.clone();
        }
    }
}

/// Optional overrides for a region's mutable fields.
#[derive(Debug, Clone, Default)]
pub struct RegionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub story_count: Option<i64>,
}

impl RegionPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.story_count.is_none()
    }

    pub fn apply(&self, region: &mut Region) {
        if let Some(name) = &self.name {
            region.name = name.clone();
        }
        if let Some(description) = &self.description {
            region.description = description.clone();
        }
        if let Some(story_count) = self.story_count {
            region.story_count = story_count;
        }
    }
}

/// Optional overrides for an ability's mutable fields.
///
/// `name` renames the record's primary key; colliding with an existing
/// ability surfaces as a storage error at update time.
#[derive(Debug, Clone, Default)]
pub struct AbilityPatch {
    pub name: Option<String>,
    pub passive: Option<bool>,
    pub hotkey: Option<char>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl AbilityPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.passive.is_none()
            && self.hotkey.is_none()
            && self.description.is_none()
            && self.link.is_none()
    }

    pub fn apply(&self, ability: &mut Ability) {
        if let Some(name) = &self.name {
            ability.name = name.clone();
        }
        if let Some(passive) = self.passive {
            ability.passive = passive;
        }
        if let Some(hotkey) = self.hotkey {
            ability.hotkey = hotkey;
        }
        if let Some(description) = &self.description {
            ability.description = description.clone();
        }
        if let Some(link) = &self.link {
            ability.link = link.clone();
        }
    }
}
