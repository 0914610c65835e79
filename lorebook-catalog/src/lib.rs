//! Domain types for the lore catalog.
//!
//! Plain record structs for the three entity kinds plus the patch types
//! used for field-level partial updates.

pub mod patch;
pub mod types;

pub use patch::{AbilityPatch, ChampionPatch, RegionPatch};
pub use types::{Ability, Champion, Region};
