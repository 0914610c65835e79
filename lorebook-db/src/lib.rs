//! SQLite persistence layer for the lore catalog.
//!
//! Provides schema lifecycle, CRUD operations, and query APIs backed by
//! SQLite (via rusqlite with the bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use rusqlite::Connection;

pub use operations::{
    OperationError, champion_exists, delete_abilities_by_hotkey, delete_ability, delete_champion,
    delete_champions_by_cinematic, delete_region, find_champion_by_name, insert_ability,
    insert_champion, insert_region, link_region_champion, update_ability, update_champion,
    update_region,
};
pub use queries::{
    CatalogCounts, abilities_for_champion, catalog_counts, champion_names_for_region,
    champions_by_role, get_ability, get_champion, get_region, list_abilities, list_champions,
    list_regions, max_champion_id, max_region_id, region_champion_ids, regions_with_min_stories,
    search_abilities_by_text, search_champions_by_text, search_regions_by_text,
};
pub use schema::{SchemaError, create_schema, drop_schema, open_database, open_memory};
