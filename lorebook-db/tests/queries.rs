use lorebook_catalog::types::*;
use lorebook_db::*;
use rusqlite::Connection;

fn champion(id: i64, name: &str, nickname: &str, role: &str) -> Champion {
    Champion {
        id,
        name: name.to_string(),
        nickname: nickname.to_string(),
        related_champions: 1,
        biography: format!("The story of {name}."),
        cinematic: "Awaken".to_string(),
        short_stories: 1,
        role: role.to_string(),
        race: "Human".to_string(),
        aspects: 5,
        difficulty: "Moderate".to_string(),
    }
}

fn region(id: i64, name: &str, description: &str, story_count: i64) -> Region {
    Region {
        id,
        name: name.to_string(),
        description: description.to_string(),
        story_count,
    }
}

fn ability(name: &str, hotkey: char, description: &str, champion_id: i64) -> Ability {
    Ability {
        name: name.to_string(),
        passive: false,
        hotkey,
        description: description.to_string(),
        link: format!("https://example.net/{champion_id}"),
        champion_id,
    }
}

fn seeded() -> Connection {
    let conn = open_memory().unwrap();
    insert_champion(&conn, &champion(1, "Ahri", "the Nine-Tailed Fox", "Mage")).unwrap();
    insert_champion(&conn, &champion(2, "Garen", "the Might of Demacia", "Fighter")).unwrap();
    insert_champion(&conn, &champion(3, "Lux", "the Lady of Luminosity", "Mage")).unwrap();
    insert_region(&conn, &region(1, "Ionia", "A land shaped by wild magic", 12)).unwrap();
    insert_region(&conn, &region(2, "Demacia", "A proud martial kingdom", 5)).unwrap();
    link_region_champion(&conn, 1, 1).unwrap();
    link_region_champion(&conn, 2, 2).unwrap();
    link_region_champion(&conn, 2, 3).unwrap();
    insert_ability(&conn, &ability("Orb of Deception", 'Q', "Sends out an orb", 1)).unwrap();
    insert_ability(&conn, &ability("Charm", 'E', "Blows a kiss that stuns", 1)).unwrap();
    insert_ability(&conn, &ability("Judgment", 'E', "Spins in a whirlwind", 2)).unwrap();
    conn
}

#[test]
fn listings_return_all_rows() {
    let conn = seeded();
    assert_eq!(list_champions(&conn).unwrap().len(), 3);
    assert_eq!(list_regions(&conn).unwrap().len(), 2);
    assert_eq!(list_abilities(&conn).unwrap().len(), 3);
}

#[test]
fn listings_are_empty_on_a_fresh_catalog() {
    let conn = open_memory().unwrap();
    assert!(list_champions(&conn).unwrap().is_empty());
    assert!(list_regions(&conn).unwrap().is_empty());
    assert!(list_abilities(&conn).unwrap().is_empty());
}

#[test]
fn champion_search_matches_name_and_nickname() {
    let conn = seeded();

    let by_name = search_champions_by_text(&conn, "hri").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Ahri");

    // "Demacia" only appears in Garen's nickname.
    let by_nickname = search_champions_by_text(&conn, "Demacia").unwrap();
    assert_eq!(by_nickname.len(), 1);
    assert_eq!(by_nickname[0].name, "Garen");

    assert!(search_champions_by_text(&conn, "Teemo").unwrap().is_empty());
}

#[test]
fn role_filter_uses_equality_not_substring() {
    let conn = seeded();

    let mages = champions_by_role(&conn, "Mage").unwrap();
    assert_eq!(mages.len(), 2);
    assert!(champions_by_role(&conn, "Mag").unwrap().is_empty());
}

#[test]
fn get_returns_none_for_missing_keys() {
    let conn = seeded();
    assert!(get_champion(&conn, 99).unwrap().is_none());
    assert!(get_region(&conn, 99).unwrap().is_none());
    assert!(get_ability(&conn, "Unknown Spell").unwrap().is_none());
}

#[test]
fn region_search_scans_descriptions() {
    let conn = seeded();

    let magic = search_regions_by_text(&conn, "magic").unwrap();
    assert_eq!(magic.len(), 1);
    assert_eq!(magic[0].name, "Ionia");
}

#[test]
fn story_filter_is_strictly_greater() {
    let conn = seeded();

    let over_five = regions_with_min_stories(&conn, 5).unwrap();
    assert_eq!(over_five.len(), 1);
    assert_eq!(over_five[0].name, "Ionia");

    assert_eq!(regions_with_min_stories(&conn, 4).unwrap().len(), 2);
    assert!(regions_with_min_stories(&conn, 12).unwrap().is_empty());
}

#[test]
fn champion_names_resolve_through_the_junction() {
    let conn = seeded();

    let mut names = champion_names_for_region(&conn, 2).unwrap();
    names.sort();
    assert_eq!(names, vec!["Garen".to_string(), "Lux".to_string()]);
    assert!(champion_names_for_region(&conn, 99).unwrap().is_empty());
}

#[test]
fn ability_search_matches_name_and_description() {
    let conn = seeded();

    let orb = search_abilities_by_text(&conn, "orb").unwrap();
    assert_eq!(orb.len(), 1);

    let whirl = search_abilities_by_text(&conn, "whirlwind").unwrap();
    assert_eq!(whirl.len(), 1);
    assert_eq!(whirl[0].name, "Judgment");
}

#[test]
fn abilities_for_champion_filters_by_owner() {
    let conn = seeded();

    let mut names: Vec<String> = abilities_for_champion(&conn, 1)
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Charm".to_string(), "Orb of Deception".to_string()]);
    assert!(abilities_for_champion(&conn, 99).unwrap().is_empty());
}

#[test]
fn max_ids_default_to_zero() {
    let conn = open_memory().unwrap();
    assert_eq!(max_champion_id(&conn).unwrap(), 0);
    assert_eq!(max_region_id(&conn).unwrap(), 0);
}

#[test]
fn max_ids_track_the_highest_stored_row() {
    let conn = seeded();
    assert_eq!(max_champion_id(&conn).unwrap(), 3);
    assert_eq!(max_region_id(&conn).unwrap(), 2);
}

#[test]
fn catalog_counts_cover_every_table() {
    let conn = seeded();
    let counts = catalog_counts(&conn).unwrap();
    assert_eq!(counts.champions, 3);
    assert_eq!(counts.regions, 2);
    assert_eq!(counts.abilities, 3);
    assert_eq!(counts.region_links, 3);
}
