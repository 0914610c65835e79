use std::fs;
use std::path::PathBuf;

use lorebook_catalog::types::Champion;
use lorebook_db::{abilities_for_champion, get_ability, insert_champion, list_abilities, open_memory};
use lorebook_import::{ImportError, import_abilities};
use rusqlite::Connection;

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const HEADER: &str = "champion,ability,passive,hotkey,description,link\n";

fn seed_champion(conn: &Connection, id: i64, name: &str) {
    insert_champion(
        conn,
        &Champion {
            id,
            name: name.to_string(),
            nickname: "nickname".to_string(),
            related_champions: 0,
            biography: "bio".to_string(),
            cinematic: "Awaken".to_string(),
            short_stories: 0,
            role: "Mage".to_string(),
            race: "Human".to_string(),
            aspects: 0,
            difficulty: "Low".to_string(),
        },
    )
    .unwrap();
}

#[test]
fn resolves_owner_by_exact_name() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_memory().unwrap();
    seed_champion(&conn, 1, "Ahri");
    seed_champion(&conn, 2, "Garen");
    let path = write_csv(
        &dir,
        "abilities.csv",
        &format!(
            "{HEADER}\
             Ahri,Orb of Deception,false,Q,Sends out an orb,https://example.net/orb\n\
             Ahri,Essence Theft,TRUE,P,Heals on takedowns,https://example.net/passive\n\
             Garen,Judgment,false,E,Spins in a whirlwind,https://example.net/judgment\n"
        ),
    );

    let stats = import_abilities(&conn, &path).unwrap();
    assert_eq!(stats.rows_imported, 3);

    let orb = get_ability(&conn, "Orb of Deception").unwrap().unwrap();
    assert_eq!(orb.champion_id, 1);
    assert_eq!(orb.hotkey, 'Q');
    assert!(!orb.passive);

    // The passive flag parses case-insensitively.
    let theft = get_ability(&conn, "Essence Theft").unwrap().unwrap();
    assert!(theft.passive);

    assert_eq!(abilities_for_champion(&conn, 2).unwrap().len(), 1);
}

#[test]
fn unknown_champion_rolls_back_the_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_memory().unwrap();
    seed_champion(&conn, 1, "Ahri");
    let path = write_csv(
        &dir,
        "abilities.csv",
        &format!(
            "{HEADER}\
             Ahri,Orb of Deception,false,Q,Sends out an orb,https://example.net/orb\n\
             Teemo,Blinding Dart,false,Q,Obscures vision,https://example.net/dart\n"
        ),
    );

    let result = import_abilities(&conn, &path);
    match result {
        Err(ImportError::UnknownChampion { champion, ability }) => {
            assert_eq!(champion, "Teemo");
            assert_eq!(ability, "Blinding Dart");
        }
        other => panic!("expected UnknownChampion, got {other:?}"),
    }

    // The row before the failure must not survive.
    assert!(list_abilities(&conn).unwrap().is_empty());
}

#[test]
fn failed_file_leaves_earlier_imports_intact() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_memory().unwrap();
    seed_champion(&conn, 1, "Ahri");
    let good = write_csv(
        &dir,
        "good.csv",
        &format!("{HEADER}Ahri,Orb of Deception,false,Q,Sends out an orb,link\n"),
    );
    let bad = write_csv(
        &dir,
        "bad.csv",
        &format!(
            "{HEADER}\
             Ahri,Charm,false,E,Blows a kiss,link\n\
             Ahri,Orb of Deception,false,Q,Duplicate name,link\n"
        ),
    );

    import_abilities(&conn, &good).unwrap();
    // The duplicate primary key aborts the second file entirely.
    assert!(import_abilities(&conn, &bad).is_err());

    let names: Vec<String> = list_abilities(&conn)
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Orb of Deception".to_string()]);
}

#[test]
fn short_rows_are_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_memory().unwrap();
    seed_champion(&conn, 1, "Ahri");
    let path = write_csv(
        &dir,
        "abilities.csv",
        &format!(
            "{HEADER}\
             Ahri,Charm,false\n\
             Ahri,Orb of Deception,false,Q,Sends out an orb,link\n"
        ),
    );

    let stats = import_abilities(&conn, &path).unwrap();
    assert_eq!(stats.rows_imported, 1);
    assert_eq!(stats.rows_bad_format, 1);
    assert!(get_ability(&conn, "Charm").unwrap().is_none());
}
