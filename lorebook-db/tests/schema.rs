use lorebook_db::*;

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn create_schema_builds_all_tables() {
    let conn = open_memory().unwrap();
    let names = table_names(&conn);
    for expected in ["campeon", "region", "region_campeon", "habilidad"] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }
}

#[test]
fn create_schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
    create_schema(&conn).unwrap();
    assert_eq!(table_names(&conn).len(), 4);
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_memory().unwrap();
    let pragma: i64 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(pragma, 1);

    // No champion with id 99 exists, so the FK must reject this row.
    let result = conn.execute(
        "INSERT INTO habilidad (nombre_habilidad, pasiva, asignacion_de_tecla,
             descripcion_habilidad, link, id_campeon)
         VALUES ('Orb of Deception', 0, 'Q', 'desc', 'link', 99)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn drop_schema_removes_all_tables() {
    let conn = open_memory().unwrap();
    drop_schema(&conn).unwrap();
    assert!(table_names(&conn).is_empty());
}

#[test]
fn drop_schema_is_idempotent() {
    let conn = open_memory().unwrap();
    drop_schema(&conn).unwrap();
    drop_schema(&conn).unwrap();
    assert!(table_names(&conn).is_empty());
}

#[test]
fn reset_yields_an_empty_catalog() {
    let conn = open_memory().unwrap();
    conn.execute(
        "INSERT INTO region (id_region, nombre_region, descripcion_region,
             historias_relacionadas)
         VALUES (1, 'Ionia', 'A land of magic', 12)",
        [],
    )
    .unwrap();

    drop_schema(&conn).unwrap();
    create_schema(&conn).unwrap();
    assert!(list_regions(&conn).unwrap().is_empty());
}

#[test]
fn open_database_creates_schema_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    {
        let conn = open_database(&path).unwrap();
        assert_eq!(table_names(&conn).len(), 4);
    }
    // Reopening finds the same schema and tolerates the existing tables.
    let conn = open_database(&path).unwrap();
    assert_eq!(table_names(&conn).len(), 4);
}
