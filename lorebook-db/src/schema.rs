//! SQLite schema lifecycle: create and drop the catalog tables.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// CREATE statements in dependency order: base tables before the tables
/// that reference them.
const CREATE_STEPS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS campeon (
        id_campeon INTEGER PRIMARY KEY,
        nombre_campeon TEXT NOT NULL,
        apodo TEXT NOT NULL,
        campeones_con_relacion INTEGER NOT NULL,
        biografia TEXT NOT NULL,
        apariencion_en_cinematicas TEXT NOT NULL,
        numero_de_relatos_cortos INTEGER NOT NULL,
        rol TEXT NOT NULL,
        raza TEXT NOT NULL,
        numero_de_aspectos INTEGER NOT NULL,
        dificultad TEXT NOT NULL
    );",
    "CREATE TABLE IF NOT EXISTS region (
        id_region INTEGER PRIMARY KEY,
        nombre_region TEXT NOT NULL,
        descripcion_region TEXT NOT NULL,
        historias_relacionadas INTEGER NOT NULL
    );",
    "CREATE TABLE IF NOT EXISTS region_campeon (
        id_region INTEGER NOT NULL REFERENCES region(id_region),
        id_campeon INTEGER NOT NULL REFERENCES campeon(id_campeon),
        PRIMARY KEY (id_region, id_campeon)
    );",
    "CREATE TABLE IF NOT EXISTS habilidad (
        nombre_habilidad TEXT PRIMARY KEY,
        pasiva BOOLEAN NOT NULL,
        asignacion_de_tecla TEXT NOT NULL,
        descripcion_habilidad TEXT NOT NULL,
        link TEXT NOT NULL,
        id_campeon INTEGER NOT NULL REFERENCES campeon(id_campeon)
    );",
];

/// DROP order: referencing tables before their targets so foreign-key
/// enforcement never blocks a step.
const DROP_STEPS: &[&str] = &["habilidad", "region_campeon", "region", "campeon"];

/// Create all tables if absent.
///
/// Each step runs in its own transaction: a failing CREATE rolls back only
/// that step and surfaces the engine error unmasked, leaving the tables
/// created so far in place.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    for sql in CREATE_STEPS {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.commit()?;
    }
    Ok(())
}

/// Drop all tables if present. Idempotent: dropping an absent table is a
/// no-op. Each step runs in its own transaction, as with [`create_schema`].
pub fn drop_schema(conn: &Connection) -> Result<(), SchemaError> {
    for table in DROP_STEPS {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {table};"))?;
        tx.commit()?;
    }
    Ok(())
}

/// Open or create a catalog database at the given path, ensuring the schema
/// exists.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}
