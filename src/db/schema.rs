// src/db/schema.rs
//! Throwaway schema so probes can run against a non-empty database.

use rusqlite::Connection;

pub fn populate_dummy_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("CREATE TABLE dummy (message TEXT)", [])?;
    let mut stmt = conn.prepare("INSERT INTO dummy (message) VALUES (?1)")?;
    for message in ["hello", "world"] {
        stmt.execute([message])?;
    }
    Ok(())
}
