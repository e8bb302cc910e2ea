// src/db/connection.rs
//! Scratch database paths and `journal_mode` pragma helpers.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use uuid::Uuid;

use crate::config::DatabaseConfig;

/// Fresh database path under `cfg.temp_dir`. The file is not created here;
/// SQLite creates it on first open.
pub fn new_db_path(cfg: &DatabaseConfig) -> PathBuf {
    cfg.temp_dir
        .join(format!("{}.{}", cfg.file_prefix, Uuid::new_v4()))
}

pub fn open_db_connection(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    log::debug!("Opened {}", path.display());
    Ok(conn)
}

/// Close explicitly so close-time errors surface instead of being swallowed
/// by `Drop`.
pub fn close_db_connection(conn: Connection) -> rusqlite::Result<()> {
    conn.close().map_err(|(_, e)| e)
}

/// Current `journal_mode` of the connection's main database.
pub fn current_journal_mode(conn: &Connection) -> rusqlite::Result<String> {
    conn.query_row("PRAGMA journal_mode", [], |row| row.get(0))
}

/// Statement text requesting `mode`. The value is passed through verbatim,
/// so anything SQLite cannot parse fails at prepare time.
pub fn set_journal_mode_sql(mode: &str) -> String {
    format!("PRAGMA journal_mode={mode}")
}

/// Flags the SQLite library was built with.
pub fn compile_options(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA compile_options")?;
    let opts = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn db_paths_are_unique_and_prefixed() {
        let cfg = DatabaseConfig::default();
        let paths: HashSet<PathBuf> = (0..256).map(|_| new_db_path(&cfg)).collect();
        assert_eq!(paths.len(), 256);

        let name = new_db_path(&cfg)
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .unwrap();
        assert!(name.starts_with("test_journal_mode_sqlite."), "{}", name);
    }

    #[test]
    fn new_db_path_does_not_touch_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DatabaseConfig { temp_dir: dir.path().to_path_buf(), ..Default::default() };
        let path = new_db_path(&cfg);
        assert!(!path.exists());
        assert_eq!(path.parent(), Some(dir.path()));
    }

    #[test]
    fn pragma_statement_is_verbatim() {
        assert_eq!(set_journal_mode_sql("off"), "PRAGMA journal_mode=off");
        assert_eq!(set_journal_mode_sql("Not A Mode"), "PRAGMA journal_mode=Not A Mode");
    }

    #[test]
    fn compile_options_are_listed() {
        let conn = Connection::open_in_memory().unwrap();
        let opts = compile_options(&conn).unwrap();
        assert!(!opts.is_empty());
    }
}
