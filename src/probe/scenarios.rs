// src/probe/scenarios.rs

use std::io::Write;

use super::{check, ProbeError, Scenario, ScenarioOutcome};
use crate::config::DatabaseConfig;
use crate::db::{
    close_db_connection, current_journal_mode, new_db_path, open_db_connection,
    populate_dummy_schema, set_journal_mode_sql,
};
use crate::report::Reporter;

pub fn reuse_connection_without_statement_close<O: Write, E: Write>(
    desired_mode: &str,
    cfg: &DatabaseConfig,
    rep: &mut Reporter<O, E>,
) -> Result<ScenarioOutcome, ProbeError> {
    let scenario = Scenario::ReuseWithoutStatementClose;
    rep.line(scenario.description())?;

    let path = new_db_path(cfg);
    log::info!("{} on {}", scenario.name(), path.display());
    let conn = open_db_connection(&path)?;
    if cfg.populate_dummy_schema {
        populate_dummy_schema(&conn)?;
    }

    let before = current_journal_mode(&conn)?;
    rep.line(&format!("journal_mode before: {before}"))?;

    let after = {
        let mut stmt = conn.prepare(&set_journal_mode_sql(desired_mode))?;
        let mut rows = stmt.query([])?;
        rows.next()?;
        // `rows` is still live here: the statement has not been reset.
        current_journal_mode(&conn)?
    };
    rep.line(&format!("journal_mode after: {after}"))?;

    let outcome = ScenarioOutcome {
        scenario,
        before,
        after,
        expected: desired_mode.to_owned(),
    };
    let outcome = check(outcome, &conn, rep)?;
    close_db_connection(conn)?;
    Ok(outcome)
}

pub fn reuse_connection_after_statement_close<O: Write, E: Write>(
    desired_mode: &str,
    cfg: &DatabaseConfig,
    rep: &mut Reporter<O, E>,
) -> Result<ScenarioOutcome, ProbeError> {
    let scenario = Scenario::ReuseAfterStatementClose;
    rep.line(scenario.description())?;

    let path = new_db_path(cfg);
    log::info!("{} on {}", scenario.name(), path.display());
    let conn = open_db_connection(&path)?;
    if cfg.populate_dummy_schema {
        populate_dummy_schema(&conn)?;
    }

    let before = current_journal_mode(&conn)?;
    rep.line(&format!("journal_mode before: {before}"))?;

    let mut stmt = conn.prepare(&set_journal_mode_sql(desired_mode))?;
    {
        let mut rows = stmt.query([])?;
        rows.next()?;
    }
    stmt.finalize()?;

    let after = current_journal_mode(&conn)?;
    rep.line(&format!("journal_mode after: {after}"))?;

    let outcome = ScenarioOutcome {
        scenario,
        before,
        after,
        expected: desired_mode.to_owned(),
    };
    let outcome = check(outcome, &conn, rep)?;
    close_db_connection(conn)?;
    Ok(outcome)
}

/// Expected result is the mode recorded before the change, not the desired
/// one: the second connection should not inherit a non-persistent mode.
pub fn new_connection<O: Write, E: Write>(
    desired_mode: &str,
    cfg: &DatabaseConfig,
    rep: &mut Reporter<O, E>,
) -> Result<ScenarioOutcome, ProbeError> {
    let scenario = Scenario::NewConnection;
    rep.line(scenario.description())?;

    let path = new_db_path(cfg);
    log::info!("{} on {}", scenario.name(), path.display());

    let default_mode = {
        let conn = open_db_connection(&path)?;
        let default_mode = current_journal_mode(&conn)?;
        rep.line(&format!("journal_mode before: {default_mode}"))?;
        {
            let mut stmt = conn.prepare(&set_journal_mode_sql(desired_mode))?;
            let mut rows = stmt.query([])?;
            rows.next()?;
        }
        close_db_connection(conn)?;
        log::debug!("Closed first connection to {}", path.display());
        default_mode
    };

    let conn = open_db_connection(&path)?;
    let after = current_journal_mode(&conn)?;
    rep.line(&format!("journal_mode after: {after}"))?;

    let outcome = ScenarioOutcome {
        scenario,
        before: default_mode.clone(),
        after,
        expected: default_mode,
    };
    let outcome = check(outcome, &conn, rep)?;
    close_db_connection(conn)?;
    Ok(outcome)
}
