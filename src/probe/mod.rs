// src/probe/mod.rs
//! The pragma probe: three `journal_mode` lifecycle scenarios and the driver
//! that runs them in order.
//!
//! A scenario compares one observed mode against one expected mode. A
//! mismatch is reported (warning plus the engine's compile options) and the
//! run carries on; only engine or I/O failures abort.

pub mod scenarios;

use std::io::{self, Write};

use rusqlite::Connection;
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::db::compile_options;
use crate::report::Reporter;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("SQLite error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Same connection, pragma statement still open when re-reading.
    ReuseWithoutStatementClose,
    /// Same connection, pragma statement finalized before re-reading.
    ReuseAfterStatementClose,
    /// Close the connection, reopen the same file, re-read.
    NewConnection,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::ReuseWithoutStatementClose,
        Scenario::ReuseAfterStatementClose,
        Scenario::NewConnection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::ReuseWithoutStatementClose => "reuse_connection_without_statement_close",
            Scenario::ReuseAfterStatementClose => "reuse_connection_after_statement_close",
            Scenario::NewConnection => "new_connection",
        }
    }

    /// Printed before the scenario runs.
    pub fn description(self) -> &'static str {
        match self {
            Scenario::ReuseWithoutStatementClose => {
                "Set journal_mode and check it without closing the statement (should keep desired mode)."
            }
            Scenario::ReuseAfterStatementClose => {
                "Set journal_mode and check after closing the statement (should keep desired mode)."
            }
            Scenario::NewConnection => {
                "Set journal_mode, close connection, and check with a new connection (should revert to default)."
            }
        }
    }

    pub fn run<O: Write, E: Write>(
        self,
        desired_mode: &str,
        cfg: &DatabaseConfig,
        rep: &mut Reporter<O, E>,
    ) -> Result<ScenarioOutcome, ProbeError> {
        match self {
            Scenario::ReuseWithoutStatementClose => {
                scenarios::reuse_connection_without_statement_close(desired_mode, cfg, rep)
            }
            Scenario::ReuseAfterStatementClose => {
                scenarios::reuse_connection_after_statement_close(desired_mode, cfg, rep)
            }
            Scenario::NewConnection => scenarios::new_connection(desired_mode, cfg, rep),
        }
    }
}

/// What one scenario observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub before:   String,
    pub after:    String,
    pub expected: String,
}

impl ScenarioOutcome {
    pub fn matched(&self) -> bool {
        self.after == self.expected
    }
}

/// Compare, and on mismatch print the warning and compile options.
fn check<O: Write, E: Write>(
    outcome: ScenarioOutcome,
    conn: &Connection,
    rep: &mut Reporter<O, E>,
) -> Result<ScenarioOutcome, ProbeError> {
    if !outcome.matched() {
        log::info!(
            "{}: journal_mode {:?}, expected {:?}",
            outcome.scenario.name(),
            outcome.after,
            outcome.expected
        );
        rep.report_warning(&format!("\"{}\" is not \"{}\"", outcome.after, outcome.expected))?;
        rep.compile_options(&compile_options(conn)?)?;
    }
    Ok(outcome)
}

/// Banner followed by every scenario, separated by rules.
pub fn run_all<O: Write, E: Write>(
    desired_mode: &str,
    cfg: &DatabaseConfig,
    rep: &mut Reporter<O, E>,
) -> Result<Vec<ScenarioOutcome>, ProbeError> {
    let exe = std::env::current_exe().ok();
    rep.banner(exe.as_deref(), rusqlite::version())?;

    let mut outcomes = Vec::with_capacity(Scenario::ALL.len());
    for scenario in Scenario::ALL {
        rep.separator()?;
        outcomes.push(scenario.run(desired_mode, cfg, rep)?);
    }
    rep.flush()?;

    let mismatches = outcomes.iter().filter(|o| !o.matched()).count();
    log::info!("Probe of {:?} finished, {} mismatch(es)", desired_mode, mismatches);
    Ok(outcomes)
}
