// src/main.rs

//! journal-probe entry-point.
//!
//! 1. Take the desired `journal_mode` from the first argument
//! 2. Load `journal_probe.toml` next to the executable (defaults if absent)
//! 3. Set up logging
//! 4. Run the three scenarios, printing the report
//!
//! Mismatches are reported but never change the exit status; any engine or
//! I/O failure exits with status 1.

use anyhow::{Context, Result};
use std::path::PathBuf;

use journal_probe::config::{config_path, load_config};
use journal_probe::logging::setup_logging;
use journal_probe::probe::run_all;
use journal_probe::report::Reporter;

/// Print an error with context and terminate the process.
macro_rules! fatal {
    ($ctx:expr, $($arg:tt)+) => {{
        eprintln!(
            "[{}][ERROR][{}] {}",
            chrono::Local::now().to_rfc3339(),
            $ctx,
            format!($($arg)+)
        );
        std::process::exit(1);
    }};
}

/// Directory that contains the running executable.
fn exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine executable path")?;
    exe.parent()
        .map(PathBuf::from)
        .context("executable must live in some directory")
}

fn run() -> Result<()> {
    let desired_mode = std::env::args()
        .nth(1)
        .context("missing journal mode argument (usage: journal-probe <mode>)")?;

    let exe_dir = exe_dir()?;
    let cfg_path = config_path(&exe_dir);
    let cfg = load_config(&cfg_path)
        .with_context(|| format!("loading {}", cfg_path.display()))?;

    setup_logging(&exe_dir, &cfg.logging).context("logging setup failed")?;
    log::debug!("Probing journal_mode={:?} with {:?}", desired_mode, cfg.database);

    let mut rep = Reporter::stdio();
    run_all(&desired_mode, &cfg.database, &mut rep)
        .with_context(|| format!("probing journal_mode={desired_mode}"))?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        fatal!("main", "{:#}", e);
    }
}
