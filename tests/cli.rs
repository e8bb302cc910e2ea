//! End-to-end runs of the `journal-probe` binary.
//!
//! The binary reads `journal_probe.toml` from its own directory; the tests
//! drop one there that keeps scratch databases under `target/debug`.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
    sync::OnceLock,
};

const WAL_WARNING: &str = "\x1b[1m\x1b[91m!!! WARNING: \"wal\" is not \"delete\"\x1b[0m\n";

fn exe() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_journal-probe"))
}

/// `target/debug/journal_probe_scratch`, created and configured once.
fn scratch_dir() -> &'static Path {
    static DIR: OnceLock<PathBuf> = OnceLock::new();
    DIR.get_or_init(|| {
        let exe_dir = exe().parent().expect("binary lives in a directory");
        let dir = exe_dir.join("journal_probe_scratch");
        fs::create_dir_all(&dir).expect("Failed to create scratch dir");

        let temp_dir = toml::Value::String(dir.to_string_lossy().into_owned());
        fs::write(
            exe_dir.join("journal_probe.toml"),
            format!("[logging]\nlevel = \"WARN\"\n\n[database]\ntemp_dir = {temp_dir}\n"),
        )
        .expect("Failed to write journal_probe.toml");
        dir
    })
}

fn probe() -> Command {
    scratch_dir();
    Command::new(exe())
}

fn scratch_db_files() -> usize {
    fs::read_dir(scratch_dir())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with("test_journal_mode_sqlite."))
        .count()
}

#[test]
fn missing_argument_is_fatal() {
    let out = probe().output().unwrap();
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("missing journal mode argument"), "{}", err);
}

#[test]
fn mismatch_still_exits_successfully() {
    let out = probe().arg("wal").output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("journal_mode after: wal"), "{}", stdout);

    // Only scenario C mismatches, and nothing but the highlighted line reaches stderr.
    assert_eq!(String::from_utf8_lossy(&out.stderr), WAL_WARNING);
}

#[test]
fn off_runs_all_scenarios_cleanly() {
    let out = probe().arg("off").output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("journal_mode before: delete").count(), 3, "{}", stdout);
    assert_eq!(String::from_utf8_lossy(&out.stderr), "");

    // Databases land in the configured scratch dir, not the system temp dir.
    assert!(scratch_db_files() >= 3, "expected databases under {:?}", scratch_dir());
}
