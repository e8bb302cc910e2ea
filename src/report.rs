// src/report.rs
//! Human-readable probe output.
//!
//! Progress goes to the `out` stream, highlighted warnings to `err`. Both are
//! generic so tests can capture them in memory.

use std::io::{self, Write};
use std::path::Path;

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Reporter<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Run header: executable, build, and engine version.
    pub fn banner(&mut self, exe: Option<&Path>, sqlite_version: &str) -> io::Result<()> {
        writeln!(self.out, "{}", "#".repeat(10))?;
        match exe {
            Some(p) => writeln!(self.out, "{}", p.display())?,
            None => writeln!(self.out, "<unknown executable>")?,
        }
        writeln!(
            self.out,
            "{} {} on {}-{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )?;
        writeln!(self.out, "Sqlite {sqlite_version}")
    }

    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(10))
    }

    /// Bold red warning line on the error stream.
    pub fn report_warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{BOLD}{RED}!!! WARNING: {message}{RESET}")
    }

    pub fn compile_options(&mut self, opts: &[String]) -> io::Result<()> {
        writeln!(self.out, "sqlite's pragma compile_options are:")?;
        writeln!(self.out, "{opts:?}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured() -> Reporter<Vec<u8>, Vec<u8>> {
        Reporter::new(Vec::new(), Vec::new())
    }

    #[test]
    fn warning_is_highlighted_on_err_only() {
        let mut r = captured();
        r.report_warning("\"delete\" is not \"off\"").unwrap();
        let (out, err) = r.into_inner();

        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "\x1b[1m\x1b[91m!!! WARNING: \"delete\" is not \"off\"\x1b[0m\n"
        );
    }

    #[test]
    fn banner_names_engine_version() {
        let mut r = captured();
        r.banner(Some(Path::new("/usr/bin/journal-probe")), "3.49.1").unwrap();
        let (out, _) = r.into_inner();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "##########");
        assert_eq!(lines[1], "/usr/bin/journal-probe");
        assert!(lines[2].starts_with("journal-probe "), "{}", lines[2]);
        assert_eq!(lines[3], "Sqlite 3.49.1");
    }
}
