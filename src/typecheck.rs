use crate::gate::{CheckRun, TypeChecker};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

const PRIMARY: &[&str] = &["bun", "typecheck"];
const FALLBACK: &[&str] = &["npx", "tsc", "--noEmit"];

/// Real type checker: `bun typecheck` first, `npx tsc --noEmit` when
/// that is unavailable or exits non-zero.
pub struct TscChecker {
    cwd: PathBuf,
}

impl TscChecker {
    pub fn new(cwd: PathBuf) -> Self {
        TscChecker { cwd }
    }
}

/// Run one command, capturing stdout and stderr as a single text blob.
fn run_command(cwd: &Path, argv: &[&str]) -> Result<CheckRun> {
    let output = Command::new(argv[0])
        .args(&argv[1..])
        .current_dir(cwd)
        .output()
        .with_context(|| format!("failed to run {}", argv.join(" ")))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CheckRun {
        ok: output.status.success(),
        output: text,
    })
}

impl TypeChecker for TscChecker {
    fn primary(&self) -> Result<CheckRun> {
        run_command(&self.cwd, PRIMARY)
    }

    fn fallback(&self) -> CheckRun {
        // A fallback that cannot even spawn counts as a silent check.
        run_command(&self.cwd, FALLBACK).unwrap_or_else(|err| {
            tracing::debug!(%err, "fallback check did not run");
            CheckRun {
                ok: false,
                output: String::new(),
            }
        })
    }
}
