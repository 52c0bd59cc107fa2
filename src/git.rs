use crate::gate::StatusProvider;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::Command;

/// Real status provider backed by `git status --porcelain`.
pub struct GitStatus {
    cwd: PathBuf,
}

impl GitStatus {
    pub fn new(cwd: PathBuf) -> Self {
        GitStatus { cwd }
    }
}

impl StatusProvider for GitStatus {
    fn status(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(&self.cwd)
            .output()
            .context("failed to run git status")?;

        if !output.status.success() {
            bail!(
                "git status failed in {}: {}",
                self.cwd.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
