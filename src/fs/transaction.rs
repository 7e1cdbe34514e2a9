//! Staged document writes.
//!
//! The document is rewritten in memory and staged here; nothing touches the
//! disk until `commit()`, and in dry-run mode not even then.
//!
//! ```no_run
//! # use cargo_version_table::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> cargo_version_table::error::Result<()> {
//! let mut txn = Transaction::new(false);
//! txn.update_file(PathBuf::from("README.md"), "| bevy | my_plugin |\n".into())?;
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{BumpError, Result};

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct StagedWrite {
    path: PathBuf,
    content: String,
}

/// Pending document writes.
///
/// If dropped with staged writes and without committing, logs a warning.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    staged: Vec<StagedWrite>,
    dry_run: bool,
    committed: bool,
}

impl Transaction {
    pub fn new(dry_run: bool) -> Self {
        Self {
            staged: Vec::new(),
            dry_run,
            committed: false,
        }
    }

    /// Stages a file update.
    ///
    /// Content identical to what is on disk is not staged.
    pub fn update_file(&mut self, path: PathBuf, content: String) -> Result<()> {
        if self.committed {
            return Err(BumpError::Other(anyhow::anyhow!(
                "Cannot modify transaction after commit"
            )));
        }

        let current = fs::read_to_string(&path).map_err(|e| {
            BumpError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        if current == content {
            log::debug!("Content unchanged, skipping: {}", path.display());
            return Ok(());
        }

        if self.dry_run {
            log::info!("Would update: {}", path.display());
        } else {
            log::debug!("Staging update for: {}", path.display());
        }

        self.staged.push(StagedWrite { path, content });
        Ok(())
    }

    /// Writes the staged files. A no-op in dry-run mode.
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Err(BumpError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }
        self.committed = true;

        if self.dry_run {
            return Ok(());
        }

        for write in &self.staged {
            fs::write(&write.path, &write.content).map_err(|e| {
                BumpError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to write {}: {}", write.path.display(), e),
                ))
            })?;
            log::debug!("Updated: {}", write.path.display());
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Prints the changed files to stdout.
    ///
    /// Paths under `root` are shown relative to it with forward slashes.
    pub fn print_summary(&self, root: &Path) {
        if self.staged.is_empty() {
            println!("\n{}", "No changes needed".yellow());
            return;
        }

        if self.dry_run {
            println!("\n{}", "DRY RUN - No changes will be made".yellow().bold());
        } else {
            println!("\n{}", "Changes applied:".green().bold());
        }

        for write in &self.staged {
            let display = write
                .path
                .strip_prefix(root)
                .unwrap_or(&write.path)
                .to_string_lossy()
                .replace('\\', "/");

            if self.dry_run {
                println!("   • {}", display.dimmed());
            } else {
                println!("   {} {}", "✓".green(), display.dimmed());
            }
        }

        if self.dry_run {
            println!("\nRun without {} to apply.", "--dry-run".cyan());
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed && !self.staged.is_empty() && !self.dry_run {
            log::warn!("Transaction dropped without commit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_update_file_waits_for_commit() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("README.md");
        fs::write(&file, "original").unwrap();

        let mut txn = Transaction::new(false);
        txn.update_file(file.clone(), "modified".to_string())
            .unwrap();

        assert!(!txn.is_empty());
        assert_eq!(fs::read_to_string(&file).unwrap(), "original");

        txn.commit().unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "modified");
    }

    #[test]
    fn test_update_file_no_change_skips() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("README.md");
        fs::write(&file, "same").unwrap();

        let mut txn = Transaction::new(false);
        txn.update_file(file, "same".to_string()).unwrap();

        assert!(txn.is_empty());
        txn.commit().unwrap();
    }

    #[test]
    fn test_update_file_nonexistent_fails() {
        let temp = TempDir::new().unwrap();
        let mut txn = Transaction::new(false);

        let result = txn.update_file(temp.path().join("missing.md"), "x".to_string());
        assert!(matches!(result, Err(BumpError::Io(_))));
    }

    #[test]
    fn test_dry_run_does_not_modify_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("README.md");
        fs::write(&file, "original").unwrap();

        let mut txn = Transaction::new(true);
        txn.update_file(file.clone(), "modified".to_string())
            .unwrap();
        txn.print_summary(temp.path());
        txn.commit().unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "original");
    }

    #[test]
    fn test_commit_twice_fails() {
        let mut txn = Transaction::new(false);
        txn.commit().unwrap();
        assert!(txn.commit().is_err());
    }

    #[test]
    fn test_update_after_commit_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("README.md");
        fs::write(&file, "original").unwrap();

        let mut txn = Transaction::new(false);
        txn.commit().unwrap();
        assert!(txn.update_file(file, "modified".to_string()).is_err());
    }
}
