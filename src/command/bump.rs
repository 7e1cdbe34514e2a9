//! Orchestration for a version table bump.
//!
//! Manifest → next release line → README table. The README write goes
//! through a `Transaction` so `--dry-run` can show the result without
//! touching the file.

use crate::error::{BumpError, Result};
use crate::fs::Transaction;
use crate::manifest::{UNKNOWN, VersionPair, package_name, read_versions};
use crate::table::{TableUpdate, update_version_table};
use crate::version::next_release;

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for the `version-table` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct BumpArgs {
    /// Path to the Cargo.toml holding the package and dependency versions
    #[arg(long, value_name = "PATH", default_value = "Cargo.toml")]
    pub manifest_path: PathBuf,

    /// Path to the document containing the version support table
    #[arg(long, value_name = "PATH", default_value = "README.md")]
    pub readme: PathBuf,

    /// Dependency tracked in the first table column
    #[arg(long, value_name = "NAME", default_value = "bevy")]
    pub dependency: String,

    /// Name in the second table column (defaults to `package.name`)
    #[arg(long, value_name = "NAME")]
    pub plugin_name: Option<String>,

    /// Preview changes without applying them
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl BumpArgs {
    /// Returns the plugin name from the flag, or from the manifest.
    pub fn resolve_plugin_name(&self) -> Result<String> {
        if let Some(name) = &self.plugin_name {
            return Ok(name.clone());
        }

        package_name(&self.manifest_path)?.ok_or_else(|| {
            BumpError::Other(anyhow::anyhow!(
                "{} has no package.name; pass --plugin-name",
                self.manifest_path.display()
            ))
        })
    }
}

pub fn execute(args: BumpArgs) -> Result<()> {
    let versions = read_versions(&args.manifest_path, &args.dependency)?;
    if versions.dependency == UNKNOWN {
        log::warn!(
            "{} does not declare a version for '{}'",
            args.manifest_path.display(),
            args.dependency
        );
    }

    let next = next_release(&versions.project)?;
    let plugin_name = args.resolve_plugin_name()?;

    log::info!(
        "{} {} → {} {}",
        args.dependency,
        versions.dependency,
        plugin_name,
        next
    );
    println!("{} {}", versions.dependency.cyan(), next.green().bold());

    let pair = VersionPair {
        dependency: versions.dependency,
        project: next,
    };

    let mut txn = Transaction::new(args.dry_run);

    let table = match update_version_table(
        &args.readme,
        &pair,
        &args.dependency,
        &plugin_name,
        &mut txn,
    )? {
        TableUpdate::Updated(table) => table,
        TableUpdate::NotFound => return Ok(()),
    };

    println!("\n{}", "Version support table:".bold().cyan());
    print!("{}", table);

    if let Err(e) = txn.commit() {
        eprintln!("{} {}", "Error during commit:".red().bold(), e);
        return Err(e);
    }

    let root = args.readme.parent().unwrap_or(Path::new(""));
    txn.print_summary(root);

    if !args.dry_run {
        println!(
            "{} {} {}",
            "✓ Version support table updated:".green().bold(),
            pair.dependency.yellow(),
            pair.project.green().bold()
        );
    }

    Ok(())
}
