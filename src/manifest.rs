//! Manifest (`Cargo.toml`) reading.
//!
//! Extracts the project version from `[package]` and the pinned version of
//! a dependency from `[dependencies]`. Missing fields are reported as the
//! placeholder `"unknown"` instead of failing; only unreadable files and
//! invalid TOML are errors.

use crate::error::Result;
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, Item};

/// Placeholder for a version that the manifest does not declare.
pub const UNKNOWN: &str = "unknown";

/// A dependency declaration as it appears under `[dependencies]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyVersion {
    /// `bevy = "0.14"`
    Plain(String),
    /// `bevy = { version = "0.14", features = [...] }` or `[dependencies.bevy]`
    Detailed { version: String },
}

impl DependencyVersion {
    /// Reads a dependency entry. Returns `None` for items that carry no
    /// version information at all (arrays, numbers, ...).
    pub fn from_item(item: &Item) -> Option<Self> {
        if let Some(version) = item.as_str() {
            return Some(Self::Plain(version.to_string()));
        }

        let table = item.as_table_like()?;
        let version = table
            .get("version")
            .and_then(Item::as_str)
            .unwrap_or(UNKNOWN)
            .to_string();

        Some(Self::Detailed { version })
    }

    pub fn version(&self) -> &str {
        match self {
            Self::Plain(version) => version,
            Self::Detailed { version } => version,
        }
    }
}

/// Dependency version and project version read from one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPair {
    pub dependency: String,
    pub project: String,
}

/// Reads `dependencies.<dependency>` and `package.version` from a manifest.
///
/// # Errors
///
/// - `Io`: Cannot read manifest file
/// - `Toml`: Manifest has invalid TOML syntax
///
/// # Examples
///
/// ```no_run
/// # use cargo_version_table::manifest::read_versions;
/// # use std::path::Path;
/// # fn example() -> cargo_version_table::error::Result<()> {
/// let pair = read_versions(Path::new("Cargo.toml"), "bevy")?;
/// println!("bevy {} / plugin {}", pair.dependency, pair.project);
/// # Ok(())
/// # }
/// ```
pub fn read_versions(manifest_path: &Path, dependency: &str) -> Result<VersionPair> {
    let doc = load(manifest_path)?;

    let project = doc
        .get("package")
        .and_then(|package| package.get("version"))
        .and_then(Item::as_str)
        .unwrap_or(UNKNOWN)
        .to_string();

    let dependency = doc
        .get("dependencies")
        .and_then(|deps| deps.get(dependency))
        .and_then(DependencyVersion::from_item)
        .map_or_else(|| UNKNOWN.to_string(), |dep| dep.version().to_string());

    log::debug!(
        "Read {}: dependency version {}, project version {}",
        manifest_path.display(),
        dependency,
        project
    );

    Ok(VersionPair {
        dependency,
        project,
    })
}

/// Reads `package.name`, if the manifest declares one.
pub fn package_name(manifest_path: &Path) -> Result<Option<String>> {
    let doc = load(manifest_path)?;

    Ok(doc
        .get("package")
        .and_then(|package| package.get("name"))
        .and_then(Item::as_str)
        .map(str::to_string))
}

fn load(manifest_path: &Path) -> Result<DocumentMut> {
    let content = fs::read_to_string(manifest_path)?;
    Ok(content.parse()?)
}
