//! Release line computation.
//!
//! The project's README tracks release lines (`0.5`, `2.0`), not full
//! versions. While the major version is `0` every minor bump is treated as
//! breaking; from `1.0` on every release bumps the major version.

use crate::error::{BumpError, Result};

/// Drops the last dot-separated component: `"0.3.2"` → `"0.3"`.
///
/// A version without a dot is returned unchanged.
pub fn release_line(version: &str) -> &str {
    version
        .rsplit_once('.')
        .map_or(version, |(line, _patch)| line)
}

/// Computes the release line that follows `version`.
///
/// ```
/// # use cargo_version_table::version::next_release;
/// assert_eq!(next_release("0.3.2").unwrap(), "0.4");
/// assert_eq!(next_release("1.4.0").unwrap(), "2.0");
/// ```
///
/// # Errors
///
/// `InvalidVersion` if the major or minor component is missing or is not
/// an unsigned integer. This covers the `unknown` placeholder produced for
/// a manifest without `package.version`.
pub fn next_release(version: &str) -> Result<String> {
    let line = release_line(version);
    let mut parts = line.split('.');

    let major = parse_component(version, parts.next(), "major")?;
    let minor = parse_component(version, parts.next(), "minor")?;

    let next = if major == 0 {
        format!("0.{}", bump(version, minor, "minor")?)
    } else {
        format!("{}.0", bump(version, major, "major")?)
    };

    log::debug!("Next release after {} is {}", version, next);
    Ok(next)
}

fn bump(version: &str, component: u64, what: &str) -> Result<u64> {
    component.checked_add(1).ok_or_else(|| {
        BumpError::InvalidVersion(version.to_string(), format!("{} component overflows", what))
    })
}

fn parse_component(version: &str, part: Option<&str>, what: &str) -> Result<u64> {
    let part = part.ok_or_else(|| {
        BumpError::InvalidVersion(version.to_string(), format!("missing {} component", what))
    })?;

    part.trim().parse().map_err(|_| {
        BumpError::InvalidVersion(
            version.to_string(),
            format!("{} component '{}' is not a number", what, part),
        )
    })
}
