//! Version support table in a README.
//!
//! The table maps dependency versions to the project versions that support
//! them:
//!
//! ```markdown
//! | bevy | my_plugin |
//! |-|-|
//! |0.13|0.5, main|
//! |0.12|0.4|
//! ```
//!
//! The header is located with a regex; the body is tokenized line by line.
//! Only the body is re-rendered, everything else in the document is kept
//! byte for byte.

use crate::error::Result;
use crate::fs::Transaction;
use crate::manifest::VersionPair;
use colored::Colorize;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;

/// Label marking the in-development release line.
pub const MAIN: &str = "main";

/// Parsed table body: dependency version → supporting project versions.
///
/// Rows iterate in descending *string* order of the dependency version, so
/// `"0.9"` comes before `"0.10"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionTable {
    rows: BTreeMap<String, Vec<String>>,
}

impl VersionTable {
    /// Parses body rows of the form `|key|label, label, ...|`.
    ///
    /// Labels are trimmed; a cell with no text between commas stays an empty
    /// label so untouched rows render back as they were. A repeated key
    /// replaces the earlier row.
    pub fn parse(body: &str) -> Self {
        let mut rows = BTreeMap::new();

        for line in body.lines() {
            let Some((key, labels)) = split_row(line) else {
                continue;
            };

            let labels: Vec<String> = labels
                .split(',')
                .map(|label| label.trim().to_string())
                .collect();

            if rows.insert(key.to_string(), labels).is_some() {
                log::debug!("Duplicate row for {}, keeping the last one", key);
            }
        }

        Self { rows }
    }

    /// Removes every `main` label from every row.
    pub fn strip_main(&mut self) {
        for labels in self.rows.values_mut() {
            labels.retain(|label| label != MAIN);
        }
    }

    /// Appends `project` and a fresh `main` label to the `dependency` row,
    /// creating the row if needed.
    pub fn record(&mut self, dependency: &str, project: &str) {
        let labels = self.rows.entry(dependency.to_string()).or_default();
        labels.push(project.to_string());
        labels.push(MAIN.to_string());
    }

    /// Rows in output order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rows
            .iter()
            .rev()
            .map(|(key, labels)| (key.as_str(), labels.as_slice()))
    }

    pub(crate) fn labels(&self, dependency: &str) -> Option<&[String]> {
        self.rows.get(dependency).map(Vec::as_slice)
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Renders the body as markdown rows, each terminated by `\n`.
    pub fn render(&self) -> String {
        self.rows()
            .map(|(key, labels)| format!("|{}|{}|\n", key, labels.join(", ")))
            .collect()
    }
}

impl fmt::Display for VersionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, labels) in self.rows() {
            writeln!(f, "  {} → {}", key, labels.join(", "))?;
        }
        Ok(())
    }
}

/// Byte ranges of a located table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpan {
    /// Header and separator lines, including their line endings.
    pub header: Range<usize>,
    /// Body rows directly after the separator.
    pub body: Range<usize>,
}

/// Finds the first table headed `| <dependency> | <plugin_name> |`.
///
/// Spaces inside header cells, trailing whitespace and both `\n` and
/// `\r\n` line endings are accepted. The body extends over the consecutive
/// lines that look like two-cell rows.
pub fn locate(content: &str, dependency: &str, plugin_name: &str) -> Result<Option<TableSpan>> {
    let header = Regex::new(&format!(
        r"(?m)^\| *{} *\| *{} *\|[ \t]*\r?\n\|-+\|-+\|[ \t]*\r?\n",
        regex::escape(dependency),
        regex::escape(plugin_name)
    ))?;

    let Some(found) = header.find(content) else {
        return Ok(None);
    };

    let mut body_end = found.end();
    for line in content[found.end()..].split_inclusive('\n') {
        if split_row(line).is_none() {
            break;
        }
        body_end += line.len();
    }

    Ok(Some(TableSpan {
        header: found.range(),
        body: found.end()..body_end,
    }))
}

/// Splits `|key|labels|` into its first two cells. Extra cells are ignored.
fn split_row(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_end();
    if !line.starts_with('|') || !line.ends_with('|') {
        return None;
    }

    let mut cells = line.split('|').skip(1);
    let key = cells.next()?.trim();
    let labels = cells.next()?;
    // The closing pipe must still be ahead of us
    cells.next()?;

    Some((key, labels))
}

/// Outcome of a table update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableUpdate {
    /// Table rewritten; holds the new rows.
    Updated(VersionTable),
    /// No matching header in the document. Nothing was staged.
    NotFound,
}

/// Rewrites the version support table in `readme_path` for `versions`.
///
/// `versions.project` is recorded as-is, so callers pass the release line
/// to publish (for example `"0.6"`), not the raw manifest version.
///
/// The new document is staged in `txn`; nothing is written until the
/// transaction is committed.
///
/// # Errors
///
/// - `Io`: Cannot read the document
/// - `Regex`: Header pattern failed to compile (indicates bug)
pub fn update_version_table(
    readme_path: &Path,
    versions: &VersionPair,
    dependency: &str,
    plugin_name: &str,
    txn: &mut Transaction,
) -> Result<TableUpdate> {
    let content = fs::read_to_string(readme_path)?;

    let Some(span) = locate(&content, dependency, plugin_name)? else {
        log::warn!(
            "No '| {} | {} |' table in {}",
            dependency,
            plugin_name,
            readme_path.display()
        );
        println!(
            "{} {}",
            "Version support table not found in".yellow(),
            readme_path.display().to_string().yellow().bold()
        );
        return Ok(TableUpdate::NotFound);
    };

    let mut table = VersionTable::parse(&content[span.body.clone()]);
    log::debug!("Parsed {} existing row(s)", table.len());

    table.strip_main();
    table.record(&versions.dependency, &versions.project);

    let mut updated = String::with_capacity(content.len() + 32);
    updated.push_str(&content[..span.body.start]);
    updated.push_str(&table.render());
    updated.push_str(&content[span.body.end..]);

    txn.update_file(readme_path.to_path_buf(), updated)?;

    Ok(TableUpdate::Updated(table))
}
