//! SimpleCov `.resultset.json` loading.
//!
//! A resultset maps each test command name to its own coverage dump:
//!
//! ```json
//! { "RSpec": { "coverage": { "/app/lib/foo.rb": { "lines": [null, 1, 0] } },
//!              "timestamp": 1700000000 } }
//! ```
//!
//! Older SimpleCov versions store the hit array directly instead of the
//! `{ "lines": [...] }` object; both shapes are accepted. Array index `i`
//! is line `i + 1`, and `null` marks a line that is not relevant.

use super::types::{CoverageResult, SourceFile, SourceLine};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// One command's entry in the resultset. The `timestamp` is not needed.
#[derive(Debug, Deserialize)]
struct CommandResult {
    coverage: HashMap<String, FileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FileEntry {
    Detailed { lines: Vec<Option<u64>> },
    Legacy(Vec<Option<u64>>),
}

impl FileEntry {
    fn lines(&self) -> &[Option<u64>] {
        match self {
            Self::Detailed { lines } | Self::Legacy(lines) => lines,
        }
    }
}

/// Parse a resultset file from disk.
pub fn parse_resultset_file(path: &Path) -> Result<CoverageResult> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_resultset_str(&content, path)
}

/// Parse resultset JSON text.
///
/// `source` is only used for error messages and logging.
pub fn parse_resultset_str(content: &str, source: &Path) -> Result<CoverageResult> {
    let commands: HashMap<String, CommandResult> =
        serde_json::from_str(content).map_err(|e| Error::Json {
            path: source.to_path_buf(),
            source: e,
        })?;

    log::debug!(
        "Merging {} command result(s) from {}",
        commands.len(),
        source.display()
    );

    let merged = commands
        .values()
        .fold(BTreeMap::new(), |mut acc, command| {
            merge_command(&mut acc, command);
            acc
        });

    let files = merged
        .into_iter()
        .map(|(filename, hits)| SourceFile::from_lines(filename, relevant_lines(&hits)))
        .collect();

    Ok(CoverageResult::from_files(files))
}

// Sum one command's hit arrays into the merged map
fn merge_command(acc: &mut BTreeMap<String, Vec<Option<u64>>>, command: &CommandResult) {
    for (filename, entry) in &command.coverage {
        let merged = acc.entry(filename.clone()).or_default();
        merge_hits(merged, entry.lines());
    }
}

/// Merge two hit arrays: counts add up, `null` only survives where both are `null`.
pub(crate) fn merge_hits(into: &mut Vec<Option<u64>>, other: &[Option<u64>]) {
    if into.len() < other.len() {
        into.resize(other.len(), None);
    }
    for (slot, hits) in into.iter_mut().zip(other) {
        *slot = match (*slot, *hits) {
            (Some(a), Some(b)) => Some(a.saturating_add(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };
    }
}

// Drop irrelevant lines, numbering from 1
fn relevant_lines(hits: &[Option<u64>]) -> Vec<SourceLine> {
    hits.iter()
        .enumerate()
        .filter_map(|(idx, hits)| hits.map(|h| SourceLine::new(idx as u32 + 1, h)))
        .collect()
}
