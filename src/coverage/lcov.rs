//! LCOV tracefile loading.
//!
//! The reader loop is the imperative shell; each record is dispatched to a
//! small handler that mutates [`LcovParserState`]. Only `SF`, `DA` and
//! `end_of_record` matter for a line-coverage summary, every other record
//! type is skipped.
//!
//! Repeated `DA` records for one line and repeated `SF` blocks for one path
//! (as produced by `lcov -a` merges or per-test sections) are summed.

use super::types::{CoverageResult, SourceFile, SourceLine};
use crate::errors::{Error, Result};
use ::lcov::{Reader, Record};
use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Mutable state while reading a tracefile.
#[derive(Debug, Default)]
pub(crate) struct LcovParserState {
    /// Files in first-seen order with their line hits
    files: Vec<(PathBuf, BTreeMap<u32, u64>)>,
    /// Path -> position in `files`
    index: HashMap<PathBuf, usize>,
    /// File the current `DA` records belong to
    current: Option<usize>,
    /// Line records seen outside any `SF` block
    orphan_lines: usize,
    /// Completed `end_of_record` blocks
    record_count: usize,
}

impl LcovParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert accumulated data into source files, lines ascending.
    pub fn into_source_files(self) -> Vec<SourceFile> {
        self.files
            .into_iter()
            .map(|(path, hits)| {
                let lines = hits
                    .into_iter()
                    .map(|(line, count)| SourceLine::new(line, count))
                    .collect();
                SourceFile::from_lines(path.to_string_lossy(), lines)
            })
            .collect()
    }
}

/// Handle SF: start (or resume) a file block.
pub(crate) fn handle_source_file(state: &mut LcovParserState, path: PathBuf) {
    let next = state.files.len();
    let idx = *state.index.entry(path.clone()).or_insert(next);
    if idx == next {
        state.files.push((path, BTreeMap::new()));
    }
    state.current = Some(idx);
}

/// Handle DA: add hits for a line of the current file.
pub(crate) fn handle_line_data(state: &mut LcovParserState, line: u32, count: u64) {
    match state.current {
        Some(idx) => {
            let hits = state.files[idx].1.entry(line).or_insert(0);
            *hits = hits.saturating_add(count);
        }
        None => state.orphan_lines += 1,
    }
}

/// Handle end_of_record: close the current file block.
pub(crate) fn handle_end_of_record(state: &mut LcovParserState) {
    state.current = None;
    state.record_count += 1;
}

/// Parse an LCOV tracefile from disk.
pub fn parse_lcov_file(path: &Path) -> Result<CoverageResult> {
    let reader = Reader::open_file(path).map_err(|e| Error::io(path, e))?;
    parse_lcov_records(reader, path)
}

/// Parse LCOV data from any buffered reader.
///
/// `source` is only used for error messages and logging.
pub fn parse_lcov_reader<B: BufRead>(input: B, source: &Path) -> Result<CoverageResult> {
    parse_lcov_records(Reader::new(input), source)
}

fn parse_lcov_records<B: BufRead>(reader: Reader<B>, source: &Path) -> Result<CoverageResult> {
    let mut state = LcovParserState::new();

    for record in reader {
        let record = record.map_err(|e| Error::lcov(source, e.to_string()))?;

        match record {
            Record::SourceFile { path } => handle_source_file(&mut state, path),
            Record::LineData { line, count, .. } => handle_line_data(&mut state, line, count),
            Record::EndOfRecord => handle_end_of_record(&mut state),
            _ => {} // Ignore function, branch and summary records
        }
    }

    if state.orphan_lines > 0 {
        log::warn!(
            "Ignored {} line records outside of any SF block in {}",
            state.orphan_lines,
            source.display()
        );
    }
    log::debug!(
        "Read {} files ({} records) from {}",
        state.files.len(),
        state.record_count,
        source.display()
    );

    Ok(CoverageResult::from_files(state.into_source_files()))
}
