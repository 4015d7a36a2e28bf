//! Core data types for coverage results.
//!
//! These mirror what a coverage engine hands to a formatter: an aggregate
//! result with totals, and per-file line hit data. All types are plain data;
//! the reporter reads them but never recomputes or validates the engine's
//! numbers.

use serde::{Deserialize, Serialize};

/// Percentage reported for a file (or result) that has no relevant lines.
pub const EMPTY_COVERAGE_PERCENT: f64 = 100.0;

/// A single relevant (executable) line and its hit count.
///
/// A line with `hits == 0` is a missed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    /// 1-based line number
    pub line_number: u32,
    /// Number of times the line executed
    pub hits: u64,
}

impl SourceLine {
    pub fn new(line_number: u32, hits: u64) -> Self {
        Self { line_number, hits }
    }

    pub fn is_missed(&self) -> bool {
        self.hits == 0
    }
}

/// Coverage data for one analyzed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path as reported by the coverage engine (usually absolute)
    pub filename: String,
    /// Percentage of relevant lines covered (0.0 to 100.0)
    pub covered_percent: f64,
    /// Number of relevant lines
    pub lines_of_code: usize,
    /// Relevant lines in engine order (loaders emit them ascending)
    pub lines: Vec<SourceLine>,
}

impl SourceFile {
    /// Build a file from its relevant lines, deriving LOC and percentage.
    ///
    /// A file without relevant lines counts as fully covered.
    pub fn from_lines(filename: impl Into<String>, lines: Vec<SourceLine>) -> Self {
        let lines_of_code = lines.len();
        let covered = lines.iter().filter(|l| !l.is_missed()).count();
        Self {
            filename: filename.into(),
            covered_percent: percent(covered, lines_of_code),
            lines_of_code,
            lines,
        }
    }

    /// Lines with zero hits, in stored order.
    pub fn missed_lines(&self) -> impl Iterator<Item = &SourceLine> + '_ {
        self.lines.iter().filter(|l| l.is_missed())
    }

    pub fn missed_count(&self) -> usize {
        self.missed_lines().count()
    }

    pub fn covered_lines(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_missed()).count()
    }

    pub fn is_fully_covered(&self) -> bool {
        self.covered_percent == 100.0
    }
}

/// Aggregate coverage result handed to the reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    /// Overall percentage of relevant lines covered (0.0 to 100.0)
    pub covered_percent: f64,
    /// Relevant lines with at least one hit
    pub covered_lines: usize,
    /// All relevant lines
    pub total_lines: usize,
    /// Analyzed files in engine order
    pub source_files: Vec<SourceFile>,
}

impl Default for CoverageResult {
    fn default() -> Self {
        Self::from_files(Vec::new())
    }
}

impl CoverageResult {
    /// Build a result by summing the per-file line data.
    pub fn from_files(source_files: Vec<SourceFile>) -> Self {
        let (covered_lines, total_lines) = source_files
            .iter()
            .fold((0, 0), |(covered, total), file| {
                (covered + file.covered_lines(), total + file.lines.len())
            });

        Self {
            covered_percent: percent(covered_lines, total_lines),
            covered_lines,
            total_lines,
            source_files,
        }
    }

    pub fn file_count(&self) -> usize {
        self.source_files.len()
    }
}

// Pure function: covered / total as a percentage
fn percent(covered: usize, total: usize) -> f64 {
    if total == 0 {
        EMPTY_COVERAGE_PERCENT
    } else {
        covered as f64 / total as f64 * 100.0
    }
}
