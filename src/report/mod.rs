//! Terminal coverage report.
//!
//! Rendering is split into a pure model-building step and a writing step:
//!
//! ```text
//! CoverageResult
//!     -> order files            (ReporterConfig::order)
//!     -> drop fully covered     (ReporterConfig::fully_covered)
//!     -> project rows           (percent, LOC, relative path, missed ranges)
//!     -> truncate               (ReporterConfig::limit)
//!     = Report
//!     -> header, notice, table, trailing count  (write_report)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use covconsole::config::ReporterConfig;
//! use covconsole::report::Reporter;
//!
//! let config = ReporterConfig::default().with_limit(Some(10));
//! Reporter::new(&config).with_root("/my/project").print(&result)?;
//! ```

pub mod colorize;
pub mod grouping;
pub mod order;
pub mod table;

pub use colorize::{colorize_percentage, format_percentage, CoverageLevel};
pub use grouping::{group_line_ranges, group_missed_lines, LineRange};
pub use order::{Comparator, OrderMethod};
pub use table::render_table;

use crate::config::{FullyCoveredFilter, ReporterConfig};
use crate::coverage::{CoverageResult, SourceFile};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Covered percent of the file
    pub coverage: f64,
    /// Path relative to the project root
    pub file: String,
    /// Relevant lines
    pub lines: usize,
    /// Missed line count
    pub missed: usize,
    /// Missed ranges joined with ", "
    pub missing: String,
}

/// Everything the terminal output is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub covered_percent: f64,
    pub covered_lines: usize,
    pub total_lines: usize,
    pub file_count: usize,
    /// Rows to display, already truncated
    pub rows: Vec<ReportRow>,
    /// Row count before truncation
    pub table_size: usize,
    /// Set when rows were cut down to the limit
    pub truncated_to: Option<usize>,
    /// Fully covered files left out of the table
    pub hidden_fully_covered: usize,
}

/// Strip the project root and any leading `./` from a filename.
pub fn relative_filename(filename: &str, root: &Path) -> String {
    let stripped = Path::new(filename)
        .strip_prefix(root)
        .map(|rel| rel.to_string_lossy().into_owned())
        .unwrap_or_else(|_| filename.to_string());

    let mut rel = stripped.as_str();
    while let Some(rest) = rel.strip_prefix("./") {
        rel = rest;
    }
    rel.to_string()
}

/// Split off fully covered files according to `filter`.
///
/// Returns `(remaining, hidden)`, both in input order.
pub fn partition_fully_covered<'a>(
    files: Vec<&'a SourceFile>,
    filter: FullyCoveredFilter,
) -> (Vec<&'a SourceFile>, Vec<&'a SourceFile>) {
    match filter {
        FullyCoveredFilter::All => files.into_iter().partition(|f| !f.is_fully_covered()),
        FullyCoveredFilter::FirstOnly => {
            let mut remaining = files;
            let hidden = remaining
                .iter()
                .position(|f| f.is_fully_covered())
                .map(|idx| remaining.remove(idx))
                .into_iter()
                .collect();
            (remaining, hidden)
        }
    }
}

fn project_row(file: &SourceFile, root: &Path) -> ReportRow {
    let missed_numbers = file.missed_lines().map(|l| l.line_number);
    ReportRow {
        coverage: file.covered_percent,
        file: relative_filename(&file.filename, root),
        lines: file.lines_of_code,
        missed: file.missed_count(),
        missing: group_missed_lines(missed_numbers).join(", "),
    }
}

/// Renders coverage results to the terminal.
pub struct Reporter<'a> {
    config: &'a ReporterConfig,
    root: PathBuf,
    use_color: bool,
}

impl<'a> Reporter<'a> {
    /// Reporter rooted at the current directory, with colors on.
    pub fn new(config: &'a ReporterConfig) -> Self {
        Self {
            config,
            root: std::env::current_dir().unwrap_or_default(),
            use_color: true,
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Build the report model without any output.
    pub fn build(&self, result: &CoverageResult) -> Report {
        let ordered = self.config.order.apply(&result.source_files);
        let (remaining, hidden) = partition_fully_covered(ordered, self.config.fully_covered);

        let mut rows: Vec<ReportRow> = remaining
            .iter()
            .map(|file| project_row(file, &self.root))
            .collect();
        let table_size = rows.len();

        let truncated_to = match self.config.limit {
            Some(limit) if table_size > limit => {
                rows.truncate(limit);
                Some(limit)
            }
            _ => None,
        };

        Report {
            covered_percent: result.covered_percent,
            covered_lines: result.covered_lines,
            total_lines: result.total_lines,
            file_count: result.file_count(),
            rows,
            table_size,
            truncated_to,
            hidden_fully_covered: hidden.len(),
        }
    }

    fn percentage(&self, val: f64) -> String {
        if self.use_color {
            colorize_percentage(val)
        } else {
            format_percentage(val)
        }
    }

    /// Render the report into a string.
    pub fn render_to_string(&self, result: &CoverageResult) -> String {
        let report = self.build(result);

        let mut out = format!(
            "\nCOVERAGE: {} -- {} / {} LOC covered in {} files\n\n",
            self.percentage(report.covered_percent),
            report.covered_lines,
            report.total_lines,
            report.file_count
        );

        if report.rows.is_empty() {
            return out;
        }

        if let Some(limit) = report.truncated_to {
            out.push_str(&format!(
                "showing top {} of {} files\n",
                limit, report.table_size
            ));
        }

        out.push_str(&render_table(&report.rows, self.use_color));
        out.push('\n');

        if report.hidden_fully_covered > 0 {
            out.push_str(&format!(
                "{} file(s) with 100% coverage not shown\n",
                report.hidden_fully_covered
            ));
        }
        out
    }

    /// Write the full report to `out`.
    pub fn write_report<W: Write>(&self, result: &CoverageResult, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_to_string(result).as_bytes())
    }

    /// Write the report to stdout.
    pub fn print(&self, result: &CoverageResult) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(result, &mut out)?;
        out.flush()
    }
}
