//! ASCII table rendering for report rows.
//!
//! Coverage cells carry the same colorized text as the summary header.
//! Widths are measured without ANSI escapes (`custom_styling`), so colored
//! and plain tables line up identically.

use super::colorize::{colorize_percentage, format_percentage};
use super::ReportRow;
use comfy_table::{presets, Cell, Table, TableComponent};

pub const HEADERS: [&str; 5] = ["coverage", "file", "lines", "missed", "missing"];

fn coverage_cell(percent: f64, use_color: bool) -> Cell {
    if use_color {
        Cell::new(colorize_percentage(percent))
    } else {
        Cell::new(format_percentage(percent))
    }
}

fn row_cells(row: &ReportRow, use_color: bool) -> Vec<Cell> {
    vec![
        coverage_cell(row.coverage, use_color),
        Cell::new(&row.file),
        Cell::new(row.lines),
        Cell::new(row.missed),
        Cell::new(&row.missing),
    ]
}

/// Build the table for the given rows.
pub fn build_table(rows: &[ReportRow], use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL_CONDENSED)
        .set_style(TableComponent::HeaderLines, '-')
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_header(HEADERS.to_vec())
        .force_no_tty();

    for row in rows {
        table.add_row(row_cells(row, use_color));
    }
    table
}

/// Render rows to text, one line per table line, no trailing newline.
pub fn render_table(rows: &[ReportRow], use_color: bool) -> String {
    build_table(rows, use_color).to_string()
}
