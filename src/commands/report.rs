use crate::cli::ReportArgs;
use crate::config::resolve_config;
use crate::coverage::load_coverage;
use crate::formatting::resolve_color;
use crate::report::Reporter;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Load the coverage file, resolve configuration and print the report.
pub fn handle_report(args: ReportArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), args.overrides())
        .context("Failed to load configuration")?;

    let result = load_coverage(&args.coverage_file, args.format).with_context(|| {
        format!(
            "Failed to load coverage from {}",
            args.coverage_file.display()
        )
    })?;
    log::info!(
        "Loaded {} files, {} / {} lines covered",
        result.file_count(),
        result.covered_lines,
        result.total_lines
    );

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine project root")?,
    };

    let use_color = resolve_color(args.color);
    Reporter::new(&config)
        .with_root(resolve_root(root))
        .with_color(use_color)
        .print(&result)
        .context("Failed to write report")
}

// Canonicalize when possible so relative --root values still match absolute paths
fn resolve_root(root: PathBuf) -> PathBuf {
    root.canonicalize().unwrap_or(root)
}
