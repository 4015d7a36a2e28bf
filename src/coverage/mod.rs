//! Coverage result model and loaders.
//!
//! The reporter only needs a [`CoverageResult`]; where it comes from is the
//! coverage engine's business. Two on-disk formats are understood:
//!
//! - [`lcov`] - LCOV tracefiles (`SF:`/`DA:` records)
//! - [`simplecov`] - SimpleCov `.resultset.json` dumps
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use covconsole::coverage::{load_coverage, InputFormat};
//!
//! let result = load_coverage(Path::new("coverage/lcov.info"), InputFormat::Auto)?;
//! println!("{:.2}% of {} lines", result.covered_percent, result.total_lines);
//! ```

pub mod lcov;
pub mod simplecov;
pub mod types;

pub use self::lcov::{parse_lcov_file, parse_lcov_reader};
pub use self::simplecov::{parse_resultset_file, parse_resultset_str};
pub use self::types::{CoverageResult, SourceFile, SourceLine};

use crate::errors::Result;
use clap::ValueEnum;
use std::path::Path;

/// On-disk format of a coverage file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Pick by extension: `.json` is SimpleCov, anything else LCOV
    #[default]
    Auto,
    /// LCOV tracefile
    Lcov,
    /// SimpleCov .resultset.json
    Simplecov,
}

impl InputFormat {
    /// Resolve `Auto` against a concrete path.
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_json = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json {
                    Self::Simplecov
                } else {
                    Self::Lcov
                }
            }
            other => other,
        }
    }
}

/// Load a coverage result from disk.
pub fn load_coverage(path: &Path, format: InputFormat) -> Result<CoverageResult> {
    let format = format.resolve(path);
    log::info!("Loading {:?} coverage from {}", format, path.display());

    match format {
        InputFormat::Simplecov => parse_resultset_file(path),
        InputFormat::Lcov | InputFormat::Auto => parse_lcov_file(path),
    }
}
