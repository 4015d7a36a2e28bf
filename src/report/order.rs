//! File ordering strategies for the coverage table.

use crate::coverage::SourceFile;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

type CompareFn = dyn Fn(&SourceFile, &SourceFile) -> Ordering + Send + Sync;

/// User-supplied comparator for [`OrderMethod::Custom`].
#[derive(Clone)]
pub struct Comparator(Arc<CompareFn>);

impl Comparator {
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&SourceFile, &SourceFile) -> Ordering + Send + Sync + 'static,
    {
        Self(Arc::new(compare))
    }

    fn compare(&self, a: &SourceFile, b: &SourceFile) -> Ordering {
        (self.0)(a, b)
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Comparator(..)")
    }
}

/// How files are ordered before the table is built.
///
/// All orderings are stable: ties keep the coverage engine's order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderMethod {
    /// Lowest coverage first
    #[default]
    AscendingByCoverage,
    /// Highest coverage first
    DescendingByCoverage,
    /// Alphabetical by filename
    Filename,
    /// Most missed lines first
    MostMissed,
    /// Arbitrary comparator, library use only
    #[serde(skip)]
    Custom(Comparator),
}

impl OrderMethod {
    pub const NAMES: [&'static str; 4] = [
        "ascending-by-coverage",
        "descending-by-coverage",
        "filename",
        "most-missed",
    ];

    pub fn custom<F>(compare: F) -> Self
    where
        F: Fn(&SourceFile, &SourceFile) -> Ordering + Send + Sync + 'static,
    {
        Self::Custom(Comparator::new(compare))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AscendingByCoverage => Self::NAMES[0],
            Self::DescendingByCoverage => Self::NAMES[1],
            Self::Filename => Self::NAMES[2],
            Self::MostMissed => Self::NAMES[3],
            Self::Custom(_) => "custom",
        }
    }

    fn compare(&self, a: &SourceFile, b: &SourceFile) -> Ordering {
        match self {
            Self::AscendingByCoverage => a.covered_percent.total_cmp(&b.covered_percent),
            Self::DescendingByCoverage => b.covered_percent.total_cmp(&a.covered_percent),
            Self::Filename => a.filename.cmp(&b.filename),
            Self::MostMissed => b.missed_count().cmp(&a.missed_count()),
            Self::Custom(comparator) => comparator.compare(a, b),
        }
    }

    /// Return the files in display order without touching the input.
    pub fn apply<'a>(&self, files: &'a [SourceFile]) -> Vec<&'a SourceFile> {
        let mut ordered: Vec<&SourceFile> = files.iter().collect();
        ordered.sort_by(|a, b| self.compare(a, b));
        ordered
    }
}

impl PartialEq for OrderMethod {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(&a.0, &b.0),
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

impl FromStr for OrderMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "ascending-by-coverage" | "ascending" => Ok(Self::AscendingByCoverage),
            "descending-by-coverage" | "descending" => Ok(Self::DescendingByCoverage),
            "filename" => Ok(Self::Filename),
            "most-missed" => Ok(Self::MostMissed),
            other => Err(format!(
                "unknown order method '{}' (expected one of: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for OrderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
