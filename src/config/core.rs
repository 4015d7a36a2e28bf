use crate::report::OrderMethod;
use serde::{Deserialize, Serialize};

/// Rows shown in the table when no limit is configured
pub const DEFAULT_LIMIT: usize = 15;

/// Which fully covered (100%) files are left out of the table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FullyCoveredFilter {
    /// Hide only the first 100% file met after ordering
    #[default]
    FirstOnly,
    /// Hide every 100% file
    All,
}

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReporterConfig {
    /// File ordering applied before partitioning and truncation
    pub order: OrderMethod,
    /// Maximum table rows, `None` for no limit
    pub limit: Option<usize>,
    /// Fully covered file handling
    pub fully_covered: FullyCoveredFilter,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            order: OrderMethod::default(),
            limit: Some(DEFAULT_LIMIT),
            fully_covered: FullyCoveredFilter::default(),
        }
    }
}

impl ReporterConfig {
    /// Apply overrides; keys that are not supplied keep their current value.
    pub fn merge(&mut self, overrides: ConfigOverrides) -> &mut Self {
        if let Some(order) = overrides.order {
            self.order = order;
        }
        if let Some(limit) = overrides.limit {
            self.limit = limit_from_setting(limit);
        }
        if let Some(fully_covered) = overrides.fully_covered {
            self.fully_covered = fully_covered;
        }
        self
    }

    /// Consuming variant of [`merge`](Self::merge) for call chains.
    pub fn merged(mut self, overrides: ConfigOverrides) -> Self {
        self.merge(overrides);
        self
    }

    pub fn with_order(mut self, order: OrderMethod) -> Self {
        self.order = order;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.and_then(limit_from_setting);
        self
    }

    pub fn with_fully_covered(mut self, fully_covered: FullyCoveredFilter) -> Self {
        self.fully_covered = fully_covered;
        self
    }
}

// Pure function: a zero limit disables truncation
fn limit_from_setting(limit: usize) -> Option<usize> {
    (limit > 0).then_some(limit)
}

/// Partial configuration, e.g. one config file or the CLI flags.
///
/// `limit = 0` means "no limit".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_covered: Option<FullyCoveredFilter>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.order.is_none() && self.limit.is_none() && self.fully_covered.is_none()
    }
}

/// Root of a `.covconsole.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CovconsoleConfig {
    /// Report settings
    #[serde(default)]
    pub report: ConfigOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReporterConfig::default();
        assert_eq!(config.order, OrderMethod::AscendingByCoverage);
        assert_eq!(config.limit, Some(15));
        assert_eq!(config.fully_covered, FullyCoveredFilter::FirstOnly);
    }

    #[test]
    fn test_merge_limit_keeps_order() {
        let mut config = ReporterConfig::default();
        config.merge(ConfigOverrides {
            limit: Some(5),
            ..Default::default()
        });
        assert_eq!(config.limit, Some(5));
        assert_eq!(config.order, OrderMethod::AscendingByCoverage);
    }

    #[test]
    fn test_later_merges_override_only_supplied_keys() {
        let config = ReporterConfig::default()
            .merged(ConfigOverrides {
                order: Some(OrderMethod::Filename),
                limit: Some(3),
                ..Default::default()
            })
            .merged(ConfigOverrides {
                limit: Some(7),
                ..Default::default()
            });
        assert_eq!(config.order, OrderMethod::Filename);
        assert_eq!(config.limit, Some(7));
    }

    #[test]
    fn test_zero_limit_disables_truncation() {
        let config = ReporterConfig::default().merged(ConfigOverrides {
            limit: Some(0),
            ..Default::default()
        });
        assert_eq!(config.limit, None);
        assert_eq!(ReporterConfig::default().with_limit(Some(0)).limit, None);
        assert_eq!(ReporterConfig::default().with_limit(None).limit, None);
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let overrides = ConfigOverrides::default();
        assert!(overrides.is_empty());
        let config = ReporterConfig::default().merged(overrides);
        assert_eq!(config, ReporterConfig::default());
    }

    #[test]
    fn test_builder_helpers() {
        let config = ReporterConfig::default()
            .with_order(OrderMethod::MostMissed)
            .with_limit(Some(2))
            .with_fully_covered(FullyCoveredFilter::All);
        assert_eq!(config.order, OrderMethod::MostMissed);
        assert_eq!(config.limit, Some(2));
        assert_eq!(config.fully_covered, FullyCoveredFilter::All);
    }
}
