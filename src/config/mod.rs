//! Reporter configuration.
//!
//! Settings are layered: built-in defaults, then a `.covconsole.toml`
//! (explicit `--config` path or discovered from the working directory
//! upwards, then the user config directory), then CLI flags. Each layer is a
//! [`ConfigOverrides`] and only replaces the keys it actually sets.

mod core;
mod loader;

pub use self::core::{
    ConfigOverrides, CovconsoleConfig, FullyCoveredFilter, ReporterConfig, DEFAULT_LIMIT,
};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    user_config_path, CONFIG_FILE_NAME,
};

use crate::errors::Result;
use std::path::Path;

/// Build the effective reporter config from a config file and CLI overrides.
///
/// With `config_path` set the file must load; otherwise discovery is
/// best-effort and falls back to defaults.
pub fn resolve_config(
    config_path: Option<&Path>,
    cli_overrides: ConfigOverrides,
) -> Result<ReporterConfig> {
    let file_config = match config_path {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };

    let config = ReporterConfig::default()
        .merged(file_config.report)
        .merged(cli_overrides);
    log::debug!("Effective reporter config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OrderMethod;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_overrides_win_over_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[report]\norder = \"filename\"\nlimit = 30\nfully_covered = \"all\"\n",
        )
        .unwrap();

        let config = resolve_config(
            Some(&path),
            ConfigOverrides {
                limit: Some(2),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.order, OrderMethod::Filename);
        assert_eq!(config.limit, Some(2));
        assert_eq!(config.fully_covered, FullyCoveredFilter::All);
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = TempDir::new().unwrap();
        let result = resolve_config(Some(&dir.path().join("nope.toml")), Default::default());
        assert!(result.is_err());
    }
}
