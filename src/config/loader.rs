use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CovconsoleConfig;
use crate::errors::{Error, Result};

/// Project-level config file name
pub const CONFIG_FILE_NAME: &str = ".covconsole.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<CovconsoleConfig, String> {
    toml::from_str::<CovconsoleConfig>(contents).map_err(|e| e.to_string())
}

/// Load a config file the user pointed at explicitly. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<CovconsoleConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config(&contents).map_err(|e| Error::config(path, e))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file; problems are logged, not fatal.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CovconsoleConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// User-level config location, e.g. `~/.config/covconsole/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("covconsole").join("config.toml"))
}

/// Search `start` and its ancestors, then the user config directory.
pub fn discover_config(start: PathBuf) -> Option<(PathBuf, CovconsoleConfig)> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path).map(|config| (path, config)))
}

/// Load the project config starting from the current directory.
pub fn load_config() -> CovconsoleConfig {
    // Get current directory or return default
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return CovconsoleConfig::default();
        }
    };

    discover_config(current)
        .map(|(_, config)| config)
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CovconsoleConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FullyCoveredFilter;
    use crate::report::OrderMethod;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(indoc! {r#"
            [report]
            order = "most-missed"
            limit = 25
            fully_covered = "all"
        "#})
        .unwrap();

        assert_eq!(config.report.order, Some(OrderMethod::MostMissed));
        assert_eq!(config.report.limit, Some(25));
        assert_eq!(config.report.fully_covered, Some(FullyCoveredFilter::All));
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("[report]\nlimit = 3\n").unwrap();
        assert_eq!(config.report.limit, Some(3));
        assert!(config.report.order.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.report.is_empty());
    }

    #[test]
    fn test_invalid_order_is_rejected() {
        let err = parse_config("[report]\norder = \"sideways\"\n").unwrap_err();
        assert!(err.contains("sideways") || err.contains("variant"), "{}", err);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(parse_config("[report]\nlimt = 3\n").is_err());
    }

    #[test]
    fn test_directory_ancestors() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
        assert_eq!(directory_ancestors(PathBuf::from("/a/b/c"), 2).count(), 2);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[report]\nlimit = 4\n").unwrap();

        let (path, config) = discover_config(nested).unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(config.report.limit, Some(4));
    }

    #[test]
    fn test_discover_skips_invalid_file() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[report]\nlimit = 9\n").unwrap();

        let (path, config) = discover_config(nested).unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(config.report.limit, Some(9));
    }

    #[test]
    fn test_load_config_from_path_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            load_config_from_path(&missing),
            Err(Error::Io { .. })
        ));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[report]\nlimit = \"many\"\n").unwrap();
        assert!(matches!(
            load_config_from_path(&bad),
            Err(Error::Config { .. })
        ));
    }
}
