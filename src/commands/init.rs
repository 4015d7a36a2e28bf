use crate::config::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# covconsole configuration

[report]
# ascending-by-coverage | descending-by-coverage | filename | most-missed
order = "ascending-by-coverage"

# Maximum files shown in the table, 0 shows all
limit = 15

# first-only | all
fully_covered = "first-only"
"#;

/// Write a default config file into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::ConfigExists(config_path));
    }

    fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| Error::io(&config_path, e))?;
    log::info!("Wrote {}", config_path.display());
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}
