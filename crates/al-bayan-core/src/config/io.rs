use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads `path` and returns the parsed configuration, or defaults when the
/// file is missing or malformed.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let tables: ConfigTables = toml::from_str(contents)?;
    Ok(AppConfig::from(tables).sanitized())
}
