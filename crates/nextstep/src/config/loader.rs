use std::path::{Path, PathBuf};

use crate::config::schema::{Config, StoreConfig, CONFIG_VERSION};
use crate::error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "NEXTSTEP_CONFIG";

const CONFIG_FILE_NAME: &str = "config.json";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    for (name, value) in [
        ("records_file", &config.records_file),
        ("jobs_folder", &config.jobs_folder),
        ("duplicate_suffix", &config.duplicate_suffix),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: format!("'{}' must not be empty", name),
            });
        }
    }

    if config.duplicate_suffix.contains(['/', '\\']) {
        return Err(ConfigError::Validation {
            message: "'duplicate_suffix' must not contain path separators".to_string(),
        });
    }

    Ok(())
}

/// `<platform config dir>/nextstep/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nextstep").join(CONFIG_FILE_NAME))
}

/// Picks the configuration to use and resolves its paths.
///
/// Order: `explicit`, then the `NEXTSTEP_CONFIG` environment variable, then
/// the platform default file if it exists. Relative paths in a config file
/// resolve against the file's directory. Without any file the defaults are
/// used relative to the working directory.
pub fn resolve_config(explicit: Option<&Path>) -> Result<StoreConfig, ConfigError> {
    let chosen = explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    });

    let path = match chosen {
        Some(path) => Some(path),
        None => default_config_path().filter(|path| path.is_file()),
    };

    match path {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            let config = load_config(&path)?;
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            Ok(config.resolve(base))
        }
        None => {
            log::debug!("No config file, using defaults in the working directory");
            Ok(Config::default().resolve(Path::new("")))
        }
    }
}

/// Writes a default config file. An existing file is left alone.
pub fn write_default_config(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        return Err(ConfigError::Validation {
            message: format!("Config file already exists: {}", path.display()),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let config = Config::default();
    let json = serde_json::to_string_pretty(&config)?;
    std::fs::write(path, json).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(config)
}
