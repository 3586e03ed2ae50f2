use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use addrbook_core::ImportMode;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "addrbook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub page_size: usize,
    pub birthday_window_days: u32,
    pub restore_emails: bool,
    pub data_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn import_mode(&self) -> ImportMode {
        if self.restore_emails {
            ImportMode::Full
        } else {
            ImportMode::Legacy
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            restore_emails: true,
            data_path: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid page_size value: {0}")]
    InvalidPageSize(usize),
    #[error("invalid birthday_window_days value: {0}")]
    InvalidBirthdayWindow(u32),
    #[error("invalid data_path value: {0}")]
    InvalidDataPath(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    page_size: Option<usize>,
    birthday_window_days: Option<u32>,
    restore_emails: Option<bool>,
    data_path: Option<PathBuf>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(page_size) = parsed.page_size {
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        config.page_size = page_size;
    }

    if let Some(days) = parsed.birthday_window_days {
        if days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidBirthdayWindow(days));
        }
        config.birthday_window_days = days;
    }

    if let Some(restore) = parsed.restore_emails {
        config.restore_emails = restore;
    }

    if let Some(path) = parsed.data_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDataPath(path));
        }
        config.data_path = Some(path);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, AppConfig, ConfigError, ConfigFile};
    use addrbook_core::ImportMode;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            page_size: Some(3),
            birthday_window_days: Some(14),
            restore_emails: Some(false),
            data_path: Some(PathBuf::from("/tmp/contacts.json")),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.page_size, 3);
        assert_eq!(merged.birthday_window_days, 14);
        assert_eq!(merged.import_mode(), ImportMode::Legacy);
        assert_eq!(merged.data_path, Some(PathBuf::from("/tmp/contacts.json")));
    }

    #[test]
    fn merge_config_defaults() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged, AppConfig::default());
        assert_eq!(merged.import_mode(), ImportMode::Full);
    }

    #[test]
    fn merge_config_rejects_zero_page_size() {
        let parsed = ConfigFile {
            page_size: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidPageSize(0))
        ));
    }

    #[test]
    fn merge_config_rejects_wide_birthday_window() {
        let parsed = ConfigFile {
            birthday_window_days: Some(400),
            ..Default::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidBirthdayWindow(400))
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "page_size = 5\nbirthday_window_days = 3\n").expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.birthday_window_days, 3);
        assert!(config.restore_emails);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 5\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
