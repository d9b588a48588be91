use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::AppConfig;

const CONFIG_PATH_ENV: &str = "VANTA_CONFIG";

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AppConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    fn new(config: AppConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (AppConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    load_config_from_path(&config_path())
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let mut config = match serde_json::from_str::<AppConfig>(&data) {
        Ok(config) => config,
        Err(err) => {
            let err = ConfigError::from(err);
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    match config.validate() {
        Ok(()) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => {
            config.clear_start_section();
            Ok(ConfigLoad::new(
                config,
                ConfigLoadStatus::Invalid(format!("{err}")),
            ))
        },
    }
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("vanta")
            .join("config.json");
    }

    std::env::temp_dir().join("vanta").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{ConfigLoadStatus, load_config_from_path};
    use crate::config::model::AppConfig;

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("config.json");

        let loaded = load_config_from_path(&path)
            .expect("missing config should not be an io error");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Missing));
        assert_eq!(config, AppConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_partial_json_when_load_then_missing_fields_use_defaults() {
        let root = test_temp_dir("partial");
        let path = root.join("config.json");
        fs::write(
            &path,
            r#"{ "start_section": "protection", "toast_duration_ms": 1500 }"#,
        )
        .expect("test payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("config should load")
            .into_parts();

        assert!(matches!(status, ConfigLoadStatus::Loaded));
        assert_eq!(config.start_section(), Some("protection"));
        assert_eq!(config.toast_duration(), Duration::from_millis(1500));
        assert_eq!(
            config.window_width(),
            AppConfig::default().window_width()
        );

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("config.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("loading invalid config should not fail with io error")
            .into_parts();

        assert_eq!(config, AppConfig::default());
        assert!(matches!(status, ConfigLoadStatus::Invalid(_)));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unknown_start_section_when_load_then_drops_it_and_reports_invalid()
    {
        let root = test_temp_dir("bad_section");
        let path = root.join("config.json");
        fs::write(&path, r#"{ "start_section": "reports" }"#)
            .expect("test payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("config should load")
            .into_parts();

        assert_eq!(config.start_section(), None);
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(message.contains("reports"))
            },
            other => panic!("unexpected status: {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        let root = std::env::temp_dir().join(format!(
            "vanta-config-{label}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&root)
            .expect("temporary directory should be created");
        root
    }
}
