use crate::{errors::TriageError, Settings};
use anyhow::Context;
use log::{debug, trace};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const CONFIG_DIR: &str = "booktriage";
const SETTINGS_FILE: &str = "settings.json";
const REPORT_FILE: &str = "bookmarks.json";

/// A configuration for running booktriage.
#[derive(Debug, PartialEq, Default)]
pub struct Config {
    /// The path of the settings file.
    pub settings_path: PathBuf,
    /// The default path of the import report.
    pub report_path: PathBuf,
    /// The configured settings.
    pub settings: Settings,
}

impl Config {
    pub fn new(settings_path: &Path, report_path: &Path, settings: Settings) -> Self {
        Self {
            settings_path: settings_path.to_owned(),
            report_path: report_path.to_owned(),
            settings,
        }
    }

    /// Initialize the config in `BOOKTRIAGE_HOME`, or in the config directory of
    /// the user.
    pub fn init() -> Result<Config, anyhow::Error> {
        let config_path = if let Ok(booktriage_home) = env::var("BOOKTRIAGE_HOME") {
            PathBuf::from(booktriage_home)
        } else if let Some(config_path) = dirs::config_dir() {
            config_path.join(CONFIG_DIR)
        } else {
            return Err(TriageError::MissingConfigDir.into());
        };

        Self::init_at(&config_path)
    }

    pub fn init_at(config_path: &Path) -> Result<Config, anyhow::Error> {
        let settings_path = config_path.join(SETTINGS_FILE);
        let report_path = config_path.join(REPORT_FILE);

        if !config_path.exists() {
            debug!("Create config at {}", config_path.display());
            fs::create_dir_all(config_path).context(format!(
                "Can't create config directory: {}",
                config_path.display()
            ))?;
        }

        debug!("Reading config from {}", settings_path.display());
        let settings = Settings::init(&settings_path)?;
        let config = Config::new(&settings_path, &report_path, settings);

        trace!("Config: {:#?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_at() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("booktriage");

        let res = Config::init_at(&config_path);
        assert!(res.is_ok(), "Can't init config: {}", res.unwrap_err());

        let config = res.unwrap();
        assert_eq!(
            config,
            Config {
                settings_path: config_path.join("settings.json"),
                report_path: config_path.join("bookmarks.json"),
                settings: Settings::default(),
            }
        );
        assert!(config.settings_path.exists());
    }
}
