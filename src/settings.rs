use crate::{
    bookmark_reader::ParseStrategy, bookmarks::BoundaryMarker, errors::TriageError, json, utils,
};
use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Optional settings configured via `ConfigArgs`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SettingsArgs {
    /// The url of the last keeper.
    pub marker_url: Option<String>,
    /// The folder of the last keeper.
    pub marker_folder: Option<String>,
    /// The strategy to parse bookmark exports.
    pub strategy: Option<ParseStrategy>,
}

impl SettingsArgs {
    pub fn new(
        marker_url: Option<String>,
        marker_folder: Option<String>,
        strategy: Option<ParseStrategy>,
    ) -> Self {
        Self {
            marker_url,
            marker_folder,
            strategy,
        }
    }
}

/// Describes the settings used in booktriage.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Settings {
    /// The bookmark which separates keepers from bookmarks to be categorized.
    #[serde(default)]
    pub marker: BoundaryMarker,
    /// The strategy to parse bookmark exports.
    #[serde(default)]
    pub strategy: ParseStrategy,
}

impl Settings {
    pub fn new(marker: BoundaryMarker, strategy: ParseStrategy) -> Self {
        Self { marker, strategy }
    }

    pub fn init(settings_path: &Path) -> Result<Settings, anyhow::Error> {
        if settings_path.exists() {
            debug!("Reading settings file at {}", settings_path.display());
            let buf = utils::read_file(settings_path)
                .context("Can't read `settings.json` file")?;
            let settings = json::deserialize::<Settings>(&buf)?;
            Ok(settings)
        } else {
            debug!("Create settings file at {}", settings_path.display());
            let settings = Settings::default();
            settings.write(settings_path)?;
            Ok(settings)
        }
    }

    pub fn write(&self, settings_path: &Path) -> Result<(), anyhow::Error> {
        let settings_json = json::serialize(self)?;
        utils::write_file(settings_path, &settings_json).context(format!(
            "Can't write `settings.json` file: {}",
            settings_path.display()
        ))?;
        Ok(())
    }

    pub fn set_marker_url(&mut self, marker_url: &str) -> Result<(), TriageError> {
        let url = Url::parse(marker_url)?;
        debug!("Set marker url to {url}");
        // Markers are compared verbatim.
        self.marker.url = marker_url.to_owned();
        Ok(())
    }

    pub fn set_marker_folder(&mut self, marker_folder: &str) -> Result<(), TriageError> {
        let marker_folder = marker_folder.trim();

        if marker_folder.is_empty() || marker_folder.contains('/') {
            return Err(TriageError::InvalidFolder(marker_folder.to_owned()));
        }

        debug!("Set marker folder to {marker_folder}");
        self.marker.folder = marker_folder.to_owned();
        Ok(())
    }

    pub fn set_strategy(&mut self, strategy: Option<ParseStrategy>) {
        if let Some(strategy) = strategy {
            debug!("Set parse strategy to {}", strategy);
            self.strategy = strategy;
        }
    }

    /// Apply the settings given in the CLI.
    pub fn apply(&mut self, args: SettingsArgs) -> Result<(), TriageError> {
        if let Some(marker_url) = &args.marker_url {
            self.set_marker_url(marker_url)?;
        }

        if let Some(marker_folder) = &args.marker_folder {
            self.set_marker_folder(marker_folder)?;
        }

        self.set_strategy(args.strategy);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{DEFAULT_MARKER_FOLDER, DEFAULT_MARKER_URL};
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_default() {
        let settings = Settings::default();
        assert_eq!(settings.marker.url, DEFAULT_MARKER_URL);
        assert_eq!(settings.marker.folder, DEFAULT_MARKER_FOLDER);
        assert_eq!(settings.strategy, ParseStrategy::Dom);
    }

    #[test]
    fn test_set_marker_url() {
        let mut settings = Settings::default();
        let res = settings.set_marker_url("https://example.com/end");
        assert!(res.is_ok(), "{}", res.unwrap_err());
        assert_eq!(settings.marker.url, "https://example.com/end");
    }

    #[test]
    fn test_set_marker_url_invalid() {
        let mut settings = Settings::default();
        let res = settings.set_marker_url("example.com/end");
        assert_matches!(res, Err(TriageError::ParseUrl(_)));
        assert_eq!(settings.marker.url, DEFAULT_MARKER_URL);
    }

    #[test]
    fn test_set_marker_folder() {
        let mut settings = Settings::default();
        settings.set_marker_folder(" Inbox ").unwrap();
        assert_eq!(settings.marker.folder, "Inbox");

        assert_matches!(
            settings.set_marker_folder("A/B"),
            Err(TriageError::InvalidFolder(_))
        );
        assert_matches!(
            settings.set_marker_folder(""),
            Err(TriageError::InvalidFolder(_))
        );
    }

    #[test]
    fn test_apply() {
        let mut settings = Settings::default();
        let args = SettingsArgs::new(
            Some("https://example.com/end".to_owned()),
            Some("Inbox".to_owned()),
            Some(ParseStrategy::Line),
        );
        settings.apply(args).unwrap();

        assert_eq!(
            settings,
            Settings::new(
                BoundaryMarker::new("https://example.com/end", "Inbox"),
                ParseStrategy::Line
            )
        );
    }

    #[test]
    fn test_init() {
        let temp_dir = tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let settings = Settings::init(&settings_path).unwrap();
        assert!(settings_path.exists());
        assert_eq!(settings, Settings::default());

        let mut settings = settings;
        settings.set_strategy(Some(ParseStrategy::Line));
        settings.write(&settings_path).unwrap();

        let settings = Settings::init(&settings_path).unwrap();
        assert_eq!(settings.strategy, ParseStrategy::Line);
    }

    #[test]
    fn test_deserialize_partial() {
        let settings = json::deserialize::<Settings>(br#"{"strategy": "line"}"#).unwrap();
        assert_eq!(settings.marker, BoundaryMarker::default());
        assert_eq!(settings.strategy, ParseStrategy::Line);
    }
}
