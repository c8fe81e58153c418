use super::AnnotatedBookmark;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// A bookmark which is exported back to the browser.
///
/// `add_date` is an ISO 8601 timestamp as stored by the bookmark database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeeperBookmark {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub add_date: Option<String>,
    #[serde(default, alias = "chrome_folder_path")]
    pub folder_path: Option<String>,
}

impl KeeperBookmark {
    pub fn new(
        url: impl Into<String>,
        title: Option<String>,
        add_date: Option<String>,
        folder_path: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title,
            add_date,
            folder_path,
        }
    }

    /// The title displayed in the browser, falling back to the url for
    /// bookmarks without title.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.url,
        }
    }
}

impl From<&AnnotatedBookmark> for KeeperBookmark {
    fn from(value: &AnnotatedBookmark) -> Self {
        let bookmark = &value.bookmark;

        Self {
            url: bookmark.url.clone(),
            title: Some(bookmark.title.clone()),
            add_date: bookmark
                .add_date
                .map(|add_date| add_date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            folder_path: if bookmark.folder_path.is_empty() {
                None
            } else {
                Some(bookmark.folder_path.clone())
            },
        }
    }
}
