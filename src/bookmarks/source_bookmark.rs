use crate::extract;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookmark read from a bookmarks export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBookmark {
    pub url: String,
    pub title: String,
    pub add_date: Option<DateTime<Utc>>,
    /// The folder names from the outermost to the innermost folder, joined by
    /// `/`. An empty path refers to the top level.
    pub folder_path: String,
    pub is_tweet: bool,
}

impl SourceBookmark {
    pub fn builder(url: &str) -> SourceBookmarkBuilder {
        SourceBookmarkBuilder::new(url)
    }
}

#[derive(Debug)]
pub struct SourceBookmarkBuilder {
    url: String,
    title: String,
    add_date: Option<DateTime<Utc>>,
    folder_path: String,
}

impl SourceBookmarkBuilder {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            title: String::new(),
            add_date: None,
            folder_path: String::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn add_date(mut self, add_date: Option<DateTime<Utc>>) -> Self {
        self.add_date = add_date;
        self
    }

    pub fn folder_path(mut self, folder_path: &str) -> Self {
        self.folder_path = folder_path.to_owned();
        self
    }

    pub fn build(self) -> SourceBookmark {
        let is_tweet = extract::is_tweet(&self.url);

        SourceBookmark {
            url: self.url,
            title: self.title,
            add_date: self.add_date,
            folder_path: self.folder_path,
            is_tweet,
        }
    }
}

/// A [`SourceBookmark`] marked as keeper or as bookmark to be categorized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedBookmark {
    #[serde(flatten)]
    pub bookmark: SourceBookmark,
    pub is_keeper: bool,
}

impl AnnotatedBookmark {
    pub fn new(bookmark: SourceBookmark, is_keeper: bool) -> Self {
        Self {
            bookmark,
            is_keeper,
        }
    }
}
