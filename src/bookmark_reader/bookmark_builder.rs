use super::BookmarkEvent;
use crate::bookmarks::{SourceBookmark, SourceBookmarkBuilder, FOLDER_SEPARATOR};
use chrono::{DateTime, Utc};
use log::{debug, trace};

/// Builds the bookmarks from the events emitted by a bookmark reader.
///
/// Every opened list pushes a frame on the folder stack. The frame is named if
/// the list was preceded by a folder header; the root list is unnamed and
/// doesn't contribute to the folder path.
#[derive(Debug, Default)]
pub struct BookmarkBuilder {
    folders: Vec<Option<String>>,
    pending_folder: Option<String>,
    bookmarks: Vec<SourceBookmark>,
}

impl BookmarkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: BookmarkEvent) {
        trace!("Bookmark event: {event:?}");

        match event {
            BookmarkEvent::Header(name) => {
                self.skip_pending_folder();
                self.pending_folder = Some(name);
            }
            BookmarkEvent::OpenList => {
                let folder = self.pending_folder.take();
                self.folders.push(folder);
            }
            BookmarkEvent::CloseList => {
                self.skip_pending_folder();

                if self.folders.pop().is_none() {
                    debug!("Ignore unmatched closing list");
                }
            }
            BookmarkEvent::Link {
                url,
                title,
                add_date,
            } => {
                self.skip_pending_folder();

                let bookmark = SourceBookmarkBuilder::new(&url)
                    .title(&title)
                    .add_date(add_date.and_then(Self::parse_add_date))
                    .folder_path(&self.folder_path())
                    .build();
                self.bookmarks.push(bookmark);
            }
        }
    }

    pub fn build(self) -> Vec<SourceBookmark> {
        self.bookmarks
    }

    /// A header which isn't followed by a list is an empty folder.
    fn skip_pending_folder(&mut self) {
        if let Some(empty_folder) = self.pending_folder.take() {
            debug!("Skip empty folder '{empty_folder}'");
        }
    }

    fn folder_path(&self) -> String {
        self.folders
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(&FOLDER_SEPARATOR.to_string())
    }

    /// Parse the `ADD_DATE` attribute given in seconds since the Unix epoch.
    fn parse_add_date(add_date: String) -> Option<DateTime<Utc>> {
        let seconds = add_date.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp_millis(seconds.checked_mul(1000)?)
    }
}

impl FromIterator<BookmarkEvent> for BookmarkBuilder {
    fn from_iter<T: IntoIterator<Item = BookmarkEvent>>(events: T) -> Self {
        let mut builder = Self::new();

        for event in events {
            builder.push_event(event);
        }

        builder
    }
}
