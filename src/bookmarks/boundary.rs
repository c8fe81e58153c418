use super::{folder_segments, AnnotatedBookmark, KeeperBookmark, SourceBookmark};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// The default url of the last keeper.
pub const DEFAULT_MARKER_URL: &str = "https://byebyepaywall.com/en/";

/// The default folder name of the last keeper.
pub const DEFAULT_MARKER_FOLDER: &str = "tools";

/// Identifies the last keeper in a list of bookmarks.
///
/// A bookmark is a marker if its url equals `url`, and one of the folders in
/// its folder path is named `folder` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryMarker {
    pub url: String,
    pub folder: String,
}

impl Default for BoundaryMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_URL, DEFAULT_MARKER_FOLDER)
    }
}

impl BoundaryMarker {
    pub fn new(url: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            folder: folder.into(),
        }
    }

    pub fn matches(&self, bookmark: &SourceBookmark) -> bool {
        if bookmark.url != self.url {
            return false;
        }

        let folder = self.folder.to_lowercase();
        folder_segments(&bookmark.folder_path).any(|segment| segment.to_lowercase() == folder)
    }
}

/// The bookmarks split into keepers and bookmarks to be categorized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryReport {
    pub boundary_found: bool,
    pub keeper_count: usize,
    pub to_categorize_count: usize,
    pub bookmarks: Vec<AnnotatedBookmark>,
}

impl BoundaryReport {
    pub fn keepers(&self) -> Vec<KeeperBookmark> {
        self.bookmarks
            .iter()
            .filter(|bookmark| bookmark.is_keeper)
            .map(KeeperBookmark::from)
            .collect()
    }
}

/// Split the bookmarks at the last bookmark matching the `marker`.
///
/// The marker and all preceding bookmarks are keepers. If the marker occurs
/// multiple times, the last occurrence wins.
pub fn detect_boundary(bookmarks: &[SourceBookmark], marker: &BoundaryMarker) -> BoundaryReport {
    let boundary = bookmarks
        .iter()
        .rposition(|bookmark| marker.matches(bookmark));
    trace!("Boundary for marker {marker:?}: {boundary:?}");

    let keeper_count = boundary.map_or(0, |index| index + 1);
    let annotated_bookmarks = bookmarks
        .iter()
        .enumerate()
        .map(|(index, bookmark)| AnnotatedBookmark::new(bookmark.clone(), index < keeper_count))
        .collect::<Vec<_>>();

    debug!(
        "Detected {} keepers and {} bookmarks to categorize",
        keeper_count,
        bookmarks.len() - keeper_count
    );

    BoundaryReport {
        boundary_found: boundary.is_some(),
        keeper_count,
        to_categorize_count: bookmarks.len() - keeper_count,
        bookmarks: annotated_bookmarks,
    }
}
