mod boundary;
mod keeper_bookmark;
mod source_bookmark;

pub use boundary::{
    detect_boundary, BoundaryMarker, BoundaryReport, DEFAULT_MARKER_FOLDER, DEFAULT_MARKER_URL,
};
pub use keeper_bookmark::KeeperBookmark;
pub use source_bookmark::{AnnotatedBookmark, SourceBookmark, SourceBookmarkBuilder};

/// The separator between folder names in a folder path.
pub const FOLDER_SEPARATOR: char = '/';

/// Split a folder path into its folder names, skipping empty segments.
pub fn folder_segments(folder_path: &str) -> impl Iterator<Item = &str> {
    folder_path
        .split(FOLDER_SEPARATOR)
        .filter(|segment| !segment.is_empty())
}
