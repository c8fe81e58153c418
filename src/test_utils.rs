use crate::{bookmarks::KeeperBookmark, utils};
use std::path::{Path, PathBuf};

/// The directory with the bookmark exports used in testing.
pub const TEST_DATA_DIR: &str = "test_data";

pub fn test_data_path(file_name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(TEST_DATA_DIR)
        .join(file_name)
}

/// Read a file from the test data as string.
///
/// Panics if the file doesn't exist.
pub fn read_test_data(file_name: &str) -> String {
    let path = test_data_path(file_name);
    let content = utils::read_file(&path)
        .unwrap_or_else(|err| panic!("Can't read test data {}: {err}", path.display()));
    String::from_utf8(content).expect("Invalid utf8 in test data")
}

pub fn keeper(url: &str, title: Option<&str>, folder_path: Option<&str>) -> KeeperBookmark {
    KeeperBookmark::new(
        url,
        title.map(str::to_owned),
        None,
        folder_path.map(str::to_owned),
    )
}
