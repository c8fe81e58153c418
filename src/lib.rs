/// Available arguments.
mod args;
/// Readers for bookmark exports in the Netscape bookmark format.
pub mod bookmark_reader;
/// Writer for bookmark exports in the Netscape bookmark format.
pub mod bookmark_writer;
/// The imported and exported bookmarks, and the detection of the last keeper.
pub mod bookmarks;
/// Available commands.
pub mod cmd;
/// The configuration used in booktriage.
mod config;
/// The errors used in booktriage.
pub mod errors;
/// Helper functions to extract information from urls.
pub mod extract;
/// Helper functions to work with JSON.
pub mod json;
/// The logger used in booktriage.
mod logger;
/// Helper functions for full-text search.
pub mod search;
/// The settings used in booktriage.
mod settings;
/// Utilities used in testing.
pub mod test_utils;
/// Utilities to work with files (create, open, read, write).
pub mod utils;

pub use args::{
    Args, ConfigArgs, DomainArgs, ExportArgs, ImportArgs, QueryArgs, SetMarker, Subcommands,
    TweetArgs,
};
pub use bookmark_reader::{parse, parse_with, ParseStrategy};
pub use bookmark_writer::export_to_chrome;
pub use bookmarks::{
    detect_boundary, AnnotatedBookmark, BoundaryMarker, BoundaryReport, KeeperBookmark,
    SourceBookmark,
};
pub use config::Config;
pub use errors::TriageError;
pub use extract::{extract_domain, get_tweet_id};
pub use logger::Logger;
pub use search::build_ts_query;
pub use settings::{Settings, SettingsArgs};
