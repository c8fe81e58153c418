mod bookmark_builder;
#[cfg(feature = "dom")]
mod dom_reader;
mod line_reader;

use crate::bookmarks::SourceBookmark;
pub use bookmark_builder::BookmarkBuilder;
use clap::ValueEnum;
#[cfg(feature = "dom")]
pub use dom_reader::DomReader;
pub use line_reader::LineReader;
use log::debug;
#[cfg(not(feature = "dom"))]
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The folder and link structure of a bookmarks export in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkEvent {
    /// A folder header (`<H3>`) with the name of the folder.
    Header(String),
    /// The start of a list of folders and links (`<DL>`).
    OpenList,
    /// The end of a list (`</DL>`).
    CloseList,
    /// A link (`<A>`), where `add_date` is the raw `ADD_DATE` attribute.
    Link {
        url: String,
        title: String,
        add_date: Option<String>,
    },
}

/// The strategy to parse bookmarks in the Netscape bookmark format.
#[derive(Debug, ValueEnum, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParseStrategy {
    /// Walk the parsed HTML document.
    #[default]
    Dom,
    /// Scan the bookmarks export line by line.
    Line,
}

impl ParseStrategy {
    /// Use the strategy if it was provided in the CLI command. Otherwise, the
    /// strategy configured in the settings is used.
    pub fn new(strategy: Option<ParseStrategy>, configured: ParseStrategy) -> ParseStrategy {
        strategy.unwrap_or(configured)
    }

    fn reader(&self) -> Box<dyn ReadBookmark> {
        match self {
            #[cfg(feature = "dom")]
            ParseStrategy::Dom => Box::new(DomReader),
            #[cfg(not(feature = "dom"))]
            ParseStrategy::Dom => {
                warn!("HTML parser not available: fall back to line reader");
                Box::new(LineReader)
            }
            ParseStrategy::Line => Box::new(LineReader),
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self {
            ParseStrategy::Dom => "dom",
            ParseStrategy::Line => "line",
        };
        write!(f, "{}", strategy)
    }
}

/// A trait to read the folder and link structure from a bookmarks export.
pub trait ReadBookmark: fmt::Debug {
    fn name(&self) -> ParseStrategy;

    /// Read the events in document order.
    ///
    /// Readers recover from malformed input and never fail.
    fn read_events(&self, html: &str) -> Vec<BookmarkEvent>;

    fn read(&self, html: &str) -> Vec<SourceBookmark> {
        debug!("Read bookmarks with {} reader", self.name());
        BookmarkBuilder::from_iter(self.read_events(html)).build()
    }
}

/// Parse bookmarks from a bookmarks export in the Netscape bookmark format.
pub fn parse(html: &str) -> Vec<SourceBookmark> {
    parse_with(html, ParseStrategy::default())
}

pub fn parse_with(html: &str, strategy: ParseStrategy) -> Vec<SourceBookmark> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    strategy.reader().read(html)
}
