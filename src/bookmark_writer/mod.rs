mod folder_tree;

use crate::bookmarks::KeeperBookmark;
use anyhow::Context;
use chrono::{DateTime, NaiveDateTime};
pub use folder_tree::FolderNode;
use log::{debug, warn};
use std::io::Write;

/// The name of the folder displayed as bookmarks bar in Chrome.
pub const TOOLBAR_FOLDER: &str = "Bookmarks Bar";

const HEADER: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
"#;

const FOOTER: &str = "</DL><p>\n";

const INDENT: &str = "    ";

/// Export bookmarks to the Netscape bookmark format as written by Chrome.
///
/// The folder "Bookmarks Bar" is exported first and marked as toolbar folder.
/// It is created if none of the bookmarks belongs to it.
pub fn export_to_chrome(bookmarks: &[KeeperBookmark]) -> String {
    debug!("Export {} bookmarks", bookmarks.len());

    let mut root = FolderNode::build(bookmarks);
    let toolbar = root
        .take_child(TOOLBAR_FOLDER)
        .unwrap_or_else(|| FolderNode::new(TOOLBAR_FOLDER));

    let mut writer = ChromeWriter::new();
    writer.buf.push_str(HEADER);
    writer.write_folder(&toolbar, 1, true);

    for folder in &root.children {
        writer.write_folder(folder, 1, false);
    }

    for bookmark in &root.bookmarks {
        writer.write_bookmark(bookmark, 1);
    }

    writer.buf.push_str(FOOTER);
    writer.buf
}

/// Extension trait for [`Write`] to export bookmarks.
pub trait WriteChrome {
    fn write_chrome(&mut self, bookmarks: &[KeeperBookmark]) -> Result<(), anyhow::Error>;
}

impl<T> WriteChrome for T
where
    T: Write,
{
    fn write_chrome(&mut self, bookmarks: &[KeeperBookmark]) -> Result<(), anyhow::Error> {
        let html = export_to_chrome(bookmarks);
        self.write_all(html.as_bytes())
            .context("Can't write exported bookmarks")?;
        self.flush()?;
        Ok(())
    }
}

struct ChromeWriter {
    buf: String,
}

impl ChromeWriter {
    fn new() -> Self {
        Self { buf: String::new() }
    }

    fn write_line(&mut self, depth: usize, line: &str) {
        for _ in 0..depth {
            self.buf.push_str(INDENT);
        }

        self.buf.push_str(line);
        self.buf.push('\n');
    }

    fn write_folder(&mut self, folder: &FolderNode, depth: usize, is_toolbar: bool) {
        let name = html_escape::encode_quoted_attribute(&folder.name);
        let header = if is_toolbar {
            format!(r#"<DT><H3 PERSONAL_TOOLBAR_FOLDER="true">{name}</H3>"#)
        } else {
            format!("<DT><H3>{name}</H3>")
        };
        self.write_line(depth, &header);
        self.write_line(depth, "<DL><p>");

        for child in &folder.children {
            self.write_folder(child, depth + 1, false);
        }

        for bookmark in &folder.bookmarks {
            self.write_bookmark(bookmark, depth + 1);
        }

        self.write_line(depth, "</DL><p>");
    }

    fn write_bookmark(&mut self, bookmark: &KeeperBookmark, depth: usize) {
        let url = html_escape::encode_quoted_attribute(&bookmark.url);
        let title = html_escape::encode_quoted_attribute(bookmark.display_title());
        let line = match bookmark.add_date.as_deref().and_then(parse_add_date) {
            Some(add_date) => {
                format!(r#"<DT><A HREF="{url}" ADD_DATE="{add_date}">{title}</A>"#)
            }
            None => format!(r#"<DT><A HREF="{url}">{title}</A>"#),
        };
        self.write_line(depth, &line);
    }
}

/// Convert an ISO 8601 timestamp to seconds since the Unix epoch.
///
/// Timestamps without offset are interpreted as UTC.
fn parse_add_date(add_date: &str) -> Option<i64> {
    if let Ok(add_date) = DateTime::parse_from_rfc3339(add_date) {
        return Some(add_date.timestamp());
    }

    match NaiveDateTime::parse_from_str(add_date, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(add_date) => Some(add_date.and_utc().timestamp()),
        Err(err) => {
            warn!("Can't parse add date '{add_date}': {err}");
            None
        }
    }
}
