use super::{BookmarkEvent, ParseStrategy, ReadBookmark};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a folder header, the start or end of a list, or a link.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<H3\b[^>]*>(?P<header>.*?)</H3\s*>|(?P<open><DL\b[^>]*>)|(?P<close></DL\s*>)|<A\b(?P<attributes>[^>]*)>(?P<title>.*?)</A\s*>"#,
    )
    .expect("Invalid regex for bookmark tokens")
});

static HREF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bHREF\s*=\s*"(?P<value>[^"]*)""#).expect("Invalid regex for href")
});

static ADD_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bADD_DATE\s*=\s*"(?P<value>[^"]*)""#).expect("Invalid regex for add date")
});

/// A bookmark reader which scans a bookmarks export line by line.
///
/// Used if no HTML parser is available. Headers and links have to start and
/// end on the same line, as in the exports written by Chrome.
#[derive(Debug, Clone, Copy)]
pub struct LineReader;

impl LineReader {
    fn read_line(line: &str, events: &mut Vec<BookmarkEvent>) {
        for captures in TOKEN_REGEX.captures_iter(line) {
            if let Some(header) = captures.name("header") {
                events.push(BookmarkEvent::Header(Self::decode(header.as_str())));
            } else if captures.name("open").is_some() {
                events.push(BookmarkEvent::OpenList);
            } else if captures.name("close").is_some() {
                events.push(BookmarkEvent::CloseList);
            } else if let Some(attributes) = captures.name("attributes") {
                let attributes = attributes.as_str();

                if let Some(url) = Self::attribute(&HREF_REGEX, attributes) {
                    let title = captures
                        .name("title")
                        .map(|title| Self::decode(title.as_str()))
                        .unwrap_or_default();
                    events.push(BookmarkEvent::Link {
                        url,
                        title,
                        add_date: Self::attribute(&ADD_DATE_REGEX, attributes),
                    });
                } else {
                    trace!("Skip link without href: {line}");
                }
            }
        }
    }

    fn attribute(regex: &Regex, attributes: &str) -> Option<String> {
        regex
            .captures(attributes)
            .and_then(|captures| captures.name("value"))
            .map(|value| html_escape::decode_html_entities(value.as_str()).into_owned())
    }

    fn decode(text: &str) -> String {
        html_escape::decode_html_entities(text).trim().to_owned()
    }
}

impl ReadBookmark for LineReader {
    fn name(&self) -> ParseStrategy {
        ParseStrategy::Line
    }

    fn read_events(&self, html: &str) -> Vec<BookmarkEvent> {
        let mut events = Vec::new();

        for line in html.lines() {
            Self::read_line(line, &mut events);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line() {
        let mut events = Vec::new();
        LineReader::read_line(
            r#"<DT><H3 ADD_DATE="1705314600" PERSONAL_TOOLBAR_FOLDER="true">Bookmarks Bar</H3>"#,
            &mut events,
        );
        LineReader::read_line("<DL><p>", &mut events);
        LineReader::read_line(
            r#"<DT><a href="https://docs.rs/" add_date="1705314600" ICON="data:x">Docs &amp; more</a>"#,
            &mut events,
        );
        LineReader::read_line("</DL><p>", &mut events);

        assert_eq!(
            events,
            vec![
                BookmarkEvent::Header("Bookmarks Bar".to_owned()),
                BookmarkEvent::OpenList,
                BookmarkEvent::Link {
                    url: "https://docs.rs/".to_owned(),
                    title: "Docs & more".to_owned(),
                    add_date: Some("1705314600".to_owned()),
                },
                BookmarkEvent::CloseList,
            ]
        );
    }

    #[test]
    fn test_read_line_multiple_tokens() {
        let mut events = Vec::new();
        LineReader::read_line(
            r#"<DT><H3>Empty</H3><DL><p></DL><p><DT><A HREF="https://a.example"></A>"#,
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                BookmarkEvent::Header("Empty".to_owned()),
                BookmarkEvent::OpenList,
                BookmarkEvent::CloseList,
                BookmarkEvent::Link {
                    url: "https://a.example".to_owned(),
                    title: String::new(),
                    add_date: None,
                },
            ]
        );
    }

    #[test]
    fn test_header_without_list() {
        let html = r#"<DL><p>
    <DT><H3>Empty</H3>
    <DT><A HREF="https://a.example">A</A>
</DL><p>
"#;
        let bookmarks = LineReader.read(html);

        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].folder_path, "");
    }
}
