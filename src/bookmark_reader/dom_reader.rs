use super::{BookmarkEvent, ParseStrategy, ReadBookmark};
use log::trace;
use scraper::{ElementRef, Html};

/// A bookmark reader which walks the HTML document parsed by `scraper`.
///
/// Folder headers, lists, and links are emitted in document order. Other
/// elements are traversed but don't emit events.
#[derive(Debug, Clone, Copy)]
pub struct DomReader;

impl DomReader {
    fn walk(element: ElementRef, events: &mut Vec<BookmarkEvent>) {
        for child in element.children() {
            let Some(child) = ElementRef::wrap(child) else {
                continue;
            };

            match child.value().name() {
                "h3" => events.push(BookmarkEvent::Header(Self::text(&child))),
                "a" => {
                    if let Some(url) = child.value().attr("href") {
                        events.push(BookmarkEvent::Link {
                            url: url.to_owned(),
                            title: Self::text(&child),
                            add_date: child.value().attr("add_date").map(str::to_owned),
                        });
                    } else {
                        trace!("Skip link without href");
                    }
                }
                "dl" => {
                    events.push(BookmarkEvent::OpenList);
                    Self::walk(child, events);
                    events.push(BookmarkEvent::CloseList);
                }
                _ => Self::walk(child, events),
            }
        }
    }

    fn text(element: &ElementRef) -> String {
        element.text().collect::<String>().trim().to_owned()
    }
}

impl ReadBookmark for DomReader {
    fn name(&self) -> ParseStrategy {
        ParseStrategy::Dom
    }

    fn read_events(&self, html: &str) -> Vec<BookmarkEvent> {
        let document = Html::parse_document(html);
        let mut events = Vec::new();
        Self::walk(document.root_element(), &mut events);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_events() {
        let html = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bookmarks Bar</H3>
    <DL><p>
        <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="1705314600">Rust</A>
    </DL><p>
    <DT><A HREF="https://docs.rs/">Docs.rs</A>
</DL><p>
"#;
        let events = DomReader.read_events(html);

        assert_eq!(
            events,
            vec![
                BookmarkEvent::OpenList,
                BookmarkEvent::Header("Bookmarks Bar".to_owned()),
                BookmarkEvent::OpenList,
                BookmarkEvent::Link {
                    url: "https://www.rust-lang.org/".to_owned(),
                    title: "Rust".to_owned(),
                    add_date: Some("1705314600".to_owned()),
                },
                BookmarkEvent::CloseList,
                BookmarkEvent::Link {
                    url: "https://docs.rs/".to_owned(),
                    title: "Docs.rs".to_owned(),
                    add_date: None,
                },
                BookmarkEvent::CloseList,
            ]
        );
    }
}
