//! Page title extraction.
//!
//! The HTML is parsed with html5ever into an `RcDom`; the first `<title>`
//! element in document order supplies the link text.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Suffix YouTube appends to every watch page title.
pub const YOUTUBE_SUFFIX: &str = " - YouTube";

/// Returns the text of the first `<title>` element, or `None` if the document
/// has none. Whitespace runs (newlines included) collapse to one space, so the
/// result always fits on a single line.
///
/// The body is decoded as UTF-8 whatever charset the page declares; invalid
/// sequences are replaced rather than rejected.
pub fn extract_title(html: &[u8]) -> Option<String> {
    let source = String::from_utf8_lossy(html);
    let dom = parse_document(RcDom::default(), Default::default()).one(&*source);

    let node = find_title(&dom.document)?;
    let mut text = String::new();
    collect_text(&node, &mut text);
    Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Drops one trailing `" - YouTube"`. Occurrences elsewhere are kept.
pub fn clean_title(raw: &str) -> &str {
    raw.strip_suffix(YOUTUBE_SUFFIX).unwrap_or(raw)
}

fn find_title(node: &Handle) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == "title" {
            return Some(node.clone());
        }
    }
    node.children.borrow().iter().find_map(find_title)
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match child.data {
            NodeData::Text { ref contents } => out.push_str(&contents.borrow()),
            _ => collect_text(child, out),
        }
    }
}
