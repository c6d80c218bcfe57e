//! HTML helpers shared by the page extractors

mod locator;

pub use locator::{find_all, find_tag, AttrMatch, TagQuery};

use scraper::{ElementRef, Html};

/// Parses a full HTML document
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// All text under an element, concatenated without trimming
pub fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

/// The next sibling that is an element, skipping text and comments
pub fn next_element_sibling(element: ElementRef) -> Option<ElementRef> {
    element.next_siblings().find_map(ElementRef::wrap)
}
