//! Text content of DOM nodes
//!
//! Text is gathered child by child: each child contributes its own text
//! followed by a single space, and the joined result is trimmed once at the
//! end. Children are never trimmed individually, so runs of whitespace-only
//! text nodes collapse into the outer trim instead of changing the result.

use scraper::ElementRef;

/// Text content of an element and all of its descendants
pub fn text_content(element: ElementRef<'_>) -> String {
    let mut joined = String::new();

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            joined.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            joined.push_str(&text_content(child_element));
        }
        // Comments and other leaves contribute nothing but the separator
        joined.push(' ');
    }

    joined.trim().to_string()
}

/// Text content of an optional element; a missing element has no text
pub fn text_content_or_empty(element: Option<ElementRef<'_>>) -> String {
    element.map(text_content).unwrap_or_default()
}
