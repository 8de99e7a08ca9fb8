//! Locating record containers
//!
//! A container is a `div` whose class attribute contains a marker substring.
//! The search is a pre-order walk over the whole document that stops
//! descending at each match, so only outermost containers are returned.

use scraper::{ElementRef, Html};

/// Class substring that marks one channel entry in the catalog listing
pub const CHANNEL_CONTAINER_CLASS: &str = "channels-item";

/// True if the element carries a class attribute containing `needle`.
/// This is a raw substring test, not a class token match.
pub fn class_contains(element: ElementRef<'_>, needle: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|class| class.contains(needle))
}

/// Find all channel containers in a parsed document, in document order
pub fn channel_containers(document: &Html) -> Vec<ElementRef<'_>> {
    find_containers(document.root_element(), "div", CHANNEL_CONTAINER_CLASS)
}

/// Find outermost elements with the given tag whose class contains `class`
pub fn find_containers<'a>(
    root: ElementRef<'a>,
    tag: &str,
    class: &str,
) -> Vec<ElementRef<'a>> {
    let mut found = Vec::new();
    collect_containers(root, tag, class, &mut found);
    found
}

fn collect_containers<'a>(
    element: ElementRef<'a>,
    tag: &str,
    class: &str,
    found: &mut Vec<ElementRef<'a>>,
) {
    if element.value().name() == tag && class_contains(element, class) {
        found.push(element);
        return;
    }

    for child in element.children().filter_map(ElementRef::wrap) {
        collect_containers(child, tag, class, found);
    }
}
