//! Channel record extraction
//!
//! Fields are found structurally: every `div` inside a container is checked
//! against a table of class rules, and each rule that matches writes its
//! field. Rules are independent of each other, and a later match for the
//! same field overwrites an earlier one.

use std::io::Read;

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::{
    channel_containers, class_contains, text_content, text_content_or_empty, Channel,
    ChannelField,
};
use crate::error::{Error, Result};

/// Where a matched rule takes its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Text content of the matched element
    OwnText,
    /// Text content of the first element (pre-order, matched element
    /// included) whose class contains the given marker
    DescendantText(&'static str),
}

impl ValueSource {
    pub fn extract(&self, element: ElementRef<'_>) -> String {
        match self {
            ValueSource::OwnText => text_content(element),
            ValueSource::DescendantText(marker) => {
                text_content_or_empty(find_descendant_with_class(element, marker))
            }
        }
    }
}

/// Maps class-name markers to a channel field
#[derive(Debug, Clone, Copy)]
pub struct ClassRule {
    /// Every marker must be a substring of the class attribute
    pub markers: &'static [&'static str],
    pub field: ChannelField,
    pub source: ValueSource,
}

impl ClassRule {
    pub fn matches(&self, class: &str) -> bool {
        self.markers.iter().all(|marker| class.contains(marker))
    }
}

/// Field markers used by the catalog markup
pub const CHANNEL_RULES: [ClassRule; 6] = [
    ClassRule {
        markers: &["channel_title"],
        field: ChannelField::Title,
        source: ValueSource::OwnText,
    },
    ClassRule {
        markers: &["channel-users-count"],
        field: ChannelField::Subscribers,
        source: ValueSource::OwnText,
    },
    ClassRule {
        markers: &["arating"],
        field: ChannelField::Rating,
        source: ValueSource::OwnText,
    },
    ClassRule {
        markers: &["item", "_3"],
        field: ChannelField::EngagementRate,
        source: ValueSource::DescendantText("js-err"),
    },
    ClassRule {
        markers: &["current_price"],
        field: ChannelField::FullPrice,
        source: ValueSource::OwnText,
    },
    ClassRule {
        markers: &["item", "_2"],
        field: ChannelField::Views,
        source: ValueSource::DescendantText("js-view"),
    },
];

/// First element in pre-order (root included) whose class contains `class`.
/// Any tag qualifies.
pub fn find_descendant_with_class<'a>(
    root: ElementRef<'a>,
    class: &str,
) -> Option<ElementRef<'a>> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| class_contains(*element, class))
}

/// Build a channel from one container using the catalog rules
pub fn build_channel(container: ElementRef<'_>) -> Channel {
    build_channel_with_rules(container, &CHANNEL_RULES)
}

/// Build a channel from one container using an arbitrary rule table
pub fn build_channel_with_rules(container: ElementRef<'_>, rules: &[ClassRule]) -> Channel {
    let mut channel = Channel::default();

    for element in container.descendants().filter_map(ElementRef::wrap) {
        if element.value().name() != "div" {
            continue;
        }
        let Some(class) = element.value().attr("class") else {
            continue;
        };

        for rule in rules.iter().filter(|rule| rule.matches(class)) {
            channel.set(rule.field, rule.source.extract(element));
        }
    }

    channel
}

/// Extract all channels from an already parsed document
pub fn extract_channels(document: &Html) -> Vec<Channel> {
    let containers = channel_containers(document);
    debug!(containers = containers.len(), "located channel containers");

    containers
        .into_iter()
        .enumerate()
        .map(|(index, container)| {
            let channel = build_channel(container);
            if channel.is_empty() {
                warn!(index, "channel container has no recognised fields");
            }
            channel
        })
        .collect()
}

/// Parse an HTML document and extract all channels
pub fn parse_channels(html: &str) -> Vec<Channel> {
    let document = Html::parse_document(html);
    extract_channels(&document)
}

/// Parse raw HTML bytes, which must be valid UTF-8
pub fn parse_channels_from_bytes(bytes: &[u8]) -> Result<Vec<Channel>> {
    let html = std::str::from_utf8(bytes)?;
    Ok(parse_channels(html))
}

/// Read an HTML document to the end and extract all channels
pub fn parse_channels_from_reader<R: Read>(mut reader: R) -> Result<Vec<Channel>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(Error::Read)?;
    parse_channels_from_bytes(&bytes)
}
