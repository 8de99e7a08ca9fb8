//! HTML extraction modules
//!
//! Each module covers one step of turning a catalog page into channel records.

mod channel_extractor;
mod container_extractor;
mod text_extractor;

pub use channel_extractor::*;
pub use container_extractor::*;
pub use text_extractor::*;

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Every field is the raw text found on the page, or empty when the page
/// has no matching marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub title: String,
    pub subscribers: String,
    pub views: String,
    pub rating: String,
    /// Engagement rate
    pub er: String,
    pub full_price: String,
}

impl Channel {
    pub fn set(&mut self, field: ChannelField, value: String) {
        match field {
            ChannelField::Title => self.title = value,
            ChannelField::Subscribers => self.subscribers = value,
            ChannelField::Views => self.views = value,
            ChannelField::Rating => self.rating = value,
            ChannelField::EngagementRate => self.er = value,
            ChannelField::FullPrice => self.full_price = value,
        }
    }

    pub fn get(&self, field: ChannelField) -> &str {
        match field {
            ChannelField::Title => &self.title,
            ChannelField::Subscribers => &self.subscribers,
            ChannelField::Views => &self.views,
            ChannelField::Rating => &self.rating,
            ChannelField::EngagementRate => &self.er,
            ChannelField::FullPrice => &self.full_price,
        }
    }

    /// True when no rule matched anything inside the container
    pub fn is_empty(&self) -> bool {
        ChannelField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Field of a [`Channel`] that a class rule writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelField {
    Title,
    Subscribers,
    Views,
    Rating,
    EngagementRate,
    FullPrice,
}

impl ChannelField {
    pub const ALL: [ChannelField; 6] = [
        ChannelField::Title,
        ChannelField::Subscribers,
        ChannelField::Views,
        ChannelField::Rating,
        ChannelField::EngagementRate,
        ChannelField::FullPrice,
    ];
}
