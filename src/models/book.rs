//! Book display model.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::volume::{ImageLinks, VolumeItem};

/// Title shown when a record carries none.
pub const UNTITLED: &str = "Untitled";

/// Author line shown when a record lists no authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Number of authors named on a card.
const CARD_AUTHORS: usize = 2;

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"));

/// A book as shown in search results.
///
/// Only `id` carries identity; everything else is presentational and may be
/// missing from the upstream record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u32>,
    pub categories: Vec<String>,
    pub page_count: Option<u32>,
}

impl BookSummary {
    /// Create a summary carrying only an id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            authors: Vec::new(),
            published_date: None,
            description: None,
            image_links: None,
            average_rating: None,
            ratings_count: None,
            categories: Vec::new(),
            page_count: None,
        }
    }

    /// Title, or a placeholder when the record has none.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED,
        }
    }

    /// First authors joined for a card, or "Unknown Author".
    pub fn authors_line(&self) -> String {
        if self.authors.is_empty() {
            return UNKNOWN_AUTHOR.to_string();
        }
        self.authors
            .iter()
            .take(CARD_AUTHORS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Year component of the published date.
    pub fn published_year(&self) -> Option<i32> {
        self.published_date.as_deref().and_then(parse_year)
    }

    /// Description with markup tags removed.
    pub fn plain_description(&self) -> Option<String> {
        let text = MARKUP_TAG.replace_all(self.description.as_deref()?, "");
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// Cover URL, preferring the thumbnail over the small thumbnail.
    pub fn cover_url(&self) -> Option<&str> {
        let links = self.image_links.as_ref()?;
        links
            .thumbnail
            .as_deref()
            .or(links.small_thumbnail.as_deref())
    }

    /// Text drawn on a missing cover: the first two words of the title.
    pub fn cover_placeholder(&self) -> String {
        self.display_title()
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The category shown on a card.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Average rating with one decimal, followed by the count when known.
    pub fn rating_label(&self) -> Option<String> {
        let average = self.average_rating?;
        Some(match self.ratings_count {
            Some(count) => format!("{average:.1} ({count})"),
            None => format!("{average:.1}"),
        })
    }
}

impl From<VolumeItem> for BookSummary {
    fn from(item: VolumeItem) -> Self {
        let info = item.volume_info;
        Self {
            id: item.id,
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            published_date: info.published_date,
            description: info.description,
            image_links: info.image_links,
            average_rating: info.average_rating,
            ratings_count: info.ratings_count,
            categories: info.categories.unwrap_or_default(),
            page_count: info.page_count,
        }
    }
}

/// Extract the year from `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or RFC 3339 dates.
fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date.year());
    }
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok();
    }
    None
}
