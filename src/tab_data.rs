/// Data structures for Tab Orbit
use serde::Deserialize;

use crate::category::{Category, categorize_host};
use crate::domain::extract_domain;

/// Browser tab identifier, unique among currently open tabs.
pub type TabId = i32;

/// Raw tab descriptor as delivered by the host browser's snapshot query.
/// Only deserialized: records cross the bridge inbound, never back out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTab {
    pub id: TabId,
    /// The browser can omit titles; missing ones ingest as empty.
    #[serde(default)]
    pub title: String,
    pub url: String,
}

impl RawTab {
    pub fn new(id: TabId, title: &str, url: &str) -> RawTab {
        RawTab {
            id,
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// Coarse recency buckets for the timeline view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    JustNow,
    LastHour,
    Today,
    Yesterday,
}

impl Timeframe {
    /// Bucket order. The timeline view renders in exactly this order.
    pub const ALL: [Timeframe; 4] = [
        Timeframe::JustNow,
        Timeframe::LastHour,
        Timeframe::Today,
        Timeframe::Yesterday,
    ];

    /// Canonical display casing. All grouping compares enum values, so the
    /// label casing can never drift between ingestion and rendering.
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::JustNow => "Just Now",
            Timeframe::LastHour => "Last Hour",
            Timeframe::Today => "Today",
            Timeframe::Yesterday => "Yesterday",
        }
    }
}

/// A fully ingested tab record.
///
/// `domain` and `category` are derived from `url` exactly once, here; they
/// are never recomputed for a live record.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub domain: String,
    pub category: Category,
    pub last_accessed: Timeframe,
}

impl Tab {
    /// Ingest one snapshot descriptor.
    ///
    /// There is no live access tracking: every tab enters in the
    /// most-recent bucket.
    pub fn from_raw(raw: RawTab) -> Tab {
        let domain = extract_domain(&raw.url);
        let category = categorize_host(&domain);
        Tab {
            id: raw.id,
            title: raw.title,
            url: raw.url,
            domain,
            category,
            last_accessed: Timeframe::JustNow,
        }
    }
}
