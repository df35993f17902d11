//! Output records for one details-page extraction.
//!
//! Serialization uses the camelCase field names of the page's original
//! JSON consumers (`appId`, `descriptionHTML`, `offersIAP`, …); absent
//! optional fields are skipped instead of serialized as null.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One user review attached to an app listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// Raw date text as shown on the page, not normalized.
    pub date: String,
    /// Star rating, always in 1..=5.
    pub rating: u8,
    /// Review body with the trailing "Full Review" prompt stripped.
    pub comment: String,
}

/// Structured record extracted from one app details page.
///
/// Built once, in full, from one document snapshot. String fields read
/// from element text default to empty; fields read from attributes are
/// `None` when the node or attribute is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    /// Caller-supplied package id, e.g. `com.example.app`.
    pub app_id: String,
    /// Resolved request URL the page was fetched from.
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Screenshot URLs in document order.
    pub screenshots: Vec<String>,
    /// Preview video URL with its query string stripped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Short promo line of the listing.
    pub summary: String,
    /// Description flattened to plain text.
    pub description: String,
    /// Raw inner markup of the active description node.
    #[serde(
        rename = "descriptionHTML",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description_html: Option<String>,
    /// Genres in document order.
    pub genre: Vec<String>,
    /// Changelog lines from the "What's New" section, in document order.
    pub recent_changes: Vec<String>,
    pub developer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_website: Option<String>,
    /// Raw price text; free apps carry `"0"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Always exactly the test `price == "0"`.
    pub free: bool,
    pub version: String,
    /// Raw last-updated date text.
    pub updated: String,
    pub required_android_version: String,
    pub content_rating: String,
    pub size: String,
    pub min_installs: u64,
    /// Upper install bound; absent when the page shows a single bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_installs: Option<u64>,
    /// Aggregate rating, 0.0 when unparseable.
    pub score: f64,
    /// Total review count.
    pub reviews: u64,
    /// Star-rating distribution, always keyed 1 through 5.
    pub histogram: BTreeMap<u8, u64>,
    #[serde(rename = "offersIAP")]
    pub offers_iap: bool,
    pub ad_supported: bool,
    pub preregister: bool,
    /// Reviews shown on the page, in document order.
    pub comments: Vec<Review>,
}
