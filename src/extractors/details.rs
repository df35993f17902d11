//! Whole-page extraction for an app details document.
//!
//! [`extract_app`] maps one parsed page to an [`AppRecord`]:
//!
//! - Selector anchors live in [`crate::selectors`].
//! - Missing nodes and attributes degrade to empty/absent field values.
//! - The one exception is review star ratings, which must parse (see
//!   [`super::reviews`]); a bad rating fails the whole call.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};
use url::Url;

use crate::error::Error;
use crate::extractors::{query, reviews, text};
use crate::model::AppRecord;
use crate::selectors;

/// Extract the full [`AppRecord`] from a parsed details page.
///
/// `app_id` and `url` are caller context and are copied into the record
/// verbatim; everything else comes from the document.
pub fn extract_app(doc: &Html, app_id: &str, url: &str) -> Result<AppRecord, Error> {
    let root = Some(doc.root_element());
    let details = query::first_element(root, &selectors::DETAILS_INFO);
    let sections = query::first_element(root, &selectors::SECTION_CONTENTS);
    let rating_box = query::first_element(root, &selectors::RATING_BOX);

    let price = query::first_attr(details, &selectors::PRICE, "content");
    let free = price.as_deref() == Some("0");
    let (description, description_html) = description_blocks(sections);
    let (developer_email, developer_website) = developer_links(root);
    let (min_installs, max_installs) =
        split_installs(&query::first_text(root, &selectors::INSTALLS));

    let record = AppRecord {
        app_id: app_id.to_string(),
        url: url.to_string(),
        title: query::first_text(details, &selectors::TITLE),
        icon: query::first_attr(details, &selectors::ICON, "src"),
        screenshots: query::all_attrs(
            query::first_element(root, &selectors::THUMBNAILS),
            &selectors::SCREENSHOT,
            "src",
        ),
        video: query::first_attr(root, &selectors::VIDEO, "data-video-url")
            .map(|raw| text::strip_query(&raw).to_string()),
        summary: query::first_attr(root, &selectors::SUMMARY_META, "content")
            .unwrap_or_default(),
        description,
        description_html,
        genre: query::all_texts(details, &selectors::GENRE),
        recent_changes: query::all_texts(root, &selectors::RECENT_CHANGES),
        developer: query::first_text(details, &selectors::DEVELOPER_NAME),
        developer_email,
        developer_website,
        price,
        free,
        version: query::first_text(root, &selectors::VERSION),
        updated: query::first_text(root, &selectors::UPDATED),
        required_android_version: query::first_text(root, &selectors::ANDROID_VERSION),
        content_rating: query::first_text(root, &selectors::CONTENT_RATING),
        size: query::first_text(root, &selectors::SIZE),
        min_installs,
        max_installs,
        score: text::parse_score(&query::first_text(rating_box, &selectors::SCORE)),
        reviews: text::clean_int(&query::first_text(rating_box, &selectors::REVIEWS_NUM)),
        histogram: star_histogram(query::first_element(root, &selectors::HISTOGRAM)),
        offers_iap: query::exists(root, &selectors::IAP_BADGE),
        ad_supported: query::exists(root, &selectors::ADS_BADGE),
        preregister: query::exists(root, &selectors::PREREGISTER),
        comments: reviews::extract_reviews(doc)?,
    };

    tracing::debug!(
        app_id,
        title = %record.title,
        comments = record.comments.len(),
        "extracted details page"
    );
    Ok(record)
}

/// The description region holds duplicate blocks where only one is
/// visually active; keep the blocks not marked `display:none` and
/// flatten them to plain text. The raw markup of the first kept block
/// becomes `descriptionHTML`.
fn description_blocks(sections: Option<ElementRef<'_>>) -> (String, Option<String>) {
    let kept: Vec<ElementRef<'_>> = sections
        .into_iter()
        .flat_map(|s| s.select(&selectors::DESCRIPTION_BLOCKS))
        .filter(|block| !is_inline_hidden(block))
        .collect();
    let description = kept
        .iter()
        .map(|block| text::flatten_text(*block))
        .filter(|flat| !flat.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let description_html = kept.first().map(|block| block.inner_html());
    (description, description_html)
}

fn is_inline_hidden(block: &ElementRef<'_>) -> bool {
    block
        .value()
        .attr("style")
        .map(|style| {
            let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
            compact.contains("display:none")
        })
        .unwrap_or(false)
}

/// Find-first over the developer link anchors: the first `mailto:`
/// target (prefix stripped) and the first `http` target. The latter is
/// a redirector wrapping the real site in its `q` query parameter.
fn developer_links(root: Option<ElementRef<'_>>) -> (Option<String>, Option<String>) {
    let hrefs = query::all_attrs(root, &selectors::DEV_LINKS, "href");
    let email = hrefs
        .iter()
        .find_map(|href| href.strip_prefix("mailto:").map(String::from));
    let website = hrefs
        .iter()
        .find(|href| href.starts_with("http"))
        .and_then(|href| unwrap_redirector(href));
    (email, website)
}

fn unwrap_redirector(href: &str) -> Option<String> {
    let parsed = Url::parse(href).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
}

/// Install counts come as `"<min> - <max>"` or a single `"<min>+"`
/// bound. A second side that is missing or cleans to zero leaves
/// `maxInstalls` absent.
fn split_installs(raw: &str) -> (u64, Option<u64>) {
    let mut parts = raw.splitn(2, " - ");
    let min = text::clean_int(parts.next().unwrap_or_default());
    let max = parts.next().map(text::clean_int).filter(|n| *n > 0);
    (min, max)
}

/// Five independent bucket reads; a missing bucket is 0, so the map
/// always carries exactly the keys 1 through 5.
fn star_histogram(scope: Option<ElementRef<'_>>) -> BTreeMap<u8, u64> {
    selectors::HISTOGRAM_BARS
        .iter()
        .enumerate()
        .map(|(i, bar)| (i as u8 + 1, text::clean_int(&query::first_text(scope, bar))))
        .collect()
}
