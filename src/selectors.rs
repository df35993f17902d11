//! CSS anchors for the details page.
//!
//! The extractor keys off stable attributes (`itemprop` values) and the
//! page's long-lived region classes rather than visual styling classes,
//! so markup drift lands in this one module.

use std::sync::LazyLock;

use scraper::Selector;

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("selector is statically valid")
}

/// Header region carrying title, developer, genres, pricing and icon.
pub static DETAILS_INFO: LazyLock<Selector> = LazyLock::new(|| sel(".details-info"));
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| sel("div.document-title"));
pub static DEVELOPER_NAME: LazyLock<Selector> = LazyLock::new(|| sel(r#"span[itemprop="name"]"#));
pub static GENRE: LazyLock<Selector> = LazyLock::new(|| sel(r#"span[itemprop="genre"]"#));
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| sel(r#"meta[itemprop="price"]"#));
pub static ICON: LazyLock<Selector> = LazyLock::new(|| sel("img.cover-image"));

/// The listing's promo line doubles as the page's meta description.
pub static SUMMARY_META: LazyLock<Selector> = LazyLock::new(|| sel(r#"meta[name="description"]"#));

/// Body region with the description, changelog and the metadata table.
pub static SECTION_CONTENTS: LazyLock<Selector> =
    LazyLock::new(|| sel(".details-section-contents"));
pub static DESCRIPTION_BLOCKS: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"div[itemprop="description"] div"#));
pub static DEV_LINKS: LazyLock<Selector> = LazyLock::new(|| sel("a.dev-link"));
pub static VERSION: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"div.content[itemprop="softwareVersion"]"#));
pub static UPDATED: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"div.content[itemprop="datePublished"]"#));
pub static ANDROID_VERSION: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"div.content[itemprop="operatingSystems"]"#));
pub static CONTENT_RATING: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"div.content[itemprop="contentRating"]"#));
pub static SIZE: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"div.content[itemprop="fileSize"]"#));
pub static INSTALLS: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"div.content[itemprop="numDownloads"]"#));
pub static RECENT_CHANGES: LazyLock<Selector> = LazyLock::new(|| sel(".recent-change"));

/// One node per user review.
pub static SINGLE_REVIEW: LazyLock<Selector> = LazyLock::new(|| sel(".single-review"));
pub static REVIEW_STARS: LazyLock<Selector> =
    LazyLock::new(|| sel(".review-info-star-rating > div"));
pub static REVIEW_AUTHOR: LazyLock<Selector> = LazyLock::new(|| sel(".author-name"));
pub static REVIEW_DATE: LazyLock<Selector> = LazyLock::new(|| sel(".review-date"));
pub static REVIEW_BODY: LazyLock<Selector> = LazyLock::new(|| sel(".review-body"));

pub static RATING_BOX: LazyLock<Selector> = LazyLock::new(|| sel(".rating-box"));
pub static REVIEWS_NUM: LazyLock<Selector> = LazyLock::new(|| sel("span.reviews-num"));
pub static SCORE: LazyLock<Selector> = LazyLock::new(|| sel("div.score"));
pub static HISTOGRAM: LazyLock<Selector> = LazyLock::new(|| sel(".rating-histogram"));
/// Bucket cells in star order 1 through 5.
pub static HISTOGRAM_BARS: LazyLock<[Selector; 5]> = LazyLock::new(|| {
    [
        sel(".one .bar-number"),
        sel(".two .bar-number"),
        sel(".three .bar-number"),
        sel(".four .bar-number"),
        sel(".five .bar-number"),
    ]
});

pub static THUMBNAILS: LazyLock<Selector> = LazyLock::new(|| sel(".thumbnails"));
pub static SCREENSHOT: LazyLock<Selector> = LazyLock::new(|| sel("img.screenshot"));
pub static VIDEO: LazyLock<Selector> =
    LazyLock::new(|| sel(".screenshots span.preview-overlay-container[data-video-url]"));

/// Presence-test badges: in-app purchases, ads, preregistration.
pub static IAP_BADGE: LazyLock<Selector> = LazyLock::new(|| sel(".inapp-msg"));
pub static ADS_BADGE: LazyLock<Selector> = LazyLock::new(|| sel(".ads-supported-label-msg"));
pub static PREREGISTER: LazyLock<Selector> =
    LazyLock::new(|| sel(".preregistration-container"));
