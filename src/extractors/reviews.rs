//! User review extraction.
//!
//! Each `.single-review` card yields author, date, star rating and
//! comment. The rating comes from the `aria-label` of the star widget;
//! a card without a readable 1-5 rating fails the whole extraction,
//! since it means the page layout is no longer what we expect.

use scraper::{ElementRef, Html};

use crate::error::Error;
use crate::extractors::query;
use crate::model::Review;
use crate::selectors;

/// Extract every review card on the page, in document order.
pub fn extract_reviews(doc: &Html) -> Result<Vec<Review>, Error> {
    doc.select(&selectors::SINGLE_REVIEW)
        .enumerate()
        .map(|(index, node)| extract_review(index, node))
        .collect()
}

fn extract_review(index: usize, node: ElementRef<'_>) -> Result<Review, Error> {
    let label = query::first_attr(Some(node), &selectors::REVIEW_STARS, "aria-label");
    let rating = label
        .as_deref()
        .and_then(star_rating)
        .ok_or_else(|| Error::ReviewRating {
            index,
            label: label.clone(),
        })?;
    Ok(Review {
        author: query::first_text(Some(node), &selectors::REVIEW_AUTHOR),
        date: query::first_text(Some(node), &selectors::REVIEW_DATE),
        rating,
        comment: strip_full_review(&query::first_text(Some(node), &selectors::REVIEW_BODY)),
    })
}

/// First digit 1-5 in the localized aria-label, e.g.
/// "Rated 4 stars out of five stars".
fn star_rating(label: &str) -> Option<u8> {
    label
        .chars()
        .find(|c| ('1'..='5').contains(c))
        .map(|c| c as u8 - b'0')
}

/// The review body ends with a localized "Full Review" link caption;
/// drop it along with the surrounding whitespace.
fn strip_full_review(body: &str) -> String {
    body.strip_suffix("Full Review")
        .unwrap_or(body)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_card(label: &str, body: &str) -> String {
        format!(
            r#"<div class="single-review">
                <span class="author-name">Jane</span>
                <span class="review-date">August 1, 2016</span>
                <div class="review-info-star-rating">
                    <div aria-label="{label}"></div>
                </div>
                <div class="review-body">{body}</div>
            </div>"#
        )
    }

    #[test]
    fn extracts_rating_author_date_and_comment() {
        let html = review_card("Rated 4 stars out of five stars", "Nice app");
        let doc = Html::parse_document(&html);
        let reviews = extract_reviews(&doc).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating, 4);
        assert_eq!(reviews[0].author, "Jane");
        assert_eq!(reviews[0].date, "August 1, 2016");
        assert_eq!(reviews[0].comment, "Nice app");
    }

    #[test]
    fn strips_trailing_full_review_caption() {
        let html = review_card("Rated 5 stars out of five stars", "Great   Full Review");
        let doc = Html::parse_document(&html);
        let reviews = extract_reviews(&doc).unwrap();
        assert_eq!(reviews[0].comment, "Great");
    }

    #[test]
    fn digitless_label_fails_the_whole_extraction() {
        let good = review_card("Rated 5 stars out of five stars", "ok");
        let bad = review_card("no stars here", "broken");
        let doc = Html::parse_document(&format!("{good}{bad}"));
        let err = extract_reviews(&doc).unwrap_err();
        match err {
            Error::ReviewRating { index, label } => {
                assert_eq!(index, 1);
                assert_eq!(label.as_deref(), Some("no stars here"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_aria_label_fails_with_none() {
        let html = r#"<div class="single-review">
            <div class="review-info-star-rating"><div></div></div>
        </div>"#;
        let doc = Html::parse_document(html);
        let err = extract_reviews(&doc).unwrap_err();
        match err {
            Error::ReviewRating { index: 0, label: None } => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn page_without_reviews_is_empty() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(extract_reviews(&doc).unwrap().is_empty());
    }
}
