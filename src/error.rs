//! Failure kinds surfaced by a fetch or extraction.

use thiserror::Error;

/// Everything that can go wrong while fetching and extracting one
/// details page.
///
/// Missing nodes and attributes are not errors (they resolve to the
/// per-field defaults), so the enum stays small: the transport can fail,
/// and a review's star rating can be unreadable.
#[derive(Debug, Error)]
pub enum Error {
    /// The page could not be fetched: connection failure, timeout, or a
    /// non-2xx status. Both HTTP clients funnel into this one shape, so
    /// callers never see a client-specific error type.
    #[error("request for {url} failed: {message}")]
    Transport { url: String, message: String },

    /// A review's star rating could not be read from its accessibility
    /// label. Ratings are load-bearing, so this aborts the whole
    /// extraction rather than producing a partial record.
    #[error("review {index}: no star rating 1-5 in aria-label {label:?}")]
    ReviewRating {
        /// Document-order position of the offending review node.
        index: usize,
        /// The label as found; `None` when the attribute was missing.
        label: Option<String>,
    },
}
