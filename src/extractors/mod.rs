//! Details-page extraction modules
//!
//! Each module covers one slice of the page: `details` drives the
//! whole-record extraction, `reviews` handles the review cards, and
//! `text`/`query` hold the shared normalization and selection helpers.

mod details;
mod query;
mod reviews;
mod text;

pub use details::*;
pub use reviews::*;
pub use text::*;
