//! Google Play details-page scraper
//!
//! Fetches one app's store listing and extracts a structured
//! [`AppRecord`] from its markup:
//! - CSS-selector field mapping (title, pricing, installs, media)
//! - Review cards with star ratings
//! - Rating histogram and aggregate score
//!
//! Absent page regions degrade to empty/default field values; only a
//! review card with an unreadable star rating fails a call (see
//! [`Error`]).

pub mod client;
pub mod error;
pub mod extractors;
pub mod model;
pub mod selectors;

pub use client::*;
pub use error::*;
pub use extractors::*;
pub use model::*;
