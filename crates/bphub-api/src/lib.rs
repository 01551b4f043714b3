//! # bphub-api
//!
//! HTTP front door for the bphub listing engine: raw query decoding and the
//! search orchestration that the `/search` handler drives.

pub mod query;
pub mod search;

pub use query::{filter_or_default, parse_query};
pub use search::{page_href, run_search, ListingPage, SearchOutcome};
