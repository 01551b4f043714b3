//! # bphub-render
//!
//! Escaped HTML fragment rendering for bphub listings: list items, the
//! empty-state placeholder, relative publish times, and the pagination nav.
//!
//! Everything here is a pure transform — no I/O, no side effects. All
//! user-controlled text (titles, author names, type labels, slugs) goes
//! through context-appropriate escaping before it reaches the fragment.

pub mod escape;
pub mod listing;
pub mod pagination_nav;
pub mod time_ago;

pub use escape::{escape_attr, escape_html};
pub use listing::{render_listing, EMPTY_PLACEHOLDER};
pub use pagination_nav::render_pagination;
pub use time_ago::time_since;
