//! Visibility rules for blueprint listings.
//!
//! A blueprint is listed for a viewer iff it is neither soft-deleted nor
//! unpublished, and it is either public or owned by the viewer. Unlisted
//! blueprints remain reachable by direct link; that path does not go through
//! these listing predicates.

use crate::filter::SearchFilter;
use crate::models::{Blueprint, Exposure, Viewer};

/// The listing visibility invariant.
pub fn is_visible(item: &Blueprint, viewer: &Viewer) -> bool {
    if item.deleted_at.is_some() || item.published_at.is_none() {
        return false;
    }
    match item.exposure {
        Exposure::Public => true,
        Exposure::Unlisted | Exposure::Private => *viewer == Viewer::User(item.author_id),
    }
}

/// Full listing predicate: visibility AND the term/kind/version constraints.
///
/// The term matches case-insensitively as a substring of the title.
pub fn matches_listing(item: &Blueprint, filter: &SearchFilter, viewer: &Viewer) -> bool {
    if !is_visible(item, viewer) {
        return false;
    }
    if !filter.term.is_empty()
        && !item
            .title
            .to_lowercase()
            .contains(&filter.term.to_lowercase())
    {
        return false;
    }
    if let Some(kind) = filter.kind {
        if item.kind != kind {
            return false;
        }
    }
    if let Some(version) = &filter.ue_version {
        if &item.ue_version != version {
            return false;
        }
    }
    true
}
