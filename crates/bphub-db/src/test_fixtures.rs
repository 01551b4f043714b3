//! Shared fixtures for listing tests.
//!
//! Compiled unconditionally so integration tests under `tests/` can use them.

use chrono::{DateTime, TimeZone, Utc};

use bphub_core::{Author, Blueprint, BlueprintCard, BlueprintKind, Exposure};

/// Fixed epoch base so fixture timestamps are deterministic.
const EPOCH_BASE: i64 = 1_700_000_000;

/// A deterministic timestamp `n` seconds after the fixture epoch.
pub fn second(n: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(EPOCH_BASE + n, 0)
        .single()
        .expect("fixture timestamp in range")
}

/// A fixture author derived from its id.
pub fn author(id: i64) -> Author {
    Author {
        id,
        display_name: format!("author-{id}"),
        slug: format!("author-{id}"),
    }
}

/// A published blueprint card with the given publish instant.
pub fn published_card(
    id: i64,
    author_id: i64,
    exposure: Exposure,
    published_at: DateTime<Utc>,
) -> BlueprintCard {
    BlueprintCard {
        blueprint: Blueprint {
            id,
            author_id,
            slug: format!("bp-{id}"),
            title: format!("Blueprint {id}"),
            kind: BlueprintKind::Blueprint,
            ue_version: "5.4".to_string(),
            exposure,
            created_at: second(0),
            published_at: Some(published_at),
            deleted_at: None,
        },
        author: author(author_id),
    }
}

/// An unpublished (draft) blueprint card.
pub fn draft_card(id: i64, author_id: i64, exposure: Exposure) -> BlueprintCard {
    let mut card = published_card(id, author_id, exposure, second(id));
    card.blueprint.published_at = None;
    card
}
