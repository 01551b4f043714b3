//! Listing fragment rendering.

use chrono::{DateTime, Utc};

use bphub_core::BlueprintCard;

use crate::escape::{escape_attr, escape_html};
use crate::time_ago::time_since;

/// Fixed empty-state text. Deliberately the same whether the filters matched
/// nothing or nothing exists at all.
pub const EMPTY_PLACEHOLDER: &str = "No blueprints for the moment";

/// Render one page of listing rows as an HTML fragment.
///
/// `now` is the request clock, used for the relative publish time.
pub fn render_listing(cards: &[BlueprintCard], now: DateTime<Utc>) -> String {
    if cards.is_empty() {
        return format!("<p class=\"blueprint-list-empty\">{EMPTY_PLACEHOLDER}</p>");
    }

    let mut out = String::from("<ul class=\"blueprint-list\">");
    for card in cards {
        out.push_str(&render_card(card, now));
    }
    out.push_str("</ul>");
    out
}

fn render_card(card: &BlueprintCard, now: DateTime<Utc>) -> String {
    let bp = &card.blueprint;

    let title_text = escape_html(&bp.title);
    let title_attr = escape_attr(&bp.title);
    let href = escape_attr(&format!("/blueprint/{}", bp.slug));
    let kind_label = escape_html(bp.kind.label());
    let version = escape_html(&bp.ue_version);
    let author_href = escape_attr(&format!("/user/{}", card.author.slug));
    let author_name = escape_html(&card.author.display_name);
    // Rows reaching the renderer are always published; created_at is a
    // harmless fallback rather than a panic path.
    let published = time_since(bp.published_at.unwrap_or(bp.created_at), now);

    format!(
        "<li class=\"blueprint-card\">\
         <a class=\"blueprint-card-title\" href=\"{href}\" title=\"{title_attr}\">{title_text}</a>\
         <span class=\"blueprint-card-type\">{kind_label}</span>\
         <span class=\"blueprint-card-version\">UE {version}</span>\
         <span class=\"blueprint-card-author\">by <a href=\"{author_href}\">{author_name}</a></span>\
         <span class=\"blueprint-card-published\">{published}</span>\
         </li>"
    )
}
