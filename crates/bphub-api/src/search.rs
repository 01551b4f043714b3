//! Search orchestration: count → resolve page → fetch → render.
//!
//! One count query and one page fetch per request, against the same store.
//! A row published between the two is an acceptable once-off off-by-one in a
//! listing; a failed read aborts the request with no partial render.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::debug;

use bphub_core::defaults::PAGE_SIZE;
use bphub_core::{
    BlueprintRepository, PageResolution, Pagination, Result, SearchFilter, Viewer, PARAM_PAGE,
    PARAM_TERM, PARAM_TYPE, PARAM_VERSION,
};
use bphub_render::{render_listing, render_pagination};

/// A rendered listing page plus the pagination metadata the surrounding
/// page template embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub html: String,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Outcome of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A page to render.
    Listing(ListingPage),
    /// Requested page was beyond the last one; the HTTP layer redirects to
    /// page 1 rather than rendering an empty 200.
    RedirectToFirstPage,
}

/// Run one search request end to end.
pub async fn run_search(
    repo: &dyn BlueprintRepository,
    filter: &SearchFilter,
    viewer: &Viewer,
    now: DateTime<Utc>,
) -> Result<SearchOutcome> {
    let start = Instant::now();

    let total = repo.count(filter, viewer).await?;

    let pagination = match Pagination::resolve(total, filter.page, PAGE_SIZE) {
        PageResolution::Resolved(p) => p,
        PageResolution::OutOfRange => {
            debug!(
                subsystem = "api",
                component = "search",
                op = "search",
                page = filter.page,
                result_count = total,
                "Requested page out of range, signaling redirect"
            );
            return Ok(SearchOutcome::RedirectToFirstPage);
        }
    };

    let cards = repo
        .fetch_page(filter, viewer, pagination.offset, pagination.limit)
        .await?;

    let mut html = render_listing(&cards, now);
    html.push_str(&render_pagination(&pagination, |n| page_href(filter, n)));

    debug!(
        subsystem = "api",
        component = "search",
        op = "search",
        query = %filter.term,
        page = pagination.current_page,
        total_pages = pagination.total_pages,
        result_count = cards.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Rendered listing page"
    );

    Ok(SearchOutcome::Listing(ListingPage {
        html,
        current_page: pagination.current_page,
        total_pages: pagination.total_pages,
    }))
}

/// Build the `/search` href for page `n`, preserving the filter parameters.
pub fn page_href(filter: &SearchFilter, page: u32) -> String {
    let mut pairs = Vec::new();
    if !filter.term.is_empty() {
        pairs.push(format!("{}={}", PARAM_TERM, urlencoding::encode(&filter.term)));
    }
    if let Some(kind) = filter.kind {
        pairs.push(format!("{}={}", PARAM_TYPE, kind.wire_tag()));
    }
    if let Some(version) = &filter.ue_version {
        pairs.push(format!("{}={}", PARAM_VERSION, urlencoding::encode(version)));
    }
    pairs.push(format!("{PARAM_PAGE}={page}"));
    format!("/search?{}", pairs.join("&"))
}
