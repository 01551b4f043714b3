//! Content store boundary for bphub.
//!
//! The listing core never writes to the store: one count plus one page fetch
//! per request. A failed read propagates as [`crate::Error::Database`]; the
//! core does not retry.

use async_trait::async_trait;

use crate::error::Result;
use crate::filter::SearchFilter;
use crate::models::{BlueprintCard, Viewer};

/// Read-only repository over the blueprint content table.
///
/// Implementations must apply the visibility invariant (soft-deleted and
/// unpublished rows excluded; non-public rows only for their author) and the
/// fixed sort order: `published_at` descending, ties broken by `id`
/// descending, so pagination is stable across requests.
#[async_trait]
pub trait BlueprintRepository: Send + Sync {
    /// Count rows matching the filter as seen by the viewer.
    async fn count(&self, filter: &SearchFilter, viewer: &Viewer) -> Result<i64>;

    /// Fetch one page of matching rows, joined with their authors.
    async fn fetch_page(
        &self,
        filter: &SearchFilter,
        viewer: &Viewer,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlueprintCard>>;
}
