//! In-memory blueprint repository.
//!
//! A store double implementing [`BlueprintRepository`] over a plain vector,
//! applying the same visibility predicate and sort order as the PostgreSQL
//! implementation. Used by integration tests and local development; no
//! database required.

use async_trait::async_trait;

use bphub_core::{
    matches_listing, BlueprintCard, BlueprintRepository, Result, SearchFilter, Viewer,
};

/// In-memory implementation of [`BlueprintRepository`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBlueprintRepository {
    rows: Vec<BlueprintCard>,
}

impl MemoryBlueprintRepository {
    /// Create a repository over the given rows. Order does not matter;
    /// listing applies the fixed sort.
    pub fn new(rows: Vec<BlueprintCard>) -> Self {
        Self { rows }
    }

    fn matching(&self, filter: &SearchFilter, viewer: &Viewer) -> Vec<&BlueprintCard> {
        let mut rows: Vec<&BlueprintCard> = self
            .rows
            .iter()
            .filter(|card| matches_listing(&card.blueprint, filter, viewer))
            .collect();
        // published_at DESC, id DESC — same order the SQL repository emits.
        rows.sort_by(|a, b| {
            b.blueprint
                .published_at
                .cmp(&a.blueprint.published_at)
                .then(b.blueprint.id.cmp(&a.blueprint.id))
        });
        rows
    }
}

#[async_trait]
impl BlueprintRepository for MemoryBlueprintRepository {
    async fn count(&self, filter: &SearchFilter, viewer: &Viewer) -> Result<i64> {
        Ok(self.matching(filter, viewer).len() as i64)
    }

    async fn fetch_page(
        &self,
        filter: &SearchFilter,
        viewer: &Viewer,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlueprintCard>> {
        Ok(self
            .matching(filter, viewer)
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
