//! Blueprint listing repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use bphub_core::{
    Author, Blueprint, BlueprintCard, BlueprintKind, BlueprintRepository, Error, Exposure, Result,
    SearchFilter, Viewer,
};

use crate::escape_like;

/// Type-safe parameter binding for SQL queries.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    /// Integer parameter.
    Int(i64),
    /// String parameter.
    Text(String),
}

/// Generates the listing WHERE clause for a `(SearchFilter, Viewer)` pair.
///
/// Soft-deleted and unpublished rows are always excluded. Non-public rows
/// match only when the viewer is the author. The term matches
/// case-insensitively as a title substring, with LIKE wildcards in user
/// input neutralized.
///
/// # Example
///
/// ```rust,ignore
/// let builder = ListingQueryBuilder::new(&filter, &viewer, 0);
/// let (clause, params) = builder.build();
/// // clause: "b.deleted_at IS NULL AND b.published_at IS NOT NULL AND ..."
/// ```
pub struct ListingQueryBuilder<'a> {
    filter: &'a SearchFilter,
    viewer: &'a Viewer,
    param_offset: usize,
}

impl<'a> ListingQueryBuilder<'a> {
    /// Create a new builder.
    ///
    /// `param_offset` is the number of parameters already present in the
    /// surrounding query.
    pub fn new(filter: &'a SearchFilter, viewer: &'a Viewer, param_offset: usize) -> Self {
        Self {
            filter,
            viewer,
            param_offset,
        }
    }

    /// Build the WHERE clause fragment and its parameters, in bind order.
    pub fn build(&self) -> (String, Vec<QueryParam>) {
        let mut clauses: Vec<String> = Vec::new();
        let mut params = Vec::new();
        let mut param_idx = self.param_offset;

        clauses.push("b.deleted_at IS NULL".to_string());
        clauses.push("b.published_at IS NOT NULL".to_string());

        match self.viewer {
            Viewer::Anonymous => {
                clauses.push("b.exposure = 'public'".to_string());
            }
            Viewer::User(id) => {
                param_idx += 1;
                clauses.push(format!(
                    "(b.exposure = 'public' OR b.author_id = ${})",
                    param_idx
                ));
                params.push(QueryParam::Int(*id));
            }
        }

        if !self.filter.term.is_empty() {
            param_idx += 1;
            clauses.push(format!("b.title ILIKE ${} ESCAPE '\\'", param_idx));
            params.push(QueryParam::Text(format!(
                "%{}%",
                escape_like(&self.filter.term)
            )));
        }

        if let Some(kind) = self.filter.kind {
            param_idx += 1;
            clauses.push(format!("b.type = ${}", param_idx));
            params.push(QueryParam::Text(kind.db_tag().to_string()));
        }

        if let Some(version) = &self.filter.ue_version {
            param_idx += 1;
            clauses.push(format!("b.ue_version = ${}", param_idx));
            params.push(QueryParam::Text(version.clone()));
        }

        (clauses.join(" AND "), params)
    }
}

/// PostgreSQL implementation of [`BlueprintRepository`].
pub struct PgBlueprintRepository {
    pool: Pool<Postgres>,
}

impl PgBlueprintRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map a joined row to a [`BlueprintCard`].
fn map_row_to_card(row: &PgRow) -> Result<BlueprintCard> {
    let kind_tag: String = row.get("kind");
    let kind = BlueprintKind::from_db_tag(&kind_tag)
        .ok_or_else(|| Error::Internal(format!("unknown blueprint type in row: {kind_tag}")))?;

    let exposure_tag: String = row.get("exposure");
    let exposure = Exposure::from_db_tag(&exposure_tag)
        .ok_or_else(|| Error::Internal(format!("unknown exposure in row: {exposure_tag}")))?;

    Ok(BlueprintCard {
        blueprint: Blueprint {
            id: row.get("id"),
            author_id: row.get("author_id"),
            slug: row.get("slug"),
            title: row.get("title"),
            kind,
            ue_version: row.get("ue_version"),
            exposure,
            created_at: row.get("created_at"),
            published_at: row.get("published_at"),
            deleted_at: row.get("deleted_at"),
        },
        author: Author {
            id: row.get("author_id"),
            display_name: row.get("author_name"),
            slug: row.get("author_slug"),
        },
    })
}

#[async_trait]
impl BlueprintRepository for PgBlueprintRepository {
    async fn count(&self, filter: &SearchFilter, viewer: &Viewer) -> Result<i64> {
        let (clause, params) = ListingQueryBuilder::new(filter, viewer, 0).build();
        let sql = format!("SELECT COUNT(*) FROM blueprint b WHERE {clause}");

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for param in params {
            query = match param {
                QueryParam::Int(i) => query.bind(i),
                QueryParam::Text(s) => query.bind(s),
            };
        }

        let total = query.fetch_one(&self.pool).await.map_err(Error::Database)?;

        tracing::debug!(
            subsystem = "db",
            component = "listing",
            op = "count",
            result_count = total,
            "Counted matching blueprints"
        );
        Ok(total)
    }

    async fn fetch_page(
        &self,
        filter: &SearchFilter,
        viewer: &Viewer,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlueprintCard>> {
        let (clause, params) = ListingQueryBuilder::new(filter, viewer, 0).build();
        let limit_idx = params.len() + 1;
        let offset_idx = params.len() + 2;
        let sql = format!(
            "SELECT b.id, b.author_id, b.slug, b.title, b.type AS kind, b.ue_version, \
             b.exposure, b.created_at, b.published_at, b.deleted_at, \
             a.display_name AS author_name, a.slug AS author_slug \
             FROM blueprint b \
             JOIN author a ON a.id = b.author_id \
             WHERE {clause} \
             ORDER BY b.published_at DESC, b.id DESC \
             LIMIT ${limit_idx} OFFSET ${offset_idx}"
        );

        let mut query = sqlx::query(&sql);
        for param in params {
            query = match param {
                QueryParam::Int(i) => query.bind(i),
                QueryParam::Text(s) => query.bind(s),
            };
        }
        query = query.bind(limit).bind(offset);

        let rows = query.fetch_all(&self.pool).await.map_err(Error::Database)?;
        let cards = rows
            .iter()
            .map(map_row_to_card)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            subsystem = "db",
            component = "listing",
            op = "fetch_page",
            result_count = cards.len(),
            "Fetched listing page"
        );
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_clause_restricts_to_public() {
        let filter = SearchFilter::default();
        let (clause, params) = ListingQueryBuilder::new(&filter, &Viewer::Anonymous, 0).build();
        assert!(clause.contains("b.deleted_at IS NULL"));
        assert!(clause.contains("b.published_at IS NOT NULL"));
        assert!(clause.contains("b.exposure = 'public'"));
        assert!(!clause.contains("author_id"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_authenticated_clause_includes_ownership() {
        let filter = SearchFilter::default();
        let (clause, params) = ListingQueryBuilder::new(&filter, &Viewer::User(42), 0).build();
        assert!(clause.contains("(b.exposure = 'public' OR b.author_id = $1)"));
        assert_eq!(params, vec![QueryParam::Int(42)]);
    }

    #[test]
    fn test_term_uses_ilike_with_escaped_wildcards() {
        let filter = SearchFilter {
            term: "100%_done".to_string(),
            ..Default::default()
        };
        let (clause, params) = ListingQueryBuilder::new(&filter, &Viewer::Anonymous, 0).build();
        assert!(clause.contains("b.title ILIKE $1 ESCAPE '\\'"));
        assert_eq!(
            params,
            vec![QueryParam::Text("%100\\%\\_done%".to_string())]
        );
    }

    #[test]
    fn test_kind_binds_db_tag_not_wire_tag() {
        let filter = SearchFilter {
            kind: Some(BlueprintKind::BehaviorTree),
            ..Default::default()
        };
        let (clause, params) = ListingQueryBuilder::new(&filter, &Viewer::Anonymous, 0).build();
        assert!(clause.contains("b.type = $1"));
        assert_eq!(params, vec![QueryParam::Text("behavior_tree".to_string())]);
    }

    #[test]
    fn test_param_indices_follow_bind_order() {
        let filter = SearchFilter {
            term: "pad".to_string(),
            kind: Some(BlueprintKind::Niagara),
            ue_version: Some("5.4".to_string()),
            ..Default::default()
        };
        let (clause, params) = ListingQueryBuilder::new(&filter, &Viewer::User(7), 0).build();
        assert!(clause.contains("b.author_id = $1"));
        assert!(clause.contains("b.title ILIKE $2"));
        assert!(clause.contains("b.type = $3"));
        assert!(clause.contains("b.ue_version = $4"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_param_offset_shifts_indices() {
        let filter = SearchFilter {
            term: "pad".to_string(),
            ..Default::default()
        };
        let (clause, _) = ListingQueryBuilder::new(&filter, &Viewer::Anonymous, 2).build();
        assert!(clause.contains("b.title ILIKE $3"));
    }
}
