//! # bphub-db
//!
//! PostgreSQL listing repository for bphub.
//!
//! This crate provides:
//! - Connection pool management
//! - The parameterized listing query builder (visibility + search predicates)
//! - `PgBlueprintRepository`, the production content store
//! - `MemoryBlueprintRepository`, an in-memory double for tests

pub mod blueprints;
pub mod memory;
pub mod pool;

// Test fixtures for integration tests
pub mod test_fixtures;

// Re-export core types
pub use bphub_core::*;

/// Escape LIKE/ILIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub use blueprints::{ListingQueryBuilder, PgBlueprintRepository, QueryParam};
pub use memory::MemoryBlueprintRepository;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
