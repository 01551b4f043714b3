//! Centralized default constants for bphub.
//!
//! **This module is the single source of truth** for shared tunables.
//! Other crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// PAGINATION
// =============================================================================

/// Listing page size. Inherited from the original product; do not change
/// without confirming intent.
pub const PAGE_SIZE: u32 = 30;

/// Pages shown at each end of the pagination nav before a gap marker
/// collapses the rest.
pub const PAGES_PAIR_LIMIT: u32 = 1;

// =============================================================================
// SEARCH
// =============================================================================

/// Known engine version labels accepted by the search filter.
///
/// The list is supplied externally in principle; this is the shipped default.
pub const UE_VERSIONS: &[&str] = &[
    "4.27", "5.0", "5.1", "5.2", "5.3", "5.4", "5.5", "5.6",
];

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Interval between connection pool health log lines, in seconds.
pub const POOL_METRICS_INTERVAL_SECS: u64 = 60;
