//! Search filter construction from raw request parameters.
//!
//! Raw query parameters are normalized into a typed [`SearchFilter`].
//! Unknown kind/version values are forgiving: they mean "no filter", never
//! an error, so stale or hand-crafted links keep working.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::BlueprintKind;

/// Query parameter carrying the free-text search term.
pub const PARAM_TERM: &str = "form-search-input-query";

/// Query parameter carrying the blueprint kind.
pub const PARAM_TYPE: &str = "form-search-select-type";

/// Query parameter carrying the engine version label.
pub const PARAM_VERSION: &str = "form-search-select-ue_version";

/// Query parameter carrying the 1-based page number.
pub const PARAM_PAGE: &str = "page";

/// Normalized, typed search filter. Constructed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Trimmed free-text term; empty means "no term filter".
    pub term: String,
    /// Kind filter; `None` means all kinds.
    pub kind: Option<BlueprintKind>,
    /// Engine version filter; `None` means all versions.
    pub ue_version: Option<String>,
    /// Requested page, always >= 1. The pager clamps the upper bound.
    pub page: u32,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            term: String::new(),
            kind: None,
            ue_version: None,
            page: 1,
        }
    }
}

impl SearchFilter {
    /// Build a filter from decoded request parameters.
    ///
    /// `known_versions` is the externally supplied list of engine version
    /// labels; values outside it are treated as "no filter".
    pub fn from_params(params: &HashMap<String, String>, known_versions: &[&str]) -> Self {
        let term = params
            .get(PARAM_TERM)
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        let kind = params
            .get(PARAM_TYPE)
            .and_then(|t| BlueprintKind::from_wire_tag(t));

        let ue_version = params
            .get(PARAM_VERSION)
            .filter(|v| known_versions.contains(&v.as_str()))
            .cloned();

        let page = params
            .get(PARAM_PAGE)
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        Self {
            term,
            kind,
            ue_version,
            page,
        }
    }

    /// True when no term/kind/version constraint is set.
    pub fn is_unconstrained(&self) -> bool {
        self.term.is_empty() && self.kind.is_none() && self.ue_version.is_none()
    }
}
