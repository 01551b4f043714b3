//! # bphub-core
//!
//! Core types, traits, and abstractions for the bphub listing engine.
//!
//! This crate provides the typed search filter, visibility rules, and
//! pagination computation that the database and rendering crates build on.

pub mod defaults;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod pager;
pub mod traits;
pub mod visibility;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::{
    SearchFilter, PARAM_PAGE, PARAM_TERM, PARAM_TYPE, PARAM_VERSION,
};
pub use models::{Author, Blueprint, BlueprintCard, BlueprintKind, Exposure, Viewer};
pub use pager::{PageLink, PageResolution, Pagination};
pub use traits::BlueprintRepository;
pub use visibility::{is_visible, matches_listing};
