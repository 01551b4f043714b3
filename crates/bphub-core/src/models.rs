//! Core data models for the bphub listing engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The seven blueprint content kinds.
///
/// Wire tags are kebab-case (`behavior-tree`), database tags are snake_case
/// (`behavior_tree`). Parsing is case-sensitive on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlueprintKind {
    Animation,
    BehaviorTree,
    Blueprint,
    Material,
    Metasound,
    Niagara,
    Pcg,
}

impl BlueprintKind {
    /// All kinds, in wire-tag order.
    pub const ALL: [BlueprintKind; 7] = [
        BlueprintKind::Animation,
        BlueprintKind::BehaviorTree,
        BlueprintKind::Blueprint,
        BlueprintKind::Material,
        BlueprintKind::Metasound,
        BlueprintKind::Niagara,
        BlueprintKind::Pcg,
    ];

    /// The URL-facing tag (`behavior-tree`).
    pub fn wire_tag(&self) -> &'static str {
        match self {
            BlueprintKind::Animation => "animation",
            BlueprintKind::BehaviorTree => "behavior-tree",
            BlueprintKind::Blueprint => "blueprint",
            BlueprintKind::Material => "material",
            BlueprintKind::Metasound => "metasound",
            BlueprintKind::Niagara => "niagara",
            BlueprintKind::Pcg => "pcg",
        }
    }

    /// The database column value (`behavior_tree`).
    pub fn db_tag(&self) -> &'static str {
        match self {
            BlueprintKind::Animation => "animation",
            BlueprintKind::BehaviorTree => "behavior_tree",
            BlueprintKind::Blueprint => "blueprint",
            BlueprintKind::Material => "material",
            BlueprintKind::Metasound => "metasound",
            BlueprintKind::Niagara => "niagara",
            BlueprintKind::Pcg => "pcg",
        }
    }

    /// Human-readable label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            BlueprintKind::Animation => "animation",
            BlueprintKind::BehaviorTree => "behavior tree",
            BlueprintKind::Blueprint => "blueprint",
            BlueprintKind::Material => "material",
            BlueprintKind::Metasound => "metasound",
            BlueprintKind::Niagara => "niagara",
            BlueprintKind::Pcg => "PCG",
        }
    }

    /// Parse a URL-facing tag. Case-sensitive; unknown values return `None`.
    pub fn from_wire_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.wire_tag() == tag)
    }

    /// Parse a database column value.
    pub fn from_db_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.db_tag() == tag)
    }
}

/// Visibility tier of a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exposure {
    /// Listed for everyone.
    Public,
    /// Reachable by direct link; listed only for the author.
    Unlisted,
    /// Reachable and listed only for the author.
    Private,
}

impl Exposure {
    /// The database column value.
    pub fn db_tag(&self) -> &'static str {
        match self {
            Exposure::Public => "public",
            Exposure::Unlisted => "unlisted",
            Exposure::Private => "private",
        }
    }

    /// Parse a database column value.
    pub fn from_db_tag(tag: &str) -> Option<Self> {
        match tag {
            "public" => Some(Exposure::Public),
            "unlisted" => Some(Exposure::Unlisted),
            "private" => Some(Exposure::Private),
            _ => None,
        }
    }
}

/// One blueprint entry as stored in the content table.
///
/// `published_at == None` means "not yet published"; `deleted_at != None`
/// means soft-deleted and excluded from every listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub id: i64,
    pub author_id: i64,
    pub slug: String,
    /// Free text, untrusted. Must be escaped on output.
    pub title: String,
    pub kind: BlueprintKind,
    /// Engine version label, e.g. "5.4".
    pub ue_version: String,
    pub exposure: Exposure,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Minimal author reference for rendering attribution.
///
/// `display_name` is untrusted text and must be escaped on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub display_name: String,
    pub slug: String,
}

/// One listing row: a blueprint joined with its author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintCard {
    pub blueprint: Blueprint,
    pub author: Author,
}

/// The requester's identity context, used only for visibility decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    User(i64),
}

impl Viewer {
    /// The authenticated user id, if any.
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Viewer::Anonymous => None,
            Viewer::User(id) => Some(*id),
        }
    }
}
