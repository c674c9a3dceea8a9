//! Offers and needs: a user's supply/demand listings.
//!
//! The two are the same shape; [`ListingKind`] selects which collection a
//! listing lives in. Listings are soft-deleted only (archive/unarchive) so
//! history stays available for audit and re-activation.

use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Title;
use crate::ids::{ListingId, ProfileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Offer,
    Need,
}

impl ListingKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ListingKind::Offer => "offer",
            ListingKind::Need => "need",
        }
    }
}

/// One offer or need, owned by exactly one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub owner: ProfileId,
    pub title: Title,
    pub tags: Vec<String>,
    /// Positive by construction; higher floats the listing in match input.
    pub priority: NonZeroU32,
    pub expires_on: Option<DateTime<Utc>>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new listing; id, owner, and the active
/// archive state are assigned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: Title,
    pub tags: Vec<String>,
    pub priority: NonZeroU32,
    pub expires_on: Option<DateTime<Utc>>,
}

impl ListingDraft {
    /// Draft with default priority and no tags, the common quick-add path.
    #[must_use]
    pub fn titled(title: Title) -> Self {
        Self {
            title,
            tags: Vec::new(),
            priority: NonZeroU32::MIN,
            expires_on: None,
        }
    }
}
