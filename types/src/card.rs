//! Shareable digital business cards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{CardId, ProfileId, ShareSlug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardTemplate {
    A,
    B,
    C,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTheme {
    pub color: String,
}

/// A saved business card.
///
/// The share slug is assigned at creation and never changes; the view
/// counter only moves up (incremented by the public card surface).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCard {
    pub id: CardId,
    pub owner: ProfileId,
    pub template: CardTemplate,
    pub theme: CardTheme,
    /// Open key space: name/headline/email/phone, plus chapter/industry on
    /// BNI cards - keys are documented, not enumerated.
    pub fields: BTreeMap<String, String>,
    pub qr_url: String,
    pub share_slug: ShareSlug,
    pub views: u64,
}

/// Caller-supplied fields for a new card; id, owner, slug, and the zeroed
/// view counter are assigned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    pub template: CardTemplate,
    pub theme: CardTheme,
    pub fields: BTreeMap<String, String>,
    pub qr_url: String,
}
