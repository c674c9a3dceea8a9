//! The address book: durable contacts and the card scans that feed it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ContactId, ProfileId, ScanId};

/// A durable address-book entry. Never auto-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub owner: ProfileId,
    pub name: String,
    pub role: String,
    pub org: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub website_url: String,
    pub socials: BTreeMap<String, String>,
    pub tags: Vec<String>,
    pub notes: String,
    pub last_touch_at: Option<DateTime<Utc>>,
    pub next_action_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for a new contact; identity and owner are assigned
/// by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub role: String,
    pub org: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub website_url: String,
    pub socials: BTreeMap<String, String>,
    pub tags: Vec<String>,
    pub notes: String,
}

/// Best-effort extraction from a photographed business card.
///
/// Every field is optional: the scanner fills what it could read. Promotion
/// to a [`Contact`] defaults absent fields to empty values, so promotion
/// never partially fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedCard {
    pub name: Option<String>,
    pub role: Option<String>,
    pub org: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub website_url: Option<String>,
    pub socials: Option<BTreeMap<String, String>>,
}

/// Scan lifecycle. Scans arrive externally in `New` or `Review`, move to
/// `Saved` exactly when promoted to a contact, and never revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    New,
    Review,
    Saved,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardScan {
    pub id: ScanId,
    pub owner: ProfileId,
    pub image_url: String,
    pub parsed: ParsedCard,
    pub confidence: f32,
    pub status: ScanStatus,
}

impl ParsedCard {
    /// Map the parsed fields into a contact draft, defaulting anything the
    /// scanner missed to empty values.
    #[must_use]
    pub fn into_draft(self, tags: Vec<String>, notes: String) -> ContactDraft {
        ContactDraft {
            name: self.name.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            org: self.org.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            website_url: self.website_url.unwrap_or_default(),
            socials: self.socials.unwrap_or_default(),
            tags,
            notes,
        }
    }
}
