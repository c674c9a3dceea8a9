//! Core domain types for IntroSpark.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application. Mutation with
//! real effects (ledger retention, match consumption, token issuance) lives in
//! `introspark-engine`; types here only carry data and the invariant-preserving
//! arithmetic that needs no surrounding state.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod card;
mod chat;
mod contact;
mod credit;
mod ids;
mod intro;
mod listing;
mod profile;

pub use card::{BusinessCard, CardDraft, CardTemplate, CardTheme};
pub use chat::{ChatMessage, ChatThread};
pub use contact::{CardScan, Contact, ContactDraft, ParsedCard, ScanStatus};
pub use credit::{CreditEntry, CreditLedger, CreditWallet, DebitOutcome, LEDGER_RETENTION};
pub use ids::{
    CardId, ContactId, EntryId, IntroId, IntroToken, ListingId, MatchId, MessageId, ProfileId,
    ScanId, ShareSlug, ThreadId,
};
pub use intro::{
    Intro, IntroOutcome, IntroStatus, Match, MatchBatchKind, MatchType, TimeSlot,
};
pub use listing::{Listing, ListingDraft, ListingKind};
pub use profile::{Account, BniMembership, BniRole, Profile, ProfileUpdate};

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Title
// ============================================================================

/// A listing title guaranteed to be non-empty (after trimming).
///
/// Offers and needs are matched on their titles, so an empty title would be
/// meaningless input to the match generator. Validity is enforced by
/// construction; `serde` round-trips through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

#[derive(Debug, Error)]
#[error("listing title must not be empty")]
pub struct EmptyTitleError;

impl Title {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyTitleError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyTitleError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Title {
    type Error = EmptyTitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Title {
    type Error = EmptyTitleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

impl Deref for Title {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
