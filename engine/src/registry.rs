//! Offer/need registry: add plus the reversible archive lifecycle.
//!
//! There is deliberately no hard delete: archived listings stay around for
//! audit and can be reactivated.

use chrono::{DateTime, Utc};

use introspark_types::{Listing, ListingDraft, ListingId, ListingKind};

use crate::{Engine, EngineError};

/// The active/archived partitions of one listing collection, each in
/// insertion order.
#[derive(Debug)]
pub struct ListingView<'a> {
    pub active: Vec<&'a Listing>,
    pub archived: Vec<&'a Listing>,
}

impl Engine {
    /// Add a listing to the given collection. Title validity and positive
    /// priority are already guaranteed by the draft's types.
    pub fn add_listing(
        &mut self,
        kind: ListingKind,
        draft: ListingDraft,
        now: DateTime<Utc>,
    ) -> ListingId {
        let id = ListingId::new();
        let listing = Listing {
            id,
            owner: self.state.profile.id,
            title: draft.title,
            tags: draft.tags,
            priority: draft.priority,
            expires_on: draft.expires_on,
            archived: false,
            created_at: now,
        };
        tracing::debug!(kind = kind.label(), %id, title = %listing.title, "listing added");
        self.collection_mut(kind).push(listing);
        id
    }

    /// Soft-delete. Archiving an already-archived listing is a no-op
    /// success; only a missing id is an error.
    pub fn archive_listing(&mut self, kind: ListingKind, id: ListingId) -> Result<(), EngineError> {
        self.set_archived(kind, id, true)
    }

    /// Reactivate. Idempotent like [`Engine::archive_listing`].
    pub fn unarchive_listing(
        &mut self,
        kind: ListingKind,
        id: ListingId,
    ) -> Result<(), EngineError> {
        self.set_archived(kind, id, false)
    }

    /// Both partitions of a collection, insertion order preserved.
    #[must_use]
    pub fn listings(&self, kind: ListingKind) -> ListingView<'_> {
        let (active, archived) = self
            .collection(kind)
            .iter()
            .partition(|listing| !listing.archived);
        ListingView { active, archived }
    }

    /// Active needs only - the slice the match generator consumes.
    #[must_use]
    pub fn active_needs(&self) -> Vec<&Listing> {
        self.listings(ListingKind::Need).active
    }

    fn set_archived(
        &mut self,
        kind: ListingKind,
        id: ListingId,
        archived: bool,
    ) -> Result<(), EngineError> {
        let entity = kind.label();
        let listing = self
            .collection_mut(kind)
            .iter_mut()
            .find(|listing| listing.id == id)
            .ok_or_else(|| EngineError::not_found(entity, id))?;
        listing.archived = archived;
        Ok(())
    }

    fn collection(&self, kind: ListingKind) -> &Vec<Listing> {
        match kind {
            ListingKind::Offer => &self.state.offers,
            ListingKind::Need => &self.state.needs,
        }
    }

    fn collection_mut(&mut self, kind: ListingKind) -> &mut Vec<Listing> {
        match kind {
            ListingKind::Offer => &mut self.state.offers,
            ListingKind::Need => &mut self.state.needs,
        }
    }
}
