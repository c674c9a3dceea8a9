//! Business cards and scan ingestion.

use introspark_types::{BusinessCard, CardDraft, CardId, CardScan, ScanId, ShareSlug};

use crate::{Engine, EngineError};

impl Engine {
    /// Save a card. The share slug is minted here, unique among this
    /// account's cards, and immutable for the card's lifetime.
    pub fn add_business_card(&mut self, draft: CardDraft) -> CardId {
        let id = CardId::new();
        let card = BusinessCard {
            id,
            owner: self.state.profile.id,
            template: draft.template,
            theme: draft.theme,
            fields: draft.fields,
            qr_url: draft.qr_url,
            share_slug: self.fresh_slug(),
            views: 0,
        };
        tracing::debug!(card = %id, slug = %card.share_slug, "business card saved");
        self.state.cards.push(card);
        id
    }

    /// Lookup for the public `/c/{slug}` surface. Slug possession is the
    /// only credential, mirroring the intro token.
    #[must_use]
    pub fn card_by_slug(&self, slug: &ShareSlug) -> Option<&BusinessCard> {
        self.state.cards.iter().find(|card| &card.share_slug == slug)
    }

    /// Count one public view. The counter only ever moves up.
    pub fn record_card_view(&mut self, slug: &ShareSlug) -> Result<u64, EngineError> {
        let card = self
            .state
            .cards
            .iter_mut()
            .find(|card| &card.share_slug == slug)
            .ok_or_else(|| EngineError::not_found("card slug", slug))?;
        card.views += 1;
        Ok(card.views)
    }

    /// Accept an externally produced scan into the review queue. Scan
    /// production (camera, OCR) happens outside the core.
    pub fn ingest_scan(&mut self, scan: CardScan) -> ScanId {
        let id = scan.id;
        self.state.scans.push(scan);
        id
    }

    fn fresh_slug(&self) -> ShareSlug {
        loop {
            let slug = ShareSlug::generate();
            if self.state.cards.iter().all(|card| card.share_slug != slug) {
                return slug;
            }
        }
    }
}
