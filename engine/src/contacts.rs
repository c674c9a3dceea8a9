//! Contact book operations, including card-scan promotion.

use chrono::{DateTime, Duration, Utc};

use introspark_types::{Contact, ContactDraft, ContactId, ScanId, ScanStatus};

use crate::{Engine, EngineError, NUDGE_INTERVAL_DAYS};

impl Engine {
    /// Add a contact; identity and owner are assigned here. Newest first.
    pub fn add_contact(&mut self, draft: ContactDraft) -> ContactId {
        let id = ContactId::new();
        self.state.contacts.insert(
            0,
            Contact {
                id,
                owner: self.state.profile.id,
                name: draft.name,
                role: draft.role,
                org: draft.org,
                email: draft.email,
                phone: draft.phone,
                city: draft.city,
                website_url: draft.website_url,
                socials: draft.socials,
                tags: draft.tags,
                notes: draft.notes,
                last_touch_at: None,
                next_action_at: None,
            },
        );
        id
    }

    /// Replace the whole record matched by its id. The caller supplies
    /// every field; there is no partial merge on this path.
    pub fn update_contact(&mut self, contact: Contact) -> Result<(), EngineError> {
        let slot = self
            .state
            .contacts
            .iter_mut()
            .find(|existing| existing.id == contact.id)
            .ok_or_else(|| EngineError::not_found("contact", contact.id))?;
        *slot = contact;
        Ok(())
    }

    /// Push the contact's next follow-up to `now + 7 days`, overwriting any
    /// prior value rather than extending it.
    pub fn nudge_contact(
        &mut self,
        id: ContactId,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, EngineError> {
        let contact = self
            .state
            .contacts
            .iter_mut()
            .find(|contact| contact.id == id)
            .ok_or_else(|| EngineError::not_found("contact", id))?;
        let next = now + Duration::days(NUDGE_INTERVAL_DAYS);
        contact.next_action_at = Some(next);
        tracing::debug!(contact = %id, next_action = %next, "nudge set");
        Ok(next)
    }

    /// Promote a card scan to a contact.
    ///
    /// Best-effort: absent parsed fields default to empty values, so the
    /// promotion always succeeds when the scan exists. The new contact is
    /// tagged `scanned-card` with a scan-date note, and the source scan
    /// moves to `Saved` (it never reverts).
    pub fn save_scan_as_contact(
        &mut self,
        scan_id: ScanId,
        now: DateTime<Utc>,
    ) -> Result<ContactId, EngineError> {
        let scan = self
            .state
            .scans
            .iter_mut()
            .find(|scan| scan.id == scan_id)
            .ok_or_else(|| EngineError::not_found("card scan", scan_id))?;
        let parsed = scan.parsed.clone();
        scan.status = ScanStatus::Saved;

        let draft = parsed.into_draft(
            vec!["scanned-card".to_string()],
            format!("Scanned from business card on {}", now.format("%Y-%m-%d")),
        );
        let id = self.add_contact(draft);
        tracing::info!(scan = %scan_id, contact = %id, "scan promoted to contact");
        Ok(id)
    }
}
