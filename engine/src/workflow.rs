//! The match/intro workflow: suggestion batches, intro requests, and the
//! public magic-link acceptance surface.
//!
//! ```text
//! begin_match_generation ──> collaborator ──> apply_match_batch
//!         (debit)                                (replace wholesale)
//!
//! request_intro: Match ──consumed──> Intro { Pending, fresh token }
//! skip_match:    Match ──consumed──> (nothing)
//! accept_intro_by_token: Pending/Accepted ──> Scheduled + meeting_time
//! record_intro_outcome:  ──> Done + outcome
//! ```

use std::num::NonZeroU64;

use chrono::{DateTime, Utc};

use introspark_providers::{MatchGenerator, MatchRequest};
use introspark_types::{
    DebitOutcome, Intro, IntroId, IntroOutcome, IntroStatus, IntroToken, Match, MatchBatchKind,
    MatchId, TimeSlot,
};

use crate::{Engine, EngineError, MATCH_BATCH_COST, MATCHDAY_BATCH_COST};

/// Correlation id for one match-generation run.
///
/// Only the newest ticket can merge its batch: starting a new generation
/// invalidates any ticket issued earlier, so a late response from an
/// abandoned run can never clobber fresher suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

/// Result of offering a batch back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum BatchMerge {
    /// The batch replaced the suggestion list.
    Applied,
    /// The ticket was stale; the batch was discarded and state is unchanged.
    Stale,
}

/// Ledger action label for a batch kind.
fn batch_action(kind: MatchBatchKind) -> &'static str {
    match kind {
        MatchBatchKind::Regular => "Generate Matches",
        MatchBatchKind::BniMatchday => "Generate BNI Matchday",
    }
}

fn batch_cost(kind: MatchBatchKind) -> NonZeroU64 {
    match kind {
        MatchBatchKind::Regular => MATCH_BATCH_COST,
        MatchBatchKind::BniMatchday => MATCHDAY_BATCH_COST,
    }
}

impl Engine {
    // ------------------------------------------------------------------
    // Suggestion batches
    // ------------------------------------------------------------------

    /// Debit the batch cost and open a generation run.
    ///
    /// Returns [`EngineError::InsufficientCredits`] (and debits nothing)
    /// when the wallet cannot cover the cost; the generation must then not
    /// be started. Any previously open run is superseded: its ticket goes
    /// stale immediately.
    pub fn begin_match_generation(
        &mut self,
        kind: MatchBatchKind,
        now: DateTime<Utc>,
    ) -> Result<GenerationTicket, EngineError> {
        let action = batch_action(kind);
        let cost = batch_cost(kind);
        match self.debit_credits(action, cost, now) {
            DebitOutcome::Applied => {
                self.next_ticket += 1;
                let ticket = GenerationTicket(self.next_ticket);
                self.in_flight = Some(ticket);
                tracing::debug!(action, ticket = ticket.0, "match generation started");
                Ok(ticket)
            }
            DebitOutcome::InsufficientFunds => Err(EngineError::InsufficientCredits {
                action,
                cost: cost.get(),
                balance: self.state.wallet.balance,
            }),
        }
    }

    /// Merge a finished generation run: the batch replaces the current
    /// suggestion list wholesale - iff the ticket is still the current one.
    pub fn apply_match_batch(&mut self, ticket: GenerationTicket, batch: Vec<Match>) -> BatchMerge {
        if self.in_flight != Some(ticket) {
            tracing::warn!(ticket = ticket.0, "stale match batch discarded");
            return BatchMerge::Stale;
        }
        self.in_flight = None;
        tracing::debug!(count = batch.len(), "match batch applied");
        self.state.matches = batch;
        BatchMerge::Applied
    }

    /// Drive a whole generation run: debit, call the collaborator, merge.
    ///
    /// The engine does not retry or validate the collaborator's output; a
    /// failed call surfaces as [`EngineError::Provider`] with the debit
    /// already taken. Generation is charged up front, not on delivery.
    pub async fn generate_matches(
        &mut self,
        kind: MatchBatchKind,
        generator: &dyn MatchGenerator,
        now: DateTime<Utc>,
    ) -> Result<BatchMerge, EngineError> {
        let ticket = self.begin_match_generation(kind, now)?;
        let request = MatchRequest {
            profile: self.state.profile.clone(),
            needs: self.active_needs().into_iter().cloned().collect(),
            kind,
        };
        let batch = generator.generate(request).await?;
        Ok(self.apply_match_batch(ticket, batch))
    }

    // ------------------------------------------------------------------
    // Request / skip
    // ------------------------------------------------------------------

    /// Turn a suggestion into a pending intro - the sole intro creation
    /// path. The match is consumed: it leaves the suggestion list and can
    /// be neither requested again nor skipped afterwards.
    pub fn request_intro(
        &mut self,
        match_id: MatchId,
        slot: TimeSlot,
        prep_brief: String,
        now: DateTime<Utc>,
    ) -> Result<IntroId, EngineError> {
        let consumed = self.consume_match(match_id)?;
        let intro = Intro {
            id: IntroId::new(),
            requester: self.state.profile.id,
            target: consumed.other_user,
            target_name: consumed.name,
            target_headline: consumed.headline,
            target_photo_url: consumed.photo_url,
            reason: consumed.reason,
            status: IntroStatus::Pending,
            proposed_times: vec![slot],
            meeting_time: None,
            notes: None,
            outcome: None,
            token: self.fresh_token(),
            prep_brief,
            requested_at: now,
        };
        let id = intro.id;
        tracing::info!(intro = %id, target = %intro.target_name, "intro requested");
        self.state.intros.insert(0, intro);
        Ok(id)
    }

    /// Discard a suggestion without creating anything.
    pub fn skip_match(&mut self, match_id: MatchId) -> Result<(), EngineError> {
        self.consume_match(match_id).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Public acceptance surface
    // ------------------------------------------------------------------

    /// Render-side lookup for the public accept page.
    #[must_use]
    pub fn intro_by_token(&self, token: &IntroToken) -> Option<&Intro> {
        self.state
            .intros
            .iter()
            .find(|intro| &intro.token == token)
    }

    /// Accept an intro via its magic link.
    ///
    /// Token possession is the whole credential - there is no session on
    /// this surface, so the lookup is strictly by token. The link is
    /// single-use: a token that matches nothing schedulable (unknown,
    /// already scheduled, or closed out) reports not-found and changes
    /// nothing.
    pub fn accept_intro_by_token(
        &mut self,
        token: &IntroToken,
        meeting_time: DateTime<Utc>,
    ) -> Result<IntroId, EngineError> {
        let intro = self
            .state
            .intros
            .iter_mut()
            .find(|intro| &intro.token == token && intro.status.can_schedule())
            .ok_or_else(|| EngineError::not_found("intro token", token))?;
        intro.status = IntroStatus::Scheduled;
        intro.meeting_time = Some(meeting_time);
        tracing::info!(intro = %intro.id, %meeting_time, "intro scheduled via magic link");
        Ok(intro.id)
    }

    // ------------------------------------------------------------------
    // Terminal progression
    // ------------------------------------------------------------------

    /// Log the post-meeting outcome and close the intro out. The record is
    /// retained for history, never deleted.
    pub fn record_intro_outcome(
        &mut self,
        id: IntroId,
        outcome: IntroOutcome,
    ) -> Result<(), EngineError> {
        let intro = self
            .state
            .intros
            .iter_mut()
            .find(|intro| intro.id == id)
            .ok_or_else(|| EngineError::not_found("intro", id))?;
        intro.status = IntroStatus::Done;
        intro.outcome = Some(outcome);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn consume_match(&mut self, match_id: MatchId) -> Result<Match, EngineError> {
        let position = self
            .state
            .matches
            .iter()
            .position(|m| m.id == match_id)
            .ok_or_else(|| EngineError::not_found("match", match_id))?;
        Ok(self.state.matches.remove(position))
    }

    /// A token distinct from every token issued so far.
    fn fresh_token(&self) -> IntroToken {
        loop {
            let token = IntroToken::generate();
            if self.state.intros.iter().all(|intro| intro.token != token) {
                return token;
            }
        }
    }
}
