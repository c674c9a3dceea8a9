//! The IntroSpark state engine.
//!
//! One [`Engine`] owns one account's entire state tree and is the only thing
//! allowed to mutate it. Every operation is a synchronous `&mut self` method
//! performing one atomic read-modify-write; the async collaborator calls
//! (match generation, bio writing, the demo reply) suspend *between*
//! mutations, never in the middle of one, and merge their result with a
//! single method call on completion.
//!
//! Callers get read access through [`Engine::state`] and render whatever
//! slice they need; the engine never initiates UI changes. In a multi-tenant
//! service each user gets their own `Engine` behind a single writer (one
//! lock or actor per user) - there is no cross-user state to share.
//!
//! Lookups that miss return [`EngineError::NotFound`] rather than silently
//! doing nothing, so a stale id in the caller surfaces instead of masking a
//! bug. The one deliberate exception is archive/unarchive, which stays an
//! idempotent no-op success on an item already in the requested state.

mod cards;
mod contacts;
mod ledger;
mod messaging;
mod registry;
pub mod seed;
mod state;
mod workflow;


pub use registry::ListingView;
pub use state::AccountState;
pub use workflow::{BatchMerge, GenerationTicket};

use std::num::NonZeroU64;

use thiserror::Error;

use introspark_providers::{BioWriter, ProviderError};
use introspark_types::{CreditWallet, Listing, Profile, ProfileUpdate};

/// Credit cost of a regular match batch.
pub const MATCH_BATCH_COST: NonZeroU64 = NonZeroU64::new(10).unwrap();
/// Credit cost of a chapter-wide BNI matchday batch.
pub const MATCHDAY_BATCH_COST: NonZeroU64 = NonZeroU64::new(20).unwrap();
/// How far a nudge pushes a contact's next follow-up.
pub const NUDGE_INTERVAL_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The id (or token/slug) matched nothing; state is unchanged.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    /// The wallet could not cover a gated action. Flow control, not a
    /// fault: the action was aborted and no state moved.
    #[error("insufficient credits for {action}: cost {cost}, balance {balance}")]
    InsufficientCredits {
        action: &'static str,
        cost: u64,
        balance: u64,
    },
    /// A collaborator call failed. Any gating debit has already been taken;
    /// generation is charged up front, not on delivery.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl EngineError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        EngineError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// The single-writer state owner for one account.
#[derive(Debug)]
pub struct Engine {
    pub(crate) state: AccountState,
    /// Correlation id of the one in-flight match generation, if any.
    pub(crate) in_flight: Option<GenerationTicket>,
    pub(crate) next_ticket: u64,
}

impl Engine {
    /// Engine for a freshly created account.
    #[must_use]
    pub fn new(profile: Profile, wallet: CreditWallet) -> Self {
        Self {
            state: AccountState::new(profile, wallet),
            in_flight: None,
            next_ticket: 0,
        }
    }

    /// Read-only view of the whole state tree. Mutation only happens through
    /// the operation methods.
    #[must_use]
    pub fn state(&self) -> &AccountState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Profile & onboarding
    // ------------------------------------------------------------------

    /// Merge a partial profile update.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.state.profile.apply(update);
    }

    /// Finish onboarding: apply the collected profile fields, install the
    /// starter offers/needs wholesale, and mark the account ready.
    pub fn complete_onboarding(
        &mut self,
        update: ProfileUpdate,
        offers: Vec<Listing>,
        needs: Vec<Listing>,
    ) {
        self.state.profile.apply(update);
        self.state.offers = offers;
        self.state.needs = needs;
        self.state.profile.onboarding_completed = true;
        tracing::info!(profile = %self.state.profile.id, "onboarding completed");
    }

    /// Merge a collaborator-written bio into the profile.
    pub fn apply_generated_bio(&mut self, bio: String) {
        self.state.profile.bio = bio;
    }

    /// Drive the bio collaborator and merge its paragraph on completion.
    pub async fn refresh_bio(
        &mut self,
        links: Vec<String>,
        writer: &dyn BioWriter,
    ) -> Result<(), EngineError> {
        let bio = writer.write_bio(links).await?;
        self.apply_generated_bio(bio);
        Ok(())
    }
}
