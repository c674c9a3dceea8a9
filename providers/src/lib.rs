//! AI collaborator contracts.
//!
//! # Architecture
//!
//! The engine treats every AI-assisted step as an external asynchronous
//! collaborator with a fixed request/response contract:
//!
//! | Trait | Input | Output |
//! |-------|-------|--------|
//! | [`MatchGenerator`] | profile snapshot, active needs, batch kind | batch of exactly [`MATCH_BATCH_SIZE`] matches |
//! | [`BioWriter`] | profile/website links | one bio paragraph |
//! | [`BriefWriter`] | none | one prep-brief paragraph |
//! | [`SlotSuggester`] | none | at least one candidate time slot |
//! | [`ReplyWriter`] | thread preview | one counterpart reply line |
//!
//! How a backend produces its suggestions is out of scope here; the engine
//! merges whatever comes back without retrying or validating content. The
//! traits use boxed futures so backends stay object-safe and swappable -
//! the [`canned`] module ships demo implementations, and a networked
//! inference client would implement the same seams.

pub mod canned;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use introspark_types::{Listing, Match, MatchBatchKind, Profile, TimeSlot};

pub use introspark_types;

/// Every generation batch contains exactly this many matches.
pub const MATCH_BATCH_SIZE: usize = 5;

/// Collaborator future type alias.
pub type GenFut<'a, T> = Pin<Box<dyn Future<Output = Result<T, ProviderError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backend could not be reached at all.
    #[error("generation backend unavailable: {0}")]
    Unavailable(String),
    /// The backend answered but could not produce a usable result.
    #[error("generation failed: {0}")]
    Failed(String),
}

/// Input to one match-generation run: a snapshot of the requesting profile
/// and their active needs, plus which surface triggered the run.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub profile: Profile,
    pub needs: Vec<Listing>,
    pub kind: MatchBatchKind,
}

/// Produces a replacement batch of match suggestions.
pub trait MatchGenerator: Send + Sync {
    fn generate(&self, request: MatchRequest) -> GenFut<'_, Vec<Match>>;
}

/// Writes a profile bio from a list of URLs/profile links.
pub trait BioWriter: Send + Sync {
    fn write_bio(&self, links: Vec<String>) -> GenFut<'_, String>;
}

/// Writes a preparation brief for an upcoming introduction.
pub trait BriefWriter: Send + Sync {
    fn write_brief(&self) -> GenFut<'_, String>;
}

/// Suggests candidate meeting slots. The contract guarantees at least one.
pub trait SlotSuggester: Send + Sync {
    fn suggest_slots(&self) -> GenFut<'_, Vec<TimeSlot>>;
}

/// Writes the counterpart's side of a chat exchange.
///
/// This stands in for real counterpart messaging, which is out of scope;
/// keeping it behind a seam means the demo auto-reply is a pluggable
/// collaborator rather than a hardcoded timer.
pub trait ReplyWriter: Send + Sync {
    fn write_reply(&self, thread_preview: String) -> GenFut<'_, String>;
}
