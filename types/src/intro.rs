//! Matches and intros: the suggestion-to-introduction lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{IntroId, IntroToken, MatchId, ProfileId};

/// Which generation surface produced (or is producing) a match batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBatchKind {
    /// The everyday "find 5 matches" action.
    Regular,
    /// Chapter-wide bulk run a BNI leader triggers; costs more credits.
    BniMatchday,
}

/// Flavor of a single suggestion. The BNI variants are display-only: the
/// workflow never branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    Regular,
    BniChapter,
    BniRegion,
}

/// A transient, AI-suggested introduction candidate.
///
/// Matches exist only between generation batches: a new batch replaces the
/// whole list, and requesting or skipping a match removes it. There is no
/// other way a match leaves the suggestion set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub other_user: ProfileId,
    pub name: String,
    pub headline: String,
    pub photo_url: String,
    /// Higher is better; the canned generator emits 80-94.
    pub fit_score: u8,
    /// Opaque model-written justification, rendered verbatim.
    pub reason: String,
    pub tags: Vec<String>,
    pub match_type: MatchType,
}

/// A candidate meeting slot as the slot suggester phrases it.
///
/// These are display labels, not normalized timestamps: the suggester has no
/// calendar source, and both accept surfaces render them verbatim. The
/// confirmed time on an [`Intro`] is a structured `DateTime<Utc>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

/// Intro lifecycle.
///
/// ```text
/// (match consumed) ──> Pending ──> Accepted ──> Scheduled ──> Done
///                         │                        ^
///                         └── accept-by-token ─────┘
///
/// Skipped is reached before an Intro exists: skipping discards the Match
/// and the variant is retained only for imported/legacy records.
/// ```
///
/// No transition is ever walked backwards, and terminal intros are retained
/// for history rather than deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroStatus {
    Pending,
    Accepted,
    Scheduled,
    Done,
    Skipped,
}

impl IntroStatus {
    /// Whether the public accept surface may move this intro to `Scheduled`.
    #[must_use]
    pub fn can_schedule(self) -> bool {
        matches!(self, IntroStatus::Pending | IntroStatus::Accepted)
    }
}

/// Post-meeting outcome tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroOutcome {
    Lead,
    Hire,
    Partner,
    Other,
}

/// The durable record of a requested introduction.
///
/// Created exactly once per accepted match (the sole creation path), carrying
/// a display snapshot of the counterpart so the record stays renderable even
/// though the counterpart has no local profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intro {
    pub id: IntroId,
    pub requester: ProfileId,
    pub target: ProfileId,
    pub target_name: String,
    pub target_headline: String,
    pub target_photo_url: String,
    pub reason: String,
    pub status: IntroStatus,
    pub proposed_times: Vec<TimeSlot>,
    pub meeting_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub outcome: Option<IntroOutcome>,
    /// Magic-link credential; unique across all intros ever created here.
    pub token: IntroToken,
    pub prep_brief: String,
    pub requested_at: DateTime<Utc>,
}
