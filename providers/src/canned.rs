//! Canned demo collaborators.
//!
//! These reproduce the demo build's generation behavior: fixed suggestion
//! roster, fixed paragraphs, three candidate slots, one stock reply. Each
//! call sleeps for a configurable latency so the UI exercises its loading
//! states; tests zero the latency out.

use std::time::Duration;

use rand::RngExt;

use introspark_types::{Match, MatchBatchKind, MatchId, MatchType, ProfileId, TimeSlot};

use crate::{
    BioWriter, BriefWriter, GenFut, MATCH_BATCH_SIZE, MatchGenerator, MatchRequest, ReplyWriter,
    SlotSuggester,
};

/// Simulated backend latency per collaborator call.
#[derive(Debug, Clone)]
pub struct CannedLatency {
    pub matches: Duration,
    pub bio: Duration,
    pub brief: Duration,
    pub slots: Duration,
    pub reply: Duration,
}

impl Default for CannedLatency {
    fn default() -> Self {
        Self {
            matches: Duration::from_millis(1500),
            bio: Duration::from_millis(1000),
            brief: Duration::from_millis(500),
            slots: Duration::from_millis(300),
            reply: Duration::from_millis(1500),
        }
    }
}

impl CannedLatency {
    /// No artificial delay; used in tests.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            matches: Duration::ZERO,
            bio: Duration::ZERO,
            brief: Duration::ZERO,
            slots: Duration::ZERO,
            reply: Duration::ZERO,
        }
    }
}

/// One struct implements every collaborator seam.
#[derive(Debug, Clone, Default)]
pub struct CannedGenerators {
    pub latency: CannedLatency,
}

impl CannedGenerators {
    #[must_use]
    pub fn instant() -> Self {
        Self {
            latency: CannedLatency::zero(),
        }
    }
}

const ROSTER: [(&str, &str, [&str; 2]); MATCH_BATCH_SIZE] = [
    ("Liam", "Founder @ AI Startup", ["AI", "SaaS"]),
    ("Olivia", "Growth Marketer", ["Marketing", "B2B"]),
    ("Noah", "UX Designer", ["UX", "Mobile"]),
    ("Emma", "Venture Capitalist", ["Finance", "Investing"]),
    ("Oliver", "Software Engineer", ["DevTools", "Open Source"]),
];

const BIO_PARAGRAPH: &str = "Based on your online presence, you're a results-driven product \
leader with a knack for scaling AI-powered products. You have a strong background in both \
startup and enterprise environments, with a focus on creating meaningful user experiences. \
Key skills appear to include product strategy, machine learning applications, and \
cross-functional team leadership.";

const BRIEF_PARAGRAPH: &str = "Here's a quick brief to prepare you. Both of you share a \
passion for AI's role in creative industries. Key talking points could include: the future \
of generative models, strategies for user adoption of new AI tools, and potential \
collaboration opportunities in the B2B SaaS space.";

const REPLY_LINE: &str = "Sounds good, thanks for the update!";

impl MatchGenerator for CannedGenerators {
    fn generate(&self, request: MatchRequest) -> GenFut<'_, Vec<Match>> {
        let delay = self.latency.matches;
        Box::pin(async move {
            tokio::time::sleep(delay).await;

            let interest = request
                .needs
                .first()
                .map(|need| need.title.as_str().to_string())
                .unwrap_or_else(|| "new ventures".to_string());
            let match_type = match request.kind {
                MatchBatchKind::Regular => MatchType::Regular,
                MatchBatchKind::BniMatchday => MatchType::BniChapter,
            };

            tracing::debug!(kind = ?request.kind, interest = %interest, "producing canned batch");
            let mut rng = rand::rng();
            let batch = ROSTER
                .iter()
                .map(|(name, headline, tags)| Match {
                    id: MatchId::new(),
                    other_user: ProfileId::new(),
                    name: (*name).to_string(),
                    headline: (*headline).to_string(),
                    photo_url: format!("https://i.pravatar.cc/150?u={name}"),
                    fit_score: 80 + rng.random_range(0..15),
                    reason: format!("Based on your interest in \"{interest}\"..."),
                    tags: tags.iter().map(|t| (*t).to_string()).collect(),
                    match_type,
                })
                .collect();
            Ok(batch)
        })
    }
}

impl BioWriter for CannedGenerators {
    fn write_bio(&self, _links: Vec<String>) -> GenFut<'_, String> {
        let delay = self.latency.bio;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(BIO_PARAGRAPH.to_string())
        })
    }
}

impl BriefWriter for CannedGenerators {
    fn write_brief(&self) -> GenFut<'_, String> {
        let delay = self.latency.brief;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(BRIEF_PARAGRAPH.to_string())
        })
    }
}

impl SlotSuggester for CannedGenerators {
    fn suggest_slots(&self) -> GenFut<'_, Vec<TimeSlot>> {
        let delay = self.latency.slots;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(vec![
                TimeSlot {
                    start: "Tomorrow, 10:00 AM".into(),
                    end: "10:30 AM".into(),
                },
                TimeSlot {
                    start: "Tomorrow, 2:30 PM".into(),
                    end: "3:00 PM".into(),
                },
                TimeSlot {
                    start: "Day after, 11:00 AM".into(),
                    end: "11:30 AM".into(),
                },
            ])
        })
    }
}

impl ReplyWriter for CannedGenerators {
    fn write_reply(&self, _thread_preview: String) -> GenFut<'_, String> {
        let delay = self.latency.reply;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(REPLY_LINE.to_string())
        })
    }
}
