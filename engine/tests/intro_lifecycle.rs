//! End-to-end walk of the suggestion-to-conversation flow against the
//! canned collaborators: generate a batch, request an intro, accept it via
//! its magic link, then exchange messages on the intro's thread.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{TimeZone, Utc};

use introspark_engine::{BatchMerge, Engine, MATCH_BATCH_COST, seed};
use introspark_providers::canned::CannedGenerators;
use introspark_providers::{BriefWriter, MATCH_BATCH_SIZE, SlotSuggester};
use introspark_types::{
    Account, CreditWallet, IntroStatus, MatchBatchKind, Profile, ProfileId,
};

fn fresh_engine() -> Engine {
    let now = Utc::now();
    let profile = Profile {
        id: ProfileId::new(),
        name: "Demo User".into(),
        email: "demo@introspark.com".into(),
        photo_url: String::new(),
        headline: "AI Product Manager".into(),
        city: "San Francisco, CA".into(),
        timezone: "America/Los_Angeles".into(),
        website_url: String::new(),
        socials: BTreeMap::new(),
        bio: String::new(),
        verified: true,
        onboarding_completed: true,
        account: Account::Regular,
    };
    let wallet = CreditWallet {
        balance: 250,
        monthly_grant: 250,
        last_grant_at: now,
    };
    Engine::new(profile, wallet)
}

#[tokio::test]
async fn suggestion_to_scheduled_conversation() -> Result<()> {
    let mut engine = fresh_engine();
    let generators = CannedGenerators::instant();
    let now = Utc::now();

    // Generate a batch; the wallet pays for it up front.
    let merge = engine
        .generate_matches(MatchBatchKind::Regular, &generators, now)
        .await?;
    assert_eq!(merge, BatchMerge::Applied);
    assert_eq!(engine.state().matches.len(), MATCH_BATCH_SIZE);
    assert_eq!(engine.state().wallet.balance, 250 - MATCH_BATCH_COST.get());

    // Pick the first suggestion, a suggested slot, and a written prep
    // brief, then request.
    let match_id = engine.state().matches[0].id;
    let slots = generators.suggest_slots().await?;
    let brief = generators.write_brief().await?;
    let intro_id = engine.request_intro(match_id, slots[0].clone(), brief, now)?;
    assert_eq!(engine.state().matches.len(), MATCH_BATCH_SIZE - 1);
    assert_eq!(engine.state().intros[0].status, IntroStatus::Pending);
    assert!(!engine.state().intros[0].prep_brief.is_empty());

    // The counterpart accepts through the magic link.
    let token = engine.state().intros[0].token.clone();
    let meeting_time = Utc
        .with_ymd_and_hms(2025, 7, 2, 17, 0, 0)
        .single()
        .expect("valid timestamp");
    engine.accept_intro_by_token(&token, meeting_time)?;
    let intro = &engine.state().intros[0];
    assert_eq!(intro.status, IntroStatus::Scheduled);
    assert_eq!(intro.meeting_time, Some(meeting_time));

    // Conversation opens on the scheduled intro.
    let thread_id = engine.open_thread(intro_id)?;
    engine.send_message(thread_id, "Looking forward to it!".into(), now)?;
    engine.simulate_reply(thread_id, &generators, now).await?;

    let thread = &engine.state().threads[0];
    assert_eq!(thread.messages.len(), 2);
    assert_eq!(thread.messages[0].from, engine.state().profile.id);
    assert_ne!(thread.messages[1].from, engine.state().profile.id);
    Ok(())
}

#[tokio::test]
async fn seeded_account_can_request_from_its_starter_matches() -> Result<()> {
    let mut engine = seed::demo_account(Utc::now());
    let generators = CannedGenerators::instant();
    let now = Utc::now();

    let match_id = engine.state().matches[0].id;
    let slots = generators.suggest_slots().await?;
    engine.request_intro(match_id, slots[0].clone(), String::new(), now)?;

    assert_eq!(engine.state().matches.len(), 1);
    assert_eq!(engine.state().intros[0].target_name, "Sophia Chen");
    Ok(())
}
