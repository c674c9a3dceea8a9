//! Demo seed state.
//!
//! Stands in for account creation, which is out of scope: a freshly seeded
//! engine looks like the demo account mid-life, with a couple of starter
//! matches, contacts, one thread, one card, and one scan awaiting review.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use introspark_types::{
    Account, BusinessCard, CardId, CardScan, CardTemplate, CardTheme, ChatThread, Contact,
    ContactId, CreditWallet, IntroId, Match, MatchId, MatchType, ParsedCard, Profile, ProfileId,
    ScanId, ScanStatus, ShareSlug,
};

use crate::Engine;

/// Build the demo account as of `now`.
#[must_use]
pub fn demo_account(now: DateTime<Utc>) -> Engine {
    let me = ProfileId::new();
    let profile = Profile {
        id: me,
        name: "Demo User".into(),
        email: "demo@introspark.com".into(),
        photo_url: format!("https://i.pravatar.cc/150?u={me}"),
        headline: "AI Product Manager | Building the future of networking".into(),
        city: "San Francisco, CA".into(),
        timezone: "America/Los_Angeles".into(),
        website_url: "https://introspark.ai".into(),
        socials: BTreeMap::from([
            (
                "linkedin".to_string(),
                "https://linkedin.com/in/demouser".to_string(),
            ),
            (
                "twitter".to_string(),
                "https://twitter.com/demouser".to_string(),
            ),
        ]),
        bio: "Experienced product leader passionate about leveraging AI to create meaningful \
              professional connections. Previously at Google and various startups."
            .into(),
        verified: true,
        onboarding_completed: false,
        account: Account::Regular,
    };

    let wallet = CreditWallet {
        balance: 250,
        monthly_grant: 250,
        last_grant_at: now,
    };

    let mut engine = Engine::new(profile, wallet);

    let sophia = ProfileId::new();
    engine.state.matches = vec![
        Match {
            id: MatchId::new(),
            other_user: sophia,
            name: "Sophia Chen".into(),
            headline: "Head of Design @ EnterpriseCorp".into(),
            photo_url: format!("https://i.pravatar.cc/150?u={sophia}"),
            fit_score: 92,
            reason: "Based on your interest in 'Connections to enterprise design leaders'..."
                .into(),
            tags: vec!["Design".into(), "SaaS".into()],
            match_type: MatchType::Regular,
        },
        Match {
            id: MatchId::new(),
            other_user: ProfileId::new(),
            name: "David Lee".into(),
            headline: "Angel Investor - AI & FinTech".into(),
            photo_url: "https://i.pravatar.cc/150?u=david-lee".into(),
            fit_score: 88,
            reason: "Matches your goal to find a technical co-founder for a new venture.".into(),
            tags: vec!["Investing".into(), "AI".into()],
            match_type: MatchType::Regular,
        },
    ];

    engine.state.contacts = vec![
        Contact {
            id: ContactId::new(),
            owner: me,
            name: "Jane Doe".into(),
            role: "CEO".into(),
            org: "Innovate Inc.".into(),
            email: "jane@innovate.co".into(),
            phone: "555-1234".into(),
            city: "New York, NY".into(),
            website_url: "https://innovate.co".into(),
            socials: BTreeMap::new(),
            tags: vec!["Lead".into(), "Q4-Target".into()],
            notes: "Met at SaaS conference. Follow up re: collaboration.".into(),
            last_touch_at: Some(now - Duration::days(5)),
            next_action_at: Some(now + Duration::days(2)),
        },
        Contact {
            id: ContactId::new(),
            owner: me,
            name: "John Smith".into(),
            role: "CTO".into(),
            org: "Tech Solutions".into(),
            email: "john@techsol.com".into(),
            phone: "555-5678".into(),
            city: "Austin, TX".into(),
            website_url: "https://techsol.com".into(),
            socials: BTreeMap::new(),
            tags: vec!["Partnership".into()],
            notes: "Considering them for a new project.".into(),
            last_touch_at: Some(now - Duration::days(10)),
            next_action_at: None,
        },
    ];

    let mut thread = ChatThread::new(IntroId::new(), [me, sophia]);
    thread.append(me, "Hey Sophia, great to be connected!".into(), now);
    thread.append(
        sophia,
        "You too! Let me know what time works best.".into(),
        now,
    );
    engine.state.threads.push(thread);

    engine.state.cards.push(BusinessCard {
        id: CardId::new(),
        owner: me,
        template: CardTemplate::A,
        theme: CardTheme {
            color: "#22C55E".into(),
        },
        fields: BTreeMap::from([
            ("name".to_string(), "Demo User".to_string()),
            ("headline".to_string(), "AI Product Manager".to_string()),
            ("email".to_string(), "demo@introspark.com".to_string()),
        ]),
        qr_url: String::new(),
        share_slug: ShareSlug::new("demo-user-card"),
        views: 127,
    });

    engine.state.scans.push(CardScan {
        id: ScanId::new(),
        owner: me,
        image_url: "https://i.imgur.com/gIXd9A1.png".into(),
        parsed: ParsedCard {
            name: Some("John Appleseed".into()),
            email: Some("john@apple.com".into()),
            phone: Some("800-555-4242".into()),
            ..Default::default()
        },
        confidence: 0.95,
        status: ScanStatus::Review,
    });

    engine
}
