//! The account owner's professional profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::ProfileId;

/// Account tier. BNI-only attributes live inside [`BniMembership`], so they
/// exist exactly when the account is a BNI account - there is no way to
/// carry chapter data on a regular profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Account {
    Regular,
    Bni(BniMembership),
}

impl Account {
    #[must_use]
    pub fn is_bni(&self) -> bool {
        matches!(self, Account::Bni(_))
    }

    #[must_use]
    pub fn bni(&self) -> Option<&BniMembership> {
        match self {
            Account::Regular => None,
            Account::Bni(m) => Some(m),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BniRole {
    President,
    Vp,
    Member,
}

impl BniRole {
    /// Presidents and VPs see the chapter leaderboard and can run a matchday.
    #[must_use]
    pub fn is_leader(self) -> bool {
        matches!(self, BniRole::President | BniRole::Vp)
    }
}

/// BNI chapter attributes, present only on BNI accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BniMembership {
    pub chapter_id: String,
    pub region_id: String,
    pub role: BniRole,
    pub tenure_months: u32,
    pub gains_goals: Vec<String>,
    pub gains_accomplishments: Vec<String>,
    pub industry_category: String,
}

/// The account owner's profile. Created once at account creation, mutated by
/// [`Profile::apply`] and onboarding completion, never deleted in-process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    pub photo_url: String,
    pub headline: String,
    pub city: String,
    pub timezone: String,
    pub website_url: String,
    /// Open key space: "linkedin", "twitter", whatever the user links.
    pub socials: BTreeMap<String, String>,
    pub bio: String,
    pub verified: bool,
    pub onboarding_completed: bool,
    pub account: Account,
}

/// Partial profile update. `None` fields are left untouched; the UI sends
/// only what the user edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub headline: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub website_url: Option<String>,
    pub socials: Option<BTreeMap<String, String>>,
    pub bio: Option<String>,
    pub account: Option<Account>,
}

impl Profile {
    /// Merge a partial update into the profile.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            email,
            photo_url,
            headline,
            city,
            timezone,
            website_url,
            socials,
            bio,
            account,
        } = update;
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = photo_url {
            self.photo_url = v;
        }
        if let Some(v) = headline {
            self.headline = v;
        }
        if let Some(v) = city {
            self.city = v;
        }
        if let Some(v) = timezone {
            self.timezone = v;
        }
        if let Some(v) = website_url {
            self.website_url = v;
        }
        if let Some(v) = socials {
            self.socials = v;
        }
        if let Some(v) = bio {
            self.bio = v;
        }
        if let Some(v) = account {
            self.account = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> Profile {
        Profile {
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
            onboarding_completed: false,
            account: Account::Regular,
        }
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut profile = base_profile();
        profile.apply(ProfileUpdate {
            headline: Some("Founder".into()),
            ..Default::default()
        });
        assert_eq!(profile.headline, "Founder");
        assert_eq!(profile.name, "Demo User");
    }

    #[test]
    fn bni_fields_exist_only_on_bni_accounts() {
        let mut profile = base_profile();
        assert!(profile.account.bni().is_none());

        profile.apply(ProfileUpdate {
            account: Some(Account::Bni(BniMembership {
                chapter_id: "golden-gate-innovators".into(),
                region_id: "sf-bay-area".into(),
                role: BniRole::President,
                tenure_months: 24,
                gains_goals: vec![],
                gains_accomplishments: vec![],
                industry_category: "Software Development".into(),
            })),
            ..Default::default()
        });
        let membership = profile.account.bni().expect("bni membership");
        assert!(membership.role.is_leader());
    }
}
