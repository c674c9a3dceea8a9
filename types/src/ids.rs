//! Typed identifiers.
//!
//! Every entity gets its own id newtype so an `IntroId` can never be handed
//! to a contact lookup. Ids are random v4 UUIDs; the two public-surface
//! credentials (`IntroToken`, `ShareSlug`) are opaque strings instead,
//! because they travel in shareable links and their only contract is
//! unguessability plus equality.

use std::fmt;

use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a fresh random id.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[must_use]
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            #[must_use]
            pub fn value(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(ProfileId);
entity_id!(ListingId);
entity_id!(MatchId);
entity_id!(IntroId);
entity_id!(ContactId);
entity_id!(ThreadId);
entity_id!(MessageId);
entity_id!(CardId);
entity_id!(ScanId);
entity_id!(
    /// Id of a single credit-ledger entry.
    EntryId
);

/// Magic-link credential for out-of-band intro acceptance.
///
/// Possession of the token is the sole authorization: the counterpart has no
/// account session, and the engine looks intros up strictly by token on the
/// public accept surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct IntroToken(String);

impl IntroToken {
    /// Mint a fresh unguessable token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IntroToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public share identifier for a business card, embedded in `/c/{slug}` links.
/// Immutable once the card is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ShareSlug(String);

impl ShareSlug {
    /// Wrap a known slug, e.g. one taken from an incoming share link.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mint a fresh slug. Uniqueness across one account's cards is enforced
    /// by the engine at card creation.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("card-{}", Uuid::new_v4().simple()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_across_mints() {
        assert_ne!(IntroId::new(), IntroId::new());
        assert_ne!(IntroToken::generate(), IntroToken::generate());
        assert_ne!(ShareSlug::generate(), ShareSlug::generate());
    }
}
