//! The metered AI-credit wallet and its audit ledger.
//!
//! The balance is unsigned, so "never negative" holds by construction; the
//! only question a debit answers is whether there was enough to take.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// How many ledger entries are retained, newest first. Older entries are
/// evicted FIFO once the bound is reached.
pub const LEDGER_RETENTION: usize = 50;

/// One per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditWallet {
    pub balance: u64,
    /// Size of the scheduled monthly refill; the refill schedule itself is
    /// the caller's concern.
    pub monthly_grant: u64,
    pub last_grant_at: DateTime<Utc>,
}

/// Result of a debit attempt. Insufficient funds is flow control, not an
/// error: the caller aborts the gated action and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DebitOutcome {
    Applied,
    InsufficientFunds,
}

impl DebitOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, DebitOutcome::Applied)
    }
}

impl CreditWallet {
    /// Atomically check-and-decrement. On `InsufficientFunds` the balance is
    /// untouched.
    pub fn debit(&mut self, amount: u64) -> DebitOutcome {
        match self.balance.checked_sub(amount) {
            Some(remaining) => {
                self.balance = remaining;
                DebitOutcome::Applied
            }
            None => DebitOutcome::InsufficientFunds,
        }
    }

    pub fn grant(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }
}

/// Immutable audit record of one balance mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEntry {
    pub id: EntryId,
    /// Human-readable action label, e.g. "Generate Matches".
    pub action: String,
    /// Signed delta: negative for debits, positive for grants.
    pub delta: i64,
    /// Balance snapshot after this mutation applied.
    pub balance_after: u64,
    pub at: DateTime<Utc>,
}

/// Append-only audit log with bounded retention, newest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLedger {
    entries: VecDeque<CreditEntry>,
}

impl CreditLedger {
    /// Record an entry and evict beyond [`LEDGER_RETENTION`].
    pub fn record(&mut self, entry: CreditEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(LEDGER_RETENTION);
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &CreditEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&CreditEntry> {
        self.entries.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
