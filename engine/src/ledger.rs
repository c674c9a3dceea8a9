//! Credit ledger operations.
//!
//! Every balance mutation goes through here and produces exactly one ledger
//! entry carrying the post-mutation balance snapshot.

use std::num::NonZeroU64;

use chrono::{DateTime, Utc};

use introspark_types::{CreditEntry, DebitOutcome, EntryId};

use crate::Engine;

impl Engine {
    /// Atomically debit `amount` credits for `action`. The amount is
    /// positive by construction, so an applied debit always moves the
    /// balance and its entry always carries a nonzero delta.
    ///
    /// On success the ledger gains one entry with `delta = -amount`. On
    /// [`DebitOutcome::InsufficientFunds`] nothing changes at all - no
    /// entry, no balance movement; callers gate their action on the
    /// outcome and abort without side effects.
    pub fn debit_credits(
        &mut self,
        action: &str,
        amount: NonZeroU64,
        now: DateTime<Utc>,
    ) -> DebitOutcome {
        let outcome = self.state.wallet.debit(amount.get());
        match outcome {
            DebitOutcome::Applied => {
                self.record_entry(action, -(amount.get() as i64), now);
                tracing::debug!(
                    action,
                    amount = amount.get(),
                    balance = self.state.wallet.balance,
                    "debit"
                );
            }
            DebitOutcome::InsufficientFunds => {
                tracing::debug!(
                    action,
                    amount = amount.get(),
                    balance = self.state.wallet.balance,
                    "debit refused"
                );
            }
        }
        outcome
    }

    /// Add credits and record the positive-delta entry.
    pub fn grant_credits(&mut self, action: &str, amount: u64, now: DateTime<Utc>) {
        self.state.wallet.grant(amount);
        self.record_entry(action, amount as i64, now);
        tracing::debug!(action, amount, balance = self.state.wallet.balance, "grant");
    }

    /// Apply the scheduled monthly refill and stamp `last_grant_at`.
    /// When the refill is due is decided by the caller.
    pub fn apply_monthly_grant(&mut self, now: DateTime<Utc>) {
        let amount = self.state.wallet.monthly_grant;
        self.grant_credits("Monthly Grant", amount, now);
        self.state.wallet.last_grant_at = now;
    }

    fn record_entry(&mut self, action: &str, delta: i64, now: DateTime<Utc>) {
        self.state.ledger.record(CreditEntry {
            id: EntryId::new(),
            action: action.to_string(),
            delta,
            balance_after: self.state.wallet.balance,
            at: now,
        });
    }
}
