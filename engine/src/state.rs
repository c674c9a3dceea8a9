//! The per-account state tree.

use serde::{Deserialize, Serialize};

use introspark_types::{
    BusinessCard, CardScan, ChatThread, Contact, CreditLedger, CreditWallet, Intro, Listing,
    Match, Profile,
};

/// Everything the engine owns for one account.
///
/// Collection order is meaningful: listings keep insertion order (the
/// active/archived partitions both preserve it), intros and contacts keep
/// newest first, matches keep generation-batch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    pub profile: Profile,
    pub offers: Vec<Listing>,
    pub needs: Vec<Listing>,
    /// The current suggestion batch; replaced wholesale by each generation.
    pub matches: Vec<Match>,
    pub intros: Vec<Intro>,
    pub contacts: Vec<Contact>,
    pub threads: Vec<ChatThread>,
    pub cards: Vec<BusinessCard>,
    pub scans: Vec<CardScan>,
    pub wallet: CreditWallet,
    pub ledger: CreditLedger,
}

impl AccountState {
    #[must_use]
    pub fn new(profile: Profile, wallet: CreditWallet) -> Self {
        Self {
            profile,
            offers: Vec::new(),
            needs: Vec::new(),
            matches: Vec::new(),
            intros: Vec::new(),
            contacts: Vec::new(),
            threads: Vec::new(),
            cards: Vec::new(),
            scans: Vec::new(),
            wallet,
            ledger: CreditLedger::default(),
        }
    }
}
