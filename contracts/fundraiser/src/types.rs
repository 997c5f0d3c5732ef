// contracts/fundraiser/src/types.rs
//
// Campaign records and storage keys.
//
// A campaign's aggregate counters live on the `Campaign` struct itself; the
// per-donor balances and the donor enumeration list are separate entries so
// the campaign record stays a fixed size however many donors it attracts:
//   - DataKey::Donation(campaign_id, donor)  → i128
//   - DataKey::DonorAt(campaign_id, index)   → Address
//   - DataKey::DonorCount(campaign_id)       → u32

use soroban_sdk::{contracttype, Address, String};

/// Storage keys.
///
/// `Owner`, `Token` and `CampaignCount` live in instance storage; everything
/// keyed by a campaign id lives in persistent storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Token,
    CampaignCount,
    Campaign(u64),
    Blacklisted(u64),
    Donation(u64, Address),
    DonorCount(u64),
    DonorAt(u64, u32),
}

/// A fundraising campaign stored on-chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Dense, auto-incremented id starting at 0.
    pub id: u64,
    /// Address that opened the campaign.
    pub raised_by: Address,
    /// Beneficiary allowed to claim the raised funds.
    pub raised_for: Address,
    /// Free-text description.
    pub about: String,
    pub category: u32,
    /// Ceiling on `amount_raised`; donations that would pass it are rejected.
    pub target_amount: i128,
    /// Sum of all outstanding donor balances.
    pub amount_raised: i128,
    /// Number of days after `created_on` during which donations are accepted.
    /// Zero means the campaign never expires.
    pub deadline: u32,
    /// Ledger timestamp derived from `created_on + deadline` days, or 0.
    pub expires_at: u64,
    /// Distinct donors recorded since creation (or since the last refund).
    pub total_supporters: u32,
    pub created_on: u64,
    /// Cumulative amount claimed by the beneficiary. Never decreases.
    pub amount_claimed: i128,
    /// Set once every donor has been refunded.
    pub amount_returned: bool,
    pub is_active: bool,
}

impl Campaign {
    /// Value still held by the contract on behalf of this campaign.
    pub fn unclaimed(&self) -> i128 {
        self.amount_raised - self.amount_claimed
    }

    /// Room left before `target_amount` is reached.
    pub fn remaining(&self) -> i128 {
        self.target_amount - self.amount_raised
    }
}
