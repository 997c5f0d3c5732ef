// contracts/fundraiser/src/storage.rs
//
// Storage helpers for the Fundraiser contract.
//
// Instance storage:
//   - DataKey::Owner / DataKey::Token   written once by `init`
//   - DataKey::CampaignCount            next campaign id, also the registry length
// Persistent storage:
//   - DataKey::Campaign(id)             the campaign record
//   - DataKey::Blacklisted(id)          bool, absent means false
//   - DataKey::Donation(id, donor)      outstanding donor balance
//   - DataKey::DonorCount(id) +
//     DataKey::DonorAt(id, index)       ordered, de-duplicated donor list

use soroban_sdk::{Address, Env};

use crate::{
    types::{Campaign, DataKey},
    Error,
};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Contract configuration
// ─────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Load the contract owner. Fails with `Error::NotInitialized` before `init`.
pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Load the token every campaign is denominated in.
pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

// ─────────────────────────────────────────────────────────
// Campaign registry
// ─────────────────────────────────────────────────────────

/// Number of campaigns ever created. Ids `0..count` are valid.
pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Read and increment the campaign counter.
/// Returns the id that should be used for the next campaign.
pub fn get_and_increment_campaign_id(env: &Env) -> Result<u64, Error> {
    let id = campaign_count(env);
    let next = id.checked_add(1).ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::CampaignCount, &next);
    bump_instance(env);
    Ok(id)
}

/// Persist a campaign. Overwrites any existing record at the same id.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    bump_persistent(env, &key);
}

/// Load a campaign by id. Fails with `Error::NotFound` if missing.
pub fn load_campaign(env: &Env, id: u64) -> Result<Campaign, Error> {
    let key = DataKey::Campaign(id);
    let campaign = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(campaign)
}

pub fn is_blacklisted(env: &Env, id: u64) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Blacklisted(id))
        .unwrap_or(false)
}

pub fn set_blacklisted(env: &Env, id: u64, flag: bool) {
    let key = DataKey::Blacklisted(id);
    env.storage().persistent().set(&key, &flag);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Donor ledger
// ─────────────────────────────────────────────────────────

/// True once `donor` has a record on `campaign_id`, even a zeroed one.
pub fn has_donation(env: &Env, campaign_id: u64, donor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Donation(campaign_id, donor.clone()))
}

/// Outstanding balance of `donor` on `campaign_id`. Returns 0 if none.
pub fn get_donation(env: &Env, campaign_id: u64, donor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(campaign_id, donor.clone()))
        .unwrap_or(0)
}

pub fn set_donation(env: &Env, campaign_id: u64, donor: &Address, amount: i128) {
    let key = DataKey::Donation(campaign_id, donor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn donor_count(env: &Env, campaign_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::DonorCount(campaign_id))
        .unwrap_or(0)
}

/// Append `donor` to the enumeration list of `campaign_id`.
/// Callers must only push a donor once.
pub fn push_donor(env: &Env, campaign_id: u64, donor: &Address) -> Result<u32, Error> {
    let index = donor_count(env, campaign_id);
    let next = index.checked_add(1).ok_or(Error::Overflow)?;

    let slot = DataKey::DonorAt(campaign_id, index);
    env.storage().persistent().set(&slot, donor);
    bump_persistent(env, &slot);

    let count = DataKey::DonorCount(campaign_id);
    env.storage().persistent().set(&count, &next);
    bump_persistent(env, &count);

    Ok(index)
}

/// Donor at position `index` of the enumeration list.
pub fn donor_at(env: &Env, campaign_id: u64, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::DonorAt(campaign_id, index))
}
