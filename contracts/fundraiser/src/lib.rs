//! # Fundraiser Contract
//!
//! Campaign ledger and settlement engine. Any account can open a campaign for
//! itself or for a beneficiary, donors contribute in the configured token,
//! the beneficiary claims raised funds, donors can pull back their own
//! outstanding contributions, and the owner can blacklist campaigns or force
//! a refund to every donor.
//!
//! | Phase        | Entry Point(s)                                              |
//! |--------------|-------------------------------------------------------------|
//! | Bootstrap    | [`Fundraiser::init`], `transfer_ownership`                  |
//! | Registry     | `start_campaign`, `update_campaign`, `set_active`, `set_blacklisted` |
//! | Settlement   | `donate`, `claim`, `withdraw`, `refund_all`                 |
//! | Queries      | `get_campaign`, `donation_of`, `donor_at`, `claimable`, ... |
//!
//! Authorization and state predicates live in [`guard`], balance bookkeeping
//! in `ledger`, storage access in `storage`. Every entry point returns
//! `Result<_, Error>`; an `Err` aborts the invocation and the host discards
//! all of its writes.

#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env, String};

pub mod events;
pub mod guard;
mod ledger;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_expire;

pub use types::Campaign;

/// Seconds in one deadline unit.
pub const DAY_IN_SECONDS: u64 = 86_400;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotFound = 1,
    PermissionDenied = 2,
    InvalidBeneficiary = 3,
    CampaignUnavailable = 4,
    AmountExceedsTarget = 5,
    TargetBelowRaised = 6,
    InsufficientDonorBalance = 7,
    InsufficientCampaignFunds = 8,
    NoDonors = 9,
    AlreadyClaimedPortion = 10,
    AlreadyReturned = 11,
    AlreadyInitialized = 12,
    NotInitialized = 13,
    InvalidAmount = 14,
    Overflow = 15,
}

#[contract]
pub struct Fundraiser;

#[contractimpl]
impl Fundraiser {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with its owner and the token donations are
    /// made in.
    ///
    /// Must be called exactly once after deployment; later calls fail with
    /// `Error::AlreadyInitialized`.
    pub fn init(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_token(&env, &token);
        Ok(())
    }

    /// Hand the owner role to `new_owner`.
    ///
    /// The current owner must authorize; the previous owner loses the role
    /// immediately.
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), Error> {
        let previous_owner = storage::get_owner(&env)?;
        previous_owner.require_auth();

        storage::set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, previous_owner, new_owner);
        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Campaign registry
    // ─────────────────────────────────────────────────────────

    /// Open a new campaign raising funds for `raised_for`.
    ///
    /// - `caller` must authorize and becomes `raised_by`.
    /// - `raised_for` cannot be this contract.
    /// - `deadline` is a number of days from now; 0 means no deadline.
    ///
    /// Returns the new campaign id.
    pub fn start_campaign(
        env: Env,
        caller: Address,
        raised_for: Address,
        target_amount: i128,
        deadline: u32,
        about: String,
        category: u32,
    ) -> Result<u64, Error> {
        caller.require_auth();

        if raised_for == env.current_contract_address() {
            return Err(Error::InvalidBeneficiary);
        }
        guard::require_positive(target_amount)?;

        let created_on = env.ledger().timestamp();
        let expires_at = expiry(created_on, deadline)?;
        let id = storage::get_and_increment_campaign_id(&env)?;

        let campaign = Campaign {
            id,
            raised_by: caller.clone(),
            raised_for: raised_for.clone(),
            about: about.clone(),
            category,
            target_amount,
            amount_raised: 0,
            deadline,
            expires_at,
            total_supporters: 0,
            created_on,
            amount_claimed: 0,
            amount_returned: false,
            is_active: true,
        };
        storage::save_campaign(&env, &campaign);

        events::emit_campaign_started(
            &env,
            events::CampaignStarted {
                campaign_id: id,
                raised_by: caller,
                raised_for,
                target_amount,
                deadline,
                about,
                category,
            },
        );

        Ok(id)
    }

    /// Change the target, description, category and deadline of a campaign.
    ///
    /// The new target cannot be lower than what has already been raised.
    /// The deadline is recomputed from the campaign's creation time.
    pub fn update_campaign(
        env: Env,
        caller: Address,
        id: u64,
        target_amount: i128,
        about: String,
        category: u32,
        deadline: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        guard::require_owner_or_controller(&env, &caller, &campaign)?;

        if target_amount < campaign.amount_raised {
            return Err(Error::TargetBelowRaised);
        }
        guard::require_positive(target_amount)?;

        campaign.target_amount = target_amount;
        campaign.about = about.clone();
        campaign.category = category;
        campaign.deadline = deadline;
        campaign.expires_at = expiry(campaign.created_on, deadline)?;
        storage::save_campaign(&env, &campaign);

        events::emit_update(
            &env,
            events::UpdateSuccessful {
                campaign_id: id,
                target_amount,
                about,
                category,
                deadline,
            },
        );
        Ok(())
    }

    /// Open or close a campaign for donations.
    pub fn set_active(env: Env, caller: Address, id: u64, flag: bool) -> Result<(), Error> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        guard::require_owner_or_controller(&env, &caller, &campaign)?;

        campaign.is_active = flag;
        storage::save_campaign(&env, &campaign);

        events::emit_activation_changed(&env, id, flag);
        Ok(())
    }

    /// Blacklist or clear a campaign. Owner only.
    ///
    /// A blacklisted campaign rejects donations whatever its active flag or
    /// deadline say; withdrawals, claims and refunds are unaffected.
    pub fn set_blacklisted(env: Env, caller: Address, id: u64, flag: bool) -> Result<(), Error> {
        caller.require_auth();

        if !guard::exists(&env, id) {
            return Err(Error::NotFound);
        }
        guard::require_owner(&env, &caller)?;

        storage::set_blacklisted(&env, id, flag);
        events::emit_blacklist_changed(&env, id, flag);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Donate `amount` of the configured token to campaign `id`.
    ///
    /// Rejected in full when it would push `amount_raised` past the target.
    /// Reaching the target exactly closes the campaign.
    pub fn donate(env: Env, id: u64, donor: Address, amount: i128) -> Result<(), Error> {
        donor.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        guard::require_accepting_donations(&env, &campaign)?;
        guard::require_positive(amount)?;
        if amount > campaign.remaining() {
            return Err(Error::AmountExceedsTarget);
        }

        let token = storage::get_token(&env)?;
        token::Client::new(&env, &token).transfer(
            &donor,
            &env.current_contract_address(),
            &amount,
        );

        ledger::record_donation(&env, &mut campaign, &donor, amount)?;
        if campaign.amount_raised == campaign.target_amount {
            log!(&env, "campaign reached its target", id);
            campaign.is_active = false;
        }
        storage::save_campaign(&env, &campaign);

        events::emit_donation(&env, id, donor, amount);
        Ok(())
    }

    /// Send `amount` of the raised funds to the campaign's beneficiary.
    pub fn claim(env: Env, caller: Address, id: u64, amount: i128) -> Result<(), Error> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        guard::require_owner_or_controller(&env, &caller, &campaign)?;
        guard::require_positive(amount)?;

        ledger::record_claim(&env, &mut campaign, amount)?;
        storage::save_campaign(&env, &campaign);

        let token = storage::get_token(&env)?;
        token::Client::new(&env, &token).transfer(
            &env.current_contract_address(),
            &campaign.raised_for,
            &amount,
        );

        events::emit_claim(&env, id, campaign.raised_for, amount);
        Ok(())
    }

    /// Return `amount` of `donor`'s own outstanding contribution.
    ///
    /// Allowed whatever the campaign's active, blacklist or deadline state.
    pub fn withdraw(env: Env, donor: Address, id: u64, amount: i128) -> Result<(), Error> {
        donor.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        guard::require_positive(amount)?;

        ledger::record_withdrawal(&env, &mut campaign, &donor, amount)?;
        storage::save_campaign(&env, &campaign);

        let token = storage::get_token(&env)?;
        token::Client::new(&env, &token).transfer(
            &env.current_contract_address(),
            &donor,
            &amount,
        );

        events::emit_withdraw(&env, id, donor, amount);
        Ok(())
    }

    /// Pay every donor back their outstanding balance.
    ///
    /// Blocked once any amount has been claimed, and can only run once.
    pub fn refund_all(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, id)?;
        guard::require_owner_or_controller(&env, &caller, &campaign)?;

        let payouts = ledger::refund_all(&env, &mut campaign)?;
        storage::save_campaign(&env, &campaign);

        let token = storage::get_token(&env)?;
        let token_client = token::Client::new(&env, &token);
        let contract_address = env.current_contract_address();
        let mut total_returned: i128 = 0;
        for (donor, amount) in payouts.iter() {
            total_returned = total_returned.checked_add(amount).ok_or(Error::Overflow)?;
            token_client.transfer(&contract_address, &donor, &amount);
        }

        events::emit_donations_returned(&env, id, payouts.len(), total_returned);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_campaign(env: Env, id: u64) -> Result<Campaign, Error> {
        storage::load_campaign(&env, id)
    }

    pub fn campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    /// Outstanding balance of `donor` on campaign `id`.
    pub fn donation_of(env: Env, id: u64, donor: Address) -> Result<i128, Error> {
        if !guard::exists(&env, id) {
            return Err(Error::NotFound);
        }
        Ok(storage::get_donation(&env, id, &donor))
    }

    pub fn is_blacklisted(env: Env, id: u64) -> Result<bool, Error> {
        if !guard::exists(&env, id) {
            return Err(Error::NotFound);
        }
        Ok(storage::is_blacklisted(&env, id))
    }

    /// Donor at `index` in the order donors first contributed.
    pub fn donor_at(env: Env, id: u64, index: u32) -> Result<Address, Error> {
        if !guard::exists(&env, id) {
            return Err(Error::NotFound);
        }
        storage::donor_at(&env, id, index).ok_or(Error::NotFound)
    }

    pub fn donor_count(env: Env, id: u64) -> Result<u32, Error> {
        if !guard::exists(&env, id) {
            return Err(Error::NotFound);
        }
        Ok(storage::donor_count(&env, id))
    }

    /// Amount the beneficiary could claim right now.
    pub fn claimable(env: Env, id: u64) -> Result<i128, Error> {
        let campaign = storage::load_campaign(&env, id)?;
        ledger::claimable(&env, &campaign)
    }

    pub fn is_expired(env: Env, id: u64) -> Result<bool, Error> {
        let campaign = storage::load_campaign(&env, id)?;
        Ok(guard::is_expired(&env, &campaign))
    }
}

/// Absolute expiry for a campaign created at `created_on` lasting `deadline`
/// days, or 0 when there is no deadline.
fn expiry(created_on: u64, deadline: u32) -> Result<u64, Error> {
    if deadline == 0 {
        return Ok(0);
    }
    (deadline as u64)
        .checked_mul(DAY_IN_SECONDS)
        .and_then(|span| created_on.checked_add(span))
        .ok_or(Error::Overflow)
}
