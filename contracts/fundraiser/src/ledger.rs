// contracts/fundraiser/src/ledger.rs
//
// Donor ledger bookkeeping.
//
// These helpers mutate the in-memory `Campaign` and the per-donor storage
// entries together so that `amount_raised` always equals the sum of the
// donor balances. They never move tokens and never persist the campaign
// record itself; the entry point saves the campaign and performs transfers
// once every helper has succeeded.

use soroban_sdk::{log, token, Address, Env, Vec};

use crate::{storage, types::Campaign, Error};

/// Credit `amount` to `donor` on `campaign`.
///
/// A donor seen for the first time is appended to the enumeration list and
/// counted as a new supporter.
pub fn record_donation(
    env: &Env,
    campaign: &mut Campaign,
    donor: &Address,
    amount: i128,
) -> Result<(), Error> {
    let first_time = !storage::has_donation(env, campaign.id, donor);
    let balance = storage::get_donation(env, campaign.id, donor)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    campaign.amount_raised = campaign
        .amount_raised
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    if first_time {
        campaign.total_supporters = campaign
            .total_supporters
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        storage::push_donor(env, campaign.id, donor)?;
    }

    storage::set_donation(env, campaign.id, donor, balance);
    Ok(())
}

/// Debit `amount` from `donor`'s outstanding balance on `campaign`.
pub fn record_withdrawal(
    env: &Env,
    campaign: &mut Campaign,
    donor: &Address,
    amount: i128,
) -> Result<(), Error> {
    let balance = storage::get_donation(env, campaign.id, donor);
    if amount > balance {
        return Err(Error::InsufficientDonorBalance);
    }
    if amount > claimable(env, campaign)? {
        return Err(Error::InsufficientCampaignFunds);
    }

    campaign.amount_raised -= amount;
    storage::set_donation(env, campaign.id, donor, balance - amount);
    Ok(())
}

/// Mark `amount` of the campaign's raised funds as claimed by the beneficiary.
pub fn record_claim(env: &Env, campaign: &mut Campaign, amount: i128) -> Result<(), Error> {
    if amount > claimable(env, campaign)? {
        return Err(Error::InsufficientCampaignFunds);
    }

    campaign.amount_claimed = campaign
        .amount_claimed
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    Ok(())
}

/// Funds that can leave the contract for `campaign` right now.
///
/// Bounded both by the campaign's own unclaimed total and by the tokens the
/// contract actually holds, so one campaign can never drain the pool of
/// another.
pub fn claimable(env: &Env, campaign: &Campaign) -> Result<i128, Error> {
    let token = storage::get_token(env)?;
    let held = token::Client::new(env, &token).balance(&env.current_contract_address());
    Ok(campaign.unclaimed().min(held).max(0))
}

/// Zero every donor balance on `campaign` and return the payouts owed.
///
/// Donors whose balance is already zero are skipped in the returned list.
pub fn refund_all(env: &Env, campaign: &mut Campaign) -> Result<Vec<(Address, i128)>, Error> {
    let count = storage::donor_count(env, campaign.id);
    if count == 0 {
        return Err(Error::NoDonors);
    }
    if campaign.amount_claimed > 0 {
        return Err(Error::AlreadyClaimedPortion);
    }
    if campaign.amount_returned {
        return Err(Error::AlreadyReturned);
    }

    let mut payouts = Vec::new(env);
    for index in 0..count {
        let donor = storage::donor_at(env, campaign.id, index).ok_or(Error::NotFound)?;
        let balance = storage::get_donation(env, campaign.id, &donor);
        if balance > 0 {
            log!(env, "refunding donor", campaign.id, donor, balance);
            storage::set_donation(env, campaign.id, &donor, 0);
            payouts.push_back((donor, balance));
        }
    }

    campaign.amount_raised = 0;
    campaign.total_supporters = 0;
    campaign.amount_returned = true;
    Ok(payouts)
}
