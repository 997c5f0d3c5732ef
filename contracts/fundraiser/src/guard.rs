//! Access and state guards.
//!
//! Every entry point consults these predicates before touching the registry
//! or the donor ledger. Permission checks compare the authenticated caller
//! against the contract owner and the campaign's two controllers; state
//! checks read the campaign flags, the blacklist and the ledger clock.
//!
//! | Operation                                   | Allowed callers                     |
//! |---------------------------------------------|-------------------------------------|
//! | `start_campaign`, `donate`                  | anyone                              |
//! | `update_campaign`, `set_active`, `claim`, `refund_all` | owner, `raised_by`, `raised_for` |
//! | `set_blacklisted`, `transfer_ownership`     | owner only                          |
//! | `withdraw`                                  | anyone, own donor record only       |

use soroban_sdk::{Address, Env};

use crate::{storage, types::Campaign, Error};

// ─────────────────────────────────────────────────────────
// Permission predicates
// ─────────────────────────────────────────────────────────

/// True only for the single owner configured at `init`.
pub fn is_contract_owner(env: &Env, caller: &Address) -> Result<bool, Error> {
    Ok(storage::get_owner(env)? == *caller)
}

/// True when `caller` opened the campaign or is its beneficiary.
pub fn is_campaign_controller(caller: &Address, campaign: &Campaign) -> bool {
    *caller == campaign.raised_by || *caller == campaign.raised_for
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    if !is_contract_owner(env, caller)? {
        return Err(Error::PermissionDenied);
    }
    Ok(())
}

pub fn require_owner_or_controller(
    env: &Env,
    caller: &Address,
    campaign: &Campaign,
) -> Result<(), Error> {
    if is_campaign_controller(caller, campaign) || is_contract_owner(env, caller)? {
        return Ok(());
    }
    Err(Error::PermissionDenied)
}

// ─────────────────────────────────────────────────────────
// State predicates
// ─────────────────────────────────────────────────────────

pub fn exists(env: &Env, id: u64) -> bool {
    id < storage::campaign_count(env)
}

/// A campaign with no deadline never expires.
pub fn is_expired(env: &Env, campaign: &Campaign) -> bool {
    campaign.deadline != 0 && env.ledger().timestamp() >= campaign.expires_at
}

/// Donations are accepted only while the campaign is active, not blacklisted,
/// not expired and not yet refunded.
pub fn require_accepting_donations(env: &Env, campaign: &Campaign) -> Result<(), Error> {
    if !campaign.is_active
        || campaign.amount_returned
        || storage::is_blacklisted(env, campaign.id)
        || is_expired(env, campaign)
    {
        return Err(Error::CampaignUnavailable);
    }
    Ok(())
}

pub fn require_positive(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}
