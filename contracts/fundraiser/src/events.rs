use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignStarted {
    pub campaign_id: u64,
    pub raised_by: Address,
    pub raised_for: Address,
    pub target_amount: i128,
    pub deadline: u32,
    pub about: String,
    pub category: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivationStatusChanged {
    pub campaign_id: u64,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationSuccessful {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateSuccessful {
    pub campaign_id: u64,
    pub target_amount: i128,
    pub about: String,
    pub category: u32,
    pub deadline: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimSuccessful {
    pub campaign_id: u64,
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawSuccessful {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlacklistedStatusChanged {
    pub campaign_id: u64,
    pub is_blacklisted: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationsReturned {
    pub campaign_id: u64,
    pub donors_refunded: u32,
    pub total_returned: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_campaign_started(env: &Env, data: CampaignStarted) {
    let topics = (symbol_short!("started"), data.campaign_id);
    env.events().publish(topics, data);
}

pub fn emit_activation_changed(env: &Env, campaign_id: u64, is_active: bool) {
    let topics = (symbol_short!("activated"), campaign_id);
    let data = ActivationStatusChanged {
        campaign_id,
        is_active,
    };
    env.events().publish(topics, data);
}

pub fn emit_donation(env: &Env, campaign_id: u64, donor: Address, amount: i128) {
    let topics = (symbol_short!("donated"), campaign_id);
    let data = DonationSuccessful {
        campaign_id,
        donor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_update(env: &Env, data: UpdateSuccessful) {
    let topics = (symbol_short!("updated"), data.campaign_id);
    env.events().publish(topics, data);
}

pub fn emit_claim(env: &Env, campaign_id: u64, beneficiary: Address, amount: i128) {
    let topics = (symbol_short!("claimed"), campaign_id);
    let data = ClaimSuccessful {
        campaign_id,
        beneficiary,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdraw(env: &Env, campaign_id: u64, donor: Address, amount: i128) {
    let topics = (symbol_short!("withdrawn"), campaign_id);
    let data = WithdrawSuccessful {
        campaign_id,
        donor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_blacklist_changed(env: &Env, campaign_id: u64, is_blacklisted: bool) {
    let topics = (symbol_short!("blacklist"), campaign_id);
    let data = BlacklistedStatusChanged {
        campaign_id,
        is_blacklisted,
    };
    env.events().publish(topics, data);
}

pub fn emit_donations_returned(
    env: &Env,
    campaign_id: u64,
    donors_refunded: u32,
    total_returned: i128,
) {
    let topics = (symbol_short!("returned"), campaign_id);
    let data = DonationsReturned {
        campaign_id,
        donors_refunded,
        total_returned,
    };
    env.events().publish(topics, data);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    let topics = (symbol_short!("owner"),);
    let data = OwnershipTransferred {
        previous_owner,
        new_owner,
    };
    env.events().publish(topics, data);
}
