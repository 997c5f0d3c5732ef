extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::{Error, Fundraiser, FundraiserClient, DAY_IN_SECONDS};

const START: u64 = 1_700_000_000;

fn setup() -> (Env, FundraiserClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let owner = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let contract_id = env.register(Fundraiser, ());
    let client = FundraiserClient::new(&env, &contract_id);
    client.init(&owner, &sac.address());

    let donor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &sac.address()).mint(&donor, &1_000_000);

    (env, client, owner, donor)
}

fn start_with_deadline(env: &Env, client: &FundraiserClient, days: u32) -> (u64, Address) {
    let creator = Address::generate(env);
    let id = client.start_campaign(
        &creator,
        &creator,
        &100_000i128,
        &days,
        &String::from_str(env, "clinic roof"),
        &1u32,
    );
    (id, creator)
}

#[test]
fn test_donation_before_deadline_succeeds() {
    let (env, client, _, donor) = setup();
    let (id, _) = start_with_deadline(&env, &client, 2);

    env.ledger().set_timestamp(START + 2 * DAY_IN_SECONDS - 1);
    assert!(!client.is_expired(&id));
    client.donate(&id, &donor, &500);

    assert_eq!(client.get_campaign(&id).amount_raised, 500);
}

#[test]
fn test_donation_at_deadline_fails() {
    let (env, client, _, donor) = setup();
    let (id, _) = start_with_deadline(&env, &client, 2);

    env.ledger().set_timestamp(START + 2 * DAY_IN_SECONDS);
    assert!(client.is_expired(&id));
    assert_eq!(
        client.try_donate(&id, &donor, &500),
        Err(Ok(Error::CampaignUnavailable))
    );
    assert_eq!(client.get_campaign(&id).amount_raised, 0);
}

#[test]
fn test_zero_deadline_never_expires() {
    let (env, client, _, donor) = setup();
    let (id, _) = start_with_deadline(&env, &client, 0);
    assert_eq!(client.get_campaign(&id).expires_at, 0);

    env.ledger().set_timestamp(START + 10_000 * DAY_IN_SECONDS);
    assert!(!client.is_expired(&id));
    client.donate(&id, &donor, &1);
}

#[test]
fn test_withdraw_allowed_after_deadline() {
    let (env, client, _, donor) = setup();
    let (id, _) = start_with_deadline(&env, &client, 1);
    client.donate(&id, &donor, &800);

    env.ledger().set_timestamp(START + 3 * DAY_IN_SECONDS);
    client.withdraw(&donor, &id, &800);

    assert_eq!(client.donation_of(&id, &donor), 0);
    assert_eq!(client.get_campaign(&id).amount_raised, 0);
}

#[test]
fn test_claim_and_refund_ignore_deadline() {
    let (env, client, _, donor) = setup();
    let (claimed, creator) = start_with_deadline(&env, &client, 1);
    let (refunded, refund_creator) = start_with_deadline(&env, &client, 1);
    client.donate(&claimed, &donor, &800);
    client.donate(&refunded, &donor, &200);

    env.ledger().set_timestamp(START + 3 * DAY_IN_SECONDS);
    client.claim(&creator, &claimed, &800);
    client.refund_all(&refund_creator, &refunded);

    assert_eq!(client.get_campaign(&claimed).amount_claimed, 800);
    assert!(client.get_campaign(&refunded).amount_returned);
}

#[test]
fn test_update_extends_deadline_from_creation() {
    let (env, client, _, donor) = setup();
    let (id, creator) = start_with_deadline(&env, &client, 1);

    env.ledger().set_timestamp(START + 2 * DAY_IN_SECONDS);
    assert!(client.is_expired(&id));

    client.update_campaign(
        &creator,
        &id,
        &100_000i128,
        &String::from_str(&env, "clinic roof"),
        &1u32,
        &5u32,
    );

    let campaign = client.get_campaign(&id);
    assert_eq!(campaign.expires_at, START + 5 * DAY_IN_SECONDS);
    assert!(!client.is_expired(&id));
    client.donate(&id, &donor, &10);
}

#[test]
fn test_update_can_remove_deadline() {
    let (env, client, owner, donor) = setup();
    let (id, _) = start_with_deadline(&env, &client, 1);

    env.ledger().set_timestamp(START + 2 * DAY_IN_SECONDS);
    client.update_campaign(
        &owner,
        &id,
        &100_000i128,
        &String::from_str(&env, "clinic roof"),
        &1u32,
        &0u32,
    );

    assert_eq!(client.get_campaign(&id).expires_at, 0);
    client.donate(&id, &donor, &10);
}

#[test]
fn test_is_expired_unknown_campaign() {
    let (_env, client, _, _) = setup();
    assert_eq!(client.try_is_expired(&3), Err(Ok(Error::NotFound)));
}
