// Accounting invariants shared by the scenario and property tests.

extern crate std;

use std::vec::Vec;

use soroban_sdk::{token, Address};

use crate::{Campaign, FundraiserClient};

/// Full observable state of one campaign: the record plus every listed
/// donor's balance, in list order.
pub type CampaignSnapshot = (Campaign, bool, Vec<(Address, i128)>);

pub fn snapshot(client: &FundraiserClient) -> Vec<CampaignSnapshot> {
    let mut out = Vec::new();
    for id in 0..client.campaign_count() {
        let campaign = client.get_campaign(&id);
        let blacklisted = client.is_blacklisted(&id);
        let mut donors = Vec::new();
        for index in 0..client.donor_count(&id) {
            let donor = client.donor_at(&id, &index);
            let balance = client.donation_of(&id, &donor);
            donors.push((donor, balance));
        }
        out.push((campaign, blacklisted, donors));
    }
    out
}

/// Panics unless every campaign's books balance and the contract holds
/// exactly the unclaimed total of all campaigns.
pub fn assert_ledger_consistent(client: &FundraiserClient, token: &token::Client) {
    let mut unclaimed_total: i128 = 0;

    for (campaign, _, donors) in snapshot(client) {
        let mut sum: i128 = 0;
        for (donor, balance) in donors.iter() {
            assert!(*balance >= 0, "negative balance for {:?}", donor);
            if campaign.amount_returned {
                assert_eq!(*balance, 0, "refunded campaign still owes a donor");
            }
            sum += *balance;
        }

        assert_eq!(campaign.amount_raised, sum, "raised != sum of donor balances");
        assert!(campaign.amount_claimed >= 0);
        assert!(campaign.amount_claimed <= campaign.amount_raised);
        assert!(campaign.amount_raised <= campaign.target_amount);
        assert!(campaign.total_supporters <= donors.len() as u32);

        unclaimed_total += campaign.unclaimed();
    }

    assert_eq!(token.balance(&client.address), unclaimed_total);
}
