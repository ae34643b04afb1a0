use primitives::{AdvertiserId, Campaign, CampaignId, Client, Day};

use crate::selection::{eligibility::is_eligible, scoring::Candidate};

use super::{Error, Store};

/// Inserts the campaign, returns `false` if the id is already taken.
pub fn insert_campaign(store: &Store, campaign: &Campaign) -> Result<bool, Error> {
    let mut state = store.write()?;

    if state.campaigns.contains_key(&campaign.campaign_id) {
        return Ok(false);
    }
    state
        .campaigns
        .insert(campaign.campaign_id, campaign.clone());

    Ok(true)
}

pub fn fetch_campaign(
    store: &Store,
    campaign_id: &CampaignId,
) -> Result<Option<Campaign>, Error> {
    Ok(store.read()?.campaigns.get(campaign_id).cloned())
}

/// Replaces the stored campaign, keeping the live event counters.
/// Returns `false` if no campaign with this id exists.
pub fn update_campaign(store: &Store, campaign: &Campaign) -> Result<bool, Error> {
    let mut state = store.write()?;

    match state.campaigns.get_mut(&campaign.campaign_id) {
        Some(existing) => {
            let mut updated = campaign.clone();
            updated.impressions_count = existing.impressions_count;
            updated.clicks_count = existing.clicks_count;
            *existing = updated;

            Ok(true)
        }
        None => Ok(false),
    }
}

/// Removes the campaign together with its recorded events.
/// Returns whether the campaign existed.
pub fn delete_campaign(store: &Store, campaign_id: &CampaignId) -> Result<bool, Error> {
    let mut state = store.write()?;

    let existed = state.campaigns.remove(campaign_id).is_some();
    if existed {
        state
            .impressions
            .retain(|(campaign, _), _| campaign != campaign_id);
        state
            .clicks
            .retain(|(campaign, _), _| campaign != campaign_id);
    }

    Ok(existed)
}

/// Lists the advertiser's campaigns ordered by id.
///
/// The 1st page starts the listing from 0.
pub fn list_campaigns(
    store: &Store,
    advertiser_id: &AdvertiserId,
    page: u64,
    size: u64,
) -> Result<Vec<Campaign>, Error> {
    let state = store.read()?;

    let mut campaigns = state
        .campaigns
        .values()
        .filter(|campaign| &campaign.advertiser_id == advertiser_id)
        .cloned()
        .collect::<Vec<_>>();
    campaigns.sort_by_key(|campaign| campaign.campaign_id);

    let skip = page.saturating_sub(1).saturating_mul(size) as usize;

    Ok(campaigns
        .into_iter()
        .skip(skip)
        .take(size as usize)
        .collect())
}

/// Collects the campaigns eligible for the client under a single read guard,
/// each annotated with the client's recorded events and ml score towards it.
pub fn eligible_candidates(
    store: &Store,
    client: &Client,
    today: Day,
) -> Result<Vec<Candidate>, Error> {
    let state = store.read()?;

    let candidates = state
        .campaigns
        .values()
        .filter(|campaign| is_eligible(campaign, client, today))
        .map(|campaign| {
            let pair = (campaign.campaign_id, client.client_id);

            Candidate {
                impressed: state.impressions.contains_key(&pair),
                clicked: state.clicks.contains_key(&pair),
                ml_score: state
                    .ml_scores
                    .get(&(campaign.advertiser_id, client.client_id))
                    .copied()
                    .unwrap_or_default(),
                campaign: campaign.clone(),
            }
        })
        .collect();

    Ok(candidates)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use primitives::{
        test_util::{DUMMY_ADVERTISER, DUMMY_ADVERTISER_2, DUMMY_CAMPAIGN, DUMMY_CLIENT},
        Targeting,
    };

    use crate::db::record_impression;

    use super::*;

    #[test]
    fn inserting_an_existing_id_is_rejected() {
        let store = Store::default();

        assert!(insert_campaign(&store, &DUMMY_CAMPAIGN).expect("Should insert the campaign"));
        assert!(!insert_campaign(&store, &DUMMY_CAMPAIGN)
            .expect("Should not error on a duplicate id"));
    }

    #[test]
    fn updating_keeps_the_event_counters() {
        let store = Store::default();
        insert_campaign(&store, &DUMMY_CAMPAIGN).expect("Should insert the campaign");
        assert!(record_impression(
            &store,
            &DUMMY_CAMPAIGN.campaign_id,
            &DUMMY_CLIENT.client_id,
            Day::ZERO
        )
        .expect("Should record the impression"));

        let stale_counters = Campaign {
            ad_title: "Updated".to_string(),
            impressions_count: 0,
            ..DUMMY_CAMPAIGN.clone()
        };
        assert!(update_campaign(&store, &stale_counters).expect("Should update the campaign"));

        let updated = fetch_campaign(&store, &DUMMY_CAMPAIGN.campaign_id)
            .expect("Should fetch the campaign")
            .expect("Campaign should exist");
        assert_eq!("Updated", updated.ad_title);
        assert_eq!(1, updated.impressions_count);
    }

    #[test]
    fn deleting_removes_the_recorded_events() {
        let store = Store::default();
        insert_campaign(&store, &DUMMY_CAMPAIGN).expect("Should insert the campaign");
        record_impression(
            &store,
            &DUMMY_CAMPAIGN.campaign_id,
            &DUMMY_CLIENT.client_id,
            Day::ZERO,
        )
        .expect("Should record the impression");

        assert!(delete_campaign(&store, &DUMMY_CAMPAIGN.campaign_id)
            .expect("Should delete the campaign"));
        assert!(!delete_campaign(&store, &DUMMY_CAMPAIGN.campaign_id)
            .expect("Should not error on a missing campaign"));

        assert!(store
            .read()
            .expect("Should read the state")
            .impressions
            .is_empty());
    }

    #[test]
    fn listing_is_ordered_by_id_and_paginated() {
        let store = Store::default();

        let mut campaigns = (0..3)
            .map(|index| Campaign {
                campaign_id: CampaignId::new(),
                ad_title: format!("Campaign {index}"),
                ..DUMMY_CAMPAIGN.clone()
            })
            .collect::<Vec<_>>();
        let foreign = Campaign {
            campaign_id: CampaignId::new(),
            advertiser_id: DUMMY_ADVERTISER_2.advertiser_id,
            ..DUMMY_CAMPAIGN.clone()
        };

        for campaign in campaigns.iter().chain(std::iter::once(&foreign)) {
            insert_campaign(&store, campaign).expect("Should insert the campaign");
        }
        campaigns.sort_by_key(|campaign| campaign.campaign_id);

        let listed = list_campaigns(&store, &DUMMY_ADVERTISER.advertiser_id, 1, 10)
            .expect("Should list the campaigns");
        assert_eq!(campaigns, listed);

        let second_page = list_campaigns(&store, &DUMMY_ADVERTISER.advertiser_id, 2, 2)
            .expect("Should list the campaigns");
        assert_eq!(vec![campaigns[2].clone()], second_page);
    }

    #[test]
    fn candidates_are_annotated_with_the_clients_state() {
        let store = Store::default();
        insert_campaign(&store, &DUMMY_CAMPAIGN).expect("Should insert the campaign");

        let mismatched = Campaign {
            campaign_id: CampaignId::new(),
            targeting: Some(Targeting {
                location: Some("Texas".to_string()),
                ..Default::default()
            }),
            ..DUMMY_CAMPAIGN.clone()
        };
        insert_campaign(&store, &mismatched).expect("Should insert the campaign");

        record_impression(
            &store,
            &DUMMY_CAMPAIGN.campaign_id,
            &DUMMY_CLIENT.client_id,
            Day::ZERO,
        )
        .expect("Should record the impression");

        let candidates = eligible_candidates(&store, &DUMMY_CLIENT, Day::ZERO)
            .expect("Should collect the candidates");

        assert_eq!(1, candidates.len());
        assert_eq!(DUMMY_CAMPAIGN.campaign_id, candidates[0].campaign.campaign_id);
        assert!(candidates[0].impressed);
        assert!(!candidates[0].clicked);
        assert_eq!(0.0, candidates[0].ml_score);
    }
}
