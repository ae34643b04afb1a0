use std::collections::{BTreeMap, HashSet};

use primitives::{AdvertiserId, CampaignId, DailyStats, Day, Stats};

use super::{Error, State, Store};

/// Aggregated stats of a single campaign, `None` for an unknown id.
pub fn campaign_stats(store: &Store, campaign_id: &CampaignId) -> Result<Option<Stats>, Error> {
    let state = store.read()?;

    if !state.campaigns.contains_key(campaign_id) {
        return Ok(None);
    }

    let mut campaigns = HashSet::new();
    campaigns.insert(*campaign_id);

    Ok(Some(fold_stats(&state, &campaigns).finalize()))
}

/// Aggregated stats over all of the advertiser's campaigns, `None` for an
/// unknown id.
pub fn advertiser_stats(
    store: &Store,
    advertiser_id: &AdvertiserId,
) -> Result<Option<Stats>, Error> {
    let state = store.read()?;

    if !state.advertisers.contains_key(advertiser_id) {
        return Ok(None);
    }

    let campaigns = campaigns_of(&state, advertiser_id);

    Ok(Some(fold_stats(&state, &campaigns).finalize()))
}

/// Per-day stats of a single campaign ordered by day, `None` for an unknown
/// id. Days without any recorded event are not present.
pub fn campaign_daily_stats(
    store: &Store,
    campaign_id: &CampaignId,
) -> Result<Option<Vec<DailyStats>>, Error> {
    let state = store.read()?;

    if !state.campaigns.contains_key(campaign_id) {
        return Ok(None);
    }

    let mut campaigns = HashSet::new();
    campaigns.insert(*campaign_id);

    Ok(Some(fold_daily_stats(&state, &campaigns)))
}

/// Per-day stats over all of the advertiser's campaigns ordered by day,
/// `None` for an unknown id.
pub fn advertiser_daily_stats(
    store: &Store,
    advertiser_id: &AdvertiserId,
) -> Result<Option<Vec<DailyStats>>, Error> {
    let state = store.read()?;

    if !state.advertisers.contains_key(advertiser_id) {
        return Ok(None);
    }

    let campaigns = campaigns_of(&state, advertiser_id);

    Ok(Some(fold_daily_stats(&state, &campaigns)))
}

fn campaigns_of(state: &State, advertiser_id: &AdvertiserId) -> HashSet<CampaignId> {
    state
        .campaigns
        .values()
        .filter(|campaign| &campaign.advertiser_id == advertiser_id)
        .map(|campaign| campaign.campaign_id)
        .collect()
}

fn fold_stats(state: &State, campaigns: &HashSet<CampaignId>) -> Stats {
    let mut stats = Stats::default();

    for impression in state
        .impressions
        .values()
        .filter(|impression| campaigns.contains(&impression.campaign_id))
    {
        stats.record_impression(impression.cost);
    }
    for click in state
        .clicks
        .values()
        .filter(|click| campaigns.contains(&click.campaign_id))
    {
        stats.record_click(click.cost);
    }

    stats
}

fn fold_daily_stats(state: &State, campaigns: &HashSet<CampaignId>) -> Vec<DailyStats> {
    let mut days: BTreeMap<Day, Stats> = BTreeMap::new();

    for impression in state
        .impressions
        .values()
        .filter(|impression| campaigns.contains(&impression.campaign_id))
    {
        days.entry(impression.created_at)
            .or_default()
            .record_impression(impression.cost);
    }
    for click in state
        .clicks
        .values()
        .filter(|click| campaigns.contains(&click.campaign_id))
    {
        days.entry(click.created_at)
            .or_default()
            .record_click(click.cost);
    }

    days.into_iter()
        .map(|(date, stats)| DailyStats {
            date,
            stats: stats.finalize(),
        })
        .collect()
}
