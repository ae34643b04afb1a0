use primitives::{AdClick, AdImpression, CampaignId, ClientId, Day};

use super::{Error, Store};

/// Outcome of [`record_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickWrite {
    /// A new click record was created and the campaign counter bumped.
    Created,
    /// The pair has already clicked, nothing was written.
    Exists,
    /// No impression exists for the pair, the click is rejected.
    NoImpression,
    UnknownCampaign,
}

/// Records an impression for the (campaign, client) pair unless one already
/// exists, snapshotting the campaign's current `cost_per_impression` and
/// bumping its counter under the same write guard.
///
/// Returns whether a new record was created.
pub fn record_impression(
    store: &Store,
    campaign_id: &CampaignId,
    client_id: &ClientId,
    today: Day,
) -> Result<bool, Error> {
    let mut state = store.write()?;
    let pair = (*campaign_id, *client_id);

    if state.impressions.contains_key(&pair) {
        return Ok(false);
    }
    let cost = match state.campaigns.get(campaign_id) {
        Some(campaign) => campaign.cost_per_impression,
        None => return Ok(false),
    };

    state.impressions.insert(
        pair,
        AdImpression {
            campaign_id: *campaign_id,
            client_id: *client_id,
            created_at: today,
            cost,
        },
    );
    if let Some(campaign) = state.campaigns.get_mut(campaign_id) {
        campaign.impressions_count += 1;
    }

    Ok(true)
}

/// Records a click for the (campaign, client) pair, snapshotting the
/// campaign's current `cost_per_click` and bumping its counter under the
/// same write guard.
pub fn record_click(
    store: &Store,
    campaign_id: &CampaignId,
    client_id: &ClientId,
    today: Day,
) -> Result<ClickWrite, Error> {
    let mut state = store.write()?;
    let pair = (*campaign_id, *client_id);

    let cost = match state.campaigns.get(campaign_id) {
        Some(campaign) => campaign.cost_per_click,
        None => return Ok(ClickWrite::UnknownCampaign),
    };
    if !state.impressions.contains_key(&pair) {
        return Ok(ClickWrite::NoImpression);
    }
    if state.clicks.contains_key(&pair) {
        return Ok(ClickWrite::Exists);
    }

    state.clicks.insert(
        pair,
        AdClick {
            campaign_id: *campaign_id,
            client_id: *client_id,
            created_at: today,
            cost,
        },
    );
    if let Some(campaign) = state.campaigns.get_mut(campaign_id) {
        campaign.clicks_count += 1;
    }

    Ok(ClickWrite::Created)
}
