use serde::{Deserialize, Serialize};

use crate::{CampaignId, ClientId, Day};

/// A record that a client was shown a campaign.
///
/// Unique per (campaign, client), the recorder never creates a second
/// impression for the same pair. `cost` is a snapshot of the campaign's
/// `cost_per_impression` at creation time and is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdImpression {
    pub campaign_id: CampaignId,
    pub client_id: ClientId,
    pub created_at: Day,
    pub cost: f64,
}

/// A record that a client clicked a shown campaign.
///
/// Requires a preceding [`AdImpression`] for the same pair and is unique per
/// (campaign, client). `cost` snapshots the campaign's `cost_per_click`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdClick {
    pub campaign_id: CampaignId,
    pub client_id: ClientId,
    pub created_at: Day,
    pub cost: f64,
}
