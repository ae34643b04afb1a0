use thiserror::Error;

use primitives::{api::ServedAd, CampaignId, ClientId};

use crate::{
    clock::VirtualClock,
    db::{self, ClickWrite, Store},
};

pub mod eligibility;
pub mod scoring;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("client not found")]
    UnknownClient,
    #[error("campaign not found")]
    UnknownCampaign,
    #[error("no eligible campaign for the client")]
    NoEligibleCampaign,
    #[error("the ad was never shown to the client")]
    ClickWithoutImpression,
    #[error(transparent)]
    Store(db::Error),
}

impl From<db::Error> for Error {
    fn from(error: db::Error) -> Self {
        Error::Store(error)
    }
}

/// Picks the best scoring eligible campaign for the client and records an
/// impression for it.
///
/// Serving the same campaign to the same client again returns the ad without
/// creating a second impression record.
pub fn serve_ad(
    store: &Store,
    clock: &VirtualClock,
    client_id: ClientId,
) -> Result<ServedAd, Error> {
    let today = clock.today();
    let client = db::fetch_client(store, &client_id)?.ok_or(Error::UnknownClient)?;

    let candidates = db::eligible_candidates(store, &client, today)?;
    let ranked = scoring::rank(candidates);
    let best = ranked.first().ok_or(Error::NoEligibleCampaign)?;

    db::record_impression(store, &best.campaign.campaign_id, &client.client_id, today)?;

    Ok(ServedAd::from(&best.campaign))
}

/// Records a click on the campaign, requiring an impression to exist for the
/// pair. A repeat click is acknowledged without a second record.
pub fn record_click(
    store: &Store,
    clock: &VirtualClock,
    campaign_id: CampaignId,
    client_id: ClientId,
) -> Result<(), Error> {
    db::fetch_client(store, &client_id)?.ok_or(Error::UnknownClient)?;

    match db::record_click(store, &campaign_id, &client_id, clock.today())? {
        ClickWrite::Created | ClickWrite::Exists => Ok(()),
        ClickWrite::NoImpression => Err(Error::ClickWithoutImpression),
        ClickWrite::UnknownCampaign => Err(Error::UnknownCampaign),
    }
}
