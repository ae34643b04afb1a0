//! Request and response types of the exchange REST API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    targeting, AdvertiserId, Campaign, CampaignId, ClientId, Day, Targeting,
};

/// The payload returned by `GET /ads`, the ad picked for the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServedAd {
    pub ad_id: CampaignId,
    pub ad_title: String,
    pub ad_text: String,
    pub advertiser_id: AdvertiserId,
}

impl From<&Campaign> for ServedAd {
    fn from(campaign: &Campaign) -> Self {
        Self {
            ad_id: campaign.campaign_id,
            ad_title: campaign.ad_title.clone(),
            ad_text: campaign.ad_text.clone(),
            advertiser_id: campaign.advertiser_id,
        }
    }
}

/// Query parameters of `GET /ads`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdsQuery {
    pub client_id: ClientId,
}

/// Body of `POST /ads/:campaign_id/click`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickRequest {
    pub client_id: ClientId,
}

/// Body and echo of `POST /time/advance`, the virtual-day setter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentDate {
    pub current_date: Day,
}

/// Pagination of `GET /advertisers/:advertiser_id/campaigns`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CampaignsQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

impl Default for CampaignsQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    10
}

/// JSON body of a `400 Bad Request` caused by a failed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorResponse {
    pub status_code: u64,
    pub message: String,
    pub validation: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cost values cannot be negative")]
    NegativeCost,
    #[error("{0} cannot be before today")]
    DateBeforeToday(&'static str),
    #[error("{0} is not editable after the campaign has started")]
    FrozenAfterStart(&'static str),
    #[error(transparent)]
    Targeting(#[from] targeting::Error),
}

/// All fields required to create a [`Campaign`], i.e. a [`Campaign`] without
/// an id, counters or an advertiser (both are supplied by the route).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCampaign {
    pub impressions_limit: u32,
    pub clicks_limit: u32,
    pub cost_per_impression: f64,
    pub cost_per_click: f64,
    pub ad_title: String,
    pub ad_text: String,
    pub start_date: Day,
    pub end_date: Day,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<Targeting>,
}

impl CreateCampaign {
    pub fn validate(&self, today: Day) -> Result<(), ValidationError> {
        if self.cost_per_impression < 0.0 || self.cost_per_click < 0.0 {
            return Err(ValidationError::NegativeCost);
        }
        if self.start_date < today {
            return Err(ValidationError::DateBeforeToday("start_date"));
        }
        if self.end_date < today {
            return Err(ValidationError::DateBeforeToday("end_date"));
        }
        if let Some(targeting) = &self.targeting {
            targeting.validate()?;
        }

        Ok(())
    }

    /// Creates the actual [`Campaign`] with a random [`CampaignId`] and
    /// zeroed counters.
    pub fn into_campaign(self, advertiser_id: AdvertiserId) -> Campaign {
        Campaign {
            campaign_id: CampaignId::new(),
            advertiser_id,
            impressions_limit: self.impressions_limit,
            clicks_limit: self.clicks_limit,
            cost_per_impression: self.cost_per_impression,
            cost_per_click: self.cost_per_click,
            ad_title: self.ad_title,
            ad_text: self.ad_text,
            start_date: self.start_date,
            end_date: self.end_date,
            targeting: self.targeting,
            impressions_count: 0,
            clicks_count: 0,
        }
    }
}

/// All editable fields of a [`Campaign`] for `PUT`, every one optional.
///
/// The activation window and the limits are frozen once the campaign has
/// started (`start_date <= today`); [`ModifyCampaign::validate`] rejects any
/// attempt to touch them after that point.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModifyCampaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impressions_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_impression: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_click: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Day>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Day>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<Targeting>,
}

impl ModifyCampaign {
    pub fn validate(&self, campaign: &Campaign, today: Day) -> Result<(), ValidationError> {
        if campaign.start_date <= today {
            let frozen = [
                ("start_date", self.start_date.is_some()),
                ("end_date", self.end_date.is_some()),
                ("impressions_limit", self.impressions_limit.is_some()),
                ("clicks_limit", self.clicks_limit.is_some()),
            ];
            if let Some((field, _)) = frozen.iter().copied().find(|(_, touched)| *touched) {
                return Err(ValidationError::FrozenAfterStart(field));
            }
        }

        if self.cost_per_impression.map_or(false, |cost| cost < 0.0)
            || self.cost_per_click.map_or(false, |cost| cost < 0.0)
        {
            return Err(ValidationError::NegativeCost);
        }
        if self.start_date.map_or(false, |start| start < today) {
            return Err(ValidationError::DateBeforeToday("start_date"));
        }
        if self.end_date.map_or(false, |end| end < today) {
            return Err(ValidationError::DateBeforeToday("end_date"));
        }
        if let Some(targeting) = &self.targeting {
            targeting.validate()?;
        }

        Ok(())
    }

    pub fn apply(self, mut campaign: Campaign) -> Campaign {
        if let Some(impressions_limit) = self.impressions_limit {
            campaign.impressions_limit = impressions_limit;
        }
        if let Some(clicks_limit) = self.clicks_limit {
            campaign.clicks_limit = clicks_limit;
        }
        if let Some(cost_per_impression) = self.cost_per_impression {
            campaign.cost_per_impression = cost_per_impression;
        }
        if let Some(cost_per_click) = self.cost_per_click {
            campaign.cost_per_click = cost_per_click;
        }
        if let Some(ad_title) = self.ad_title {
            campaign.ad_title = ad_title;
        }
        if let Some(ad_text) = self.ad_text {
            campaign.ad_text = ad_text;
        }
        if let Some(start_date) = self.start_date {
            campaign.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            campaign.end_date = end_date;
        }
        if let Some(targeting) = self.targeting {
            campaign.targeting = Some(targeting);
        }

        campaign
    }
}
