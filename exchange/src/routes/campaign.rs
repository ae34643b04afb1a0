//! `/advertisers/:advertiser_id/campaigns` routes.
//!
//! All of them run behind the
//! [`advertiser_load`](crate::middleware::advertiser::advertiser_load)
//! middleware, so the advertiser is already loaded into the request
//! extensions. A campaign belonging to a different advertiser is treated as
//! non-existent.

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use slog::info;

use primitives::{
    api::{CampaignsQuery, CreateCampaign, ModifyCampaign},
    Advertiser, Campaign, CampaignId,
};

use crate::{db, response::ResponseError, Application};

#[derive(Debug, Deserialize)]
pub struct CampaignParam {
    pub campaign_id: CampaignId,
}

/// `POST /advertisers/:advertiser_id/campaigns` request handler.
pub async fn create_campaign(
    Extension(app): Extension<Arc<Application>>,
    Extension(advertiser): Extension<Advertiser>,
    Json(create): Json<CreateCampaign>,
) -> Result<(StatusCode, Json<Campaign>), ResponseError> {
    create
        .validate(app.clock.today())
        .map_err(|error| ResponseError::FailedValidation(error.to_string()))?;

    let campaign = create.into_campaign(advertiser.advertiser_id);
    if !db::insert_campaign(&app.store, &campaign)? {
        return Err(ResponseError::Conflict(
            "Campaign already exists".to_string(),
        ));
    }

    info!(&app.logger, "Created campaign"; "campaign_id" => %campaign.campaign_id, "advertiser_id" => %advertiser.advertiser_id);

    Ok((StatusCode::CREATED, Json(campaign)))
}

/// `GET /advertisers/:advertiser_id/campaigns` request handler.
///
/// Lists the advertiser's campaigns ordered by id, paginated with the `page`
/// and `size` query parameters.
pub async fn campaign_list(
    Extension(app): Extension<Arc<Application>>,
    Extension(advertiser): Extension<Advertiser>,
    Query(query): Query<CampaignsQuery>,
) -> Result<Json<Vec<Campaign>>, ResponseError> {
    let campaigns = db::list_campaigns(
        &app.store,
        &advertiser.advertiser_id,
        query.page,
        query.size,
    )?;

    Ok(Json(campaigns))
}

/// `GET /advertisers/:advertiser_id/campaigns/:campaign_id` request handler.
pub async fn get_campaign(
    Extension(app): Extension<Arc<Application>>,
    Extension(advertiser): Extension<Advertiser>,
    Path(param): Path<CampaignParam>,
) -> Result<Json<Campaign>, ResponseError> {
    let campaign = fetch_owned_campaign(&app, &advertiser, &param.campaign_id)?;

    Ok(Json(campaign))
}

/// `PUT /advertisers/:advertiser_id/campaigns/:campaign_id` request handler.
///
/// Applies the provided fields on top of the stored campaign. The activation
/// window and the limits are rejected once the campaign has started.
pub async fn update_campaign(
    Extension(app): Extension<Arc<Application>>,
    Extension(advertiser): Extension<Advertiser>,
    Path(param): Path<CampaignParam>,
    Json(modify): Json<ModifyCampaign>,
) -> Result<Json<Campaign>, ResponseError> {
    let campaign = fetch_owned_campaign(&app, &advertiser, &param.campaign_id)?;

    modify
        .validate(&campaign, app.clock.today())
        .map_err(|error| ResponseError::FailedValidation(error.to_string()))?;

    let modified = modify.apply(campaign);
    if !db::update_campaign(&app.store, &modified)? {
        return Err(ResponseError::NotFound);
    }

    Ok(Json(modified))
}

/// `DELETE /advertisers/:advertiser_id/campaigns/:campaign_id` request
/// handler. Removes the campaign together with its recorded events.
pub async fn delete_campaign(
    Extension(app): Extension<Arc<Application>>,
    Extension(advertiser): Extension<Advertiser>,
    Path(param): Path<CampaignParam>,
) -> Result<StatusCode, ResponseError> {
    let campaign = fetch_owned_campaign(&app, &advertiser, &param.campaign_id)?;

    db::delete_campaign(&app.store, &campaign.campaign_id)?;

    info!(&app.logger, "Deleted campaign"; "campaign_id" => %campaign.campaign_id, "advertiser_id" => %advertiser.advertiser_id);

    Ok(StatusCode::NO_CONTENT)
}

fn fetch_owned_campaign(
    app: &Application,
    advertiser: &Advertiser,
    campaign_id: &CampaignId,
) -> Result<Campaign, ResponseError> {
    db::fetch_campaign(&app.store, campaign_id)?
        .filter(|campaign| campaign.advertiser_id == advertiser.advertiser_id)
        .ok_or(ResponseError::NotFound)
}
