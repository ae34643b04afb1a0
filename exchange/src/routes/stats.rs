//! `/stats` routes.

use std::sync::Arc;

use axum::{extract::Path, Extension, Json};

use primitives::{DailyStats, Stats};

use crate::{
    db,
    response::ResponseError,
    routes::{advertiser::AdvertiserParam, campaign::CampaignParam},
    Application,
};

/// `GET /stats/campaigns/:campaign_id` request handler.
pub async fn campaign_stats(
    Extension(app): Extension<Arc<Application>>,
    Path(param): Path<CampaignParam>,
) -> Result<Json<Stats>, ResponseError> {
    let stats =
        db::campaign_stats(&app.store, &param.campaign_id)?.ok_or(ResponseError::NotFound)?;

    Ok(Json(stats))
}

/// `GET /stats/campaigns/:campaign_id/daily` request handler.
pub async fn campaign_daily_stats(
    Extension(app): Extension<Arc<Application>>,
    Path(param): Path<CampaignParam>,
) -> Result<Json<Vec<DailyStats>>, ResponseError> {
    let stats =
        db::campaign_daily_stats(&app.store, &param.campaign_id)?.ok_or(ResponseError::NotFound)?;

    Ok(Json(stats))
}

/// `GET /stats/advertisers/:advertiser_id/campaigns` request handler.
///
/// Aggregates over all of the advertiser's campaigns.
pub async fn advertiser_stats(
    Extension(app): Extension<Arc<Application>>,
    Path(param): Path<AdvertiserParam>,
) -> Result<Json<Stats>, ResponseError> {
    let stats =
        db::advertiser_stats(&app.store, &param.advertiser_id)?.ok_or(ResponseError::NotFound)?;

    Ok(Json(stats))
}

/// `GET /stats/advertisers/:advertiser_id/campaigns/daily` request handler.
pub async fn advertiser_daily_stats(
    Extension(app): Extension<Arc<Application>>,
    Path(param): Path<AdvertiserParam>,
) -> Result<Json<Vec<DailyStats>>, ResponseError> {
    let stats = db::advertiser_daily_stats(&app.store, &param.advertiser_id)?
        .ok_or(ResponseError::NotFound)?;

    Ok(Json(stats))
}
