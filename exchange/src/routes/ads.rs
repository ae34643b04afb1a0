//! `/ads` routes, the serving side of the exchange.

use std::sync::Arc;

use axum::{extract::Query, http::StatusCode, Extension, Json};
use slog::info;

use primitives::{
    api::{AdsQuery, ClickRequest, ServedAd},
    Campaign,
};

use crate::{response::ResponseError, selection, Application};

/// `GET /ads?client_id=` request handler.
///
/// Picks the best scoring eligible campaign for the client, records an
/// impression for it and returns the ad. `404 Not Found` when the client is
/// unknown or no campaign is eligible.
pub async fn serve_ad(
    Extension(app): Extension<Arc<Application>>,
    Query(query): Query<AdsQuery>,
) -> Result<Json<ServedAd>, ResponseError> {
    let served = selection::serve_ad(&app.store, &app.clock, query.client_id)
        .map_err(map_selection_error)?;

    info!(&app.logger, "Served ad"; "campaign_id" => %served.ad_id, "client_id" => %query.client_id);

    Ok(Json(served))
}

/// `POST /ads/:campaign_id/click` request handler.
///
/// The campaign is loaded by the
/// [`campaign_load`](crate::middleware::campaign::campaign_load) middleware.
/// A click without a preceding impression is `403 Forbidden`, a repeat click
/// is acknowledged without a second record.
pub async fn click_ad(
    Extension(app): Extension<Arc<Application>>,
    Extension(campaign): Extension<Campaign>,
    Json(click): Json<ClickRequest>,
) -> Result<StatusCode, ResponseError> {
    selection::record_click(&app.store, &app.clock, campaign.campaign_id, click.client_id)
        .map_err(map_selection_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn map_selection_error(error: selection::Error) -> ResponseError {
    match error {
        selection::Error::UnknownClient
        | selection::Error::UnknownCampaign
        | selection::Error::NoEligibleCampaign => ResponseError::NotFound,
        selection::Error::ClickWithoutImpression => {
            ResponseError::Forbidden(error.to_string())
        }
        selection::Error::Store(error) => ResponseError::BadRequest(error.to_string()),
    }
}
