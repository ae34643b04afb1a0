use std::sync::Arc;

use axum::{
    extract::{Path, RequestParts},
    middleware::Next,
};
use serde::Deserialize;

use primitives::CampaignId;

use crate::{db::fetch_campaign, response::ResponseError, Application};

/// This struct is required because of routes that have more parameters
/// apart from the `CampaignId`
#[derive(Debug, Deserialize)]
struct CampaignParam {
    pub campaign_id: CampaignId,
}

/// Loads the [`Campaign`](primitives::Campaign) from the store based on the
/// `:campaign_id` path parameter and inserts it into the request extensions.
pub async fn campaign_load<B>(
    request: axum::http::Request<B>,
    next: Next<B>,
) -> Result<axum::response::Response, ResponseError>
where
    B: Send,
{
    let store = request
        .extensions()
        .get::<Arc<Application>>()
        .expect("Application should always be present")
        .store
        .clone();

    // running extractors requires a `RequestParts`
    let mut request_parts = RequestParts::new(request);

    let campaign_id = request_parts
        .extract::<Path<CampaignParam>>()
        .await
        .map_err(|_| ResponseError::BadRequest("Bad Campaign Id".to_string()))?
        .campaign_id;

    let campaign = fetch_campaign(&store, &campaign_id)?.ok_or(ResponseError::NotFound)?;

    request_parts.extensions_mut().insert(campaign);

    let request = request_parts.try_into_request().expect("Body extracted");

    Ok(next.run(request).await)
}
