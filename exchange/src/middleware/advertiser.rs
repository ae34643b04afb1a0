use std::sync::Arc;

use axum::{
    extract::{Path, RequestParts},
    middleware::Next,
};
use serde::Deserialize;

use primitives::AdvertiserId;

use crate::{db::fetch_advertiser, response::ResponseError, Application};

/// This struct is required because of routes that have more parameters
/// apart from the `AdvertiserId`
#[derive(Debug, Deserialize)]
struct AdvertiserParam {
    pub advertiser_id: AdvertiserId,
}

/// Loads the [`Advertiser`](primitives::Advertiser) from the store based on
/// the `:advertiser_id` path parameter and inserts it into the request
/// extensions.
pub async fn advertiser_load<B>(
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

    let advertiser_id = request_parts
        .extract::<Path<AdvertiserParam>>()
        .await
        .map_err(|_| ResponseError::BadRequest("Bad Advertiser Id".to_string()))?
        .advertiser_id;

    let advertiser = fetch_advertiser(&store, &advertiser_id)?.ok_or(ResponseError::NotFound)?;

    request_parts.extensions_mut().insert(advertiser);

    let request = request_parts.try_into_request().expect("Body extracted");

    Ok(next.run(request).await)
}
