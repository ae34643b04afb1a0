//! `/advertisers` routes.

use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, Extension, Json};
use serde::Deserialize;

use primitives::{Advertiser, AdvertiserId};

use crate::{db, response::ResponseError, Application};

#[derive(Debug, Deserialize)]
pub struct AdvertiserParam {
    pub advertiser_id: AdvertiserId,
}

/// `POST /advertisers/bulk` request handler.
///
/// Inserts or fully replaces the sent advertisers and echoes the written
/// records back. Within the batch the last occurrence of an id wins.
pub async fn create_advertisers(
    Extension(app): Extension<Arc<Application>>,
    Json(advertisers): Json<Vec<Advertiser>>,
) -> Result<(StatusCode, Json<Vec<Advertiser>>), ResponseError> {
    db::upsert_advertisers(&app.store, &advertisers)?;

    Ok((StatusCode::CREATED, Json(dedup_batch(advertisers))))
}

/// `GET /advertisers/:advertiser_id` request handler.
pub async fn get_advertiser(
    Extension(app): Extension<Arc<Application>>,
    Path(param): Path<AdvertiserParam>,
) -> Result<Json<Advertiser>, ResponseError> {
    let advertiser =
        db::fetch_advertiser(&app.store, &param.advertiser_id)?.ok_or(ResponseError::NotFound)?;

    Ok(Json(advertiser))
}

/// Collapses repeated ids in the echoed batch, keeping each id at its first
/// position with its last sent record.
fn dedup_batch(advertisers: Vec<Advertiser>) -> Vec<Advertiser> {
    let mut deduped: Vec<Advertiser> = Vec::with_capacity(advertisers.len());

    for advertiser in advertisers {
        match deduped
            .iter_mut()
            .find(|existing| existing.advertiser_id == advertiser.advertiser_id)
        {
            Some(existing) => *existing = advertiser,
            None => deduped.push(advertiser),
        }
    }

    deduped
}
