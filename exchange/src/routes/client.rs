//! `/clients` and `/ml-scores` routes.

use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, Extension, Json};
use serde::Deserialize;

use primitives::{Client, ClientId, MlScore};

use crate::{db, response::ResponseError, Application};

#[derive(Debug, Deserialize)]
pub struct ClientParam {
    pub client_id: ClientId,
}

/// `POST /clients/bulk` request handler.
///
/// Inserts or fully replaces the sent clients and echoes the written records
/// back. Within the batch the last occurrence of an id wins.
pub async fn create_clients(
    Extension(app): Extension<Arc<Application>>,
    Json(clients): Json<Vec<Client>>,
) -> Result<(StatusCode, Json<Vec<Client>>), ResponseError> {
    db::upsert_clients(&app.store, &clients)?;

    let mut deduped: Vec<Client> = Vec::with_capacity(clients.len());
    for client in clients {
        match deduped
            .iter_mut()
            .find(|existing| existing.client_id == client.client_id)
        {
            Some(existing) => *existing = client,
            None => deduped.push(client),
        }
    }

    Ok((StatusCode::CREATED, Json(deduped)))
}

/// `GET /clients/:client_id` request handler.
pub async fn get_client(
    Extension(app): Extension<Arc<Application>>,
    Path(param): Path<ClientParam>,
) -> Result<Json<Client>, ResponseError> {
    let client = db::fetch_client(&app.store, &param.client_id)?.ok_or(ResponseError::NotFound)?;

    Ok(Json(client))
}

/// `POST /ml-scores` request handler.
///
/// Writes the score for the (advertiser, client) pair, replacing a previous
/// one. Responds with `404 Not Found` when either side is unknown.
pub async fn upsert_ml_score(
    Extension(app): Extension<Arc<Application>>,
    Json(ml_score): Json<MlScore>,
) -> Result<StatusCode, ResponseError> {
    if !db::upsert_ml_score(&app.store, &ml_score)? {
        return Err(ResponseError::NotFound);
    }

    Ok(StatusCode::CREATED)
}
