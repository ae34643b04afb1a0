//! The exchange REST API [`Router`].
//!
//! # Routes
//!
//! - `POST /advertisers/bulk` and `POST /clients/bulk` upsert entities
//! - `/advertisers/:advertiser_id/campaigns` carries the campaign CRUD and
//!   runs behind the [`advertiser_load`] middleware
//! - `GET /ads` serves the best scoring campaign for a client,
//!   `POST /ads/:campaign_id/click` records a click behind [`campaign_load`]
//! - `POST /ml-scores` feeds the scoring engine
//! - `POST /time/advance` moves the virtual day
//! - `/stats` exposes the aggregated and per-day spend statistics

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::{
    middleware::{advertiser::advertiser_load, campaign::campaign_load},
    routes::{
        ads::{click_ad, serve_ad},
        advertiser::{create_advertisers, get_advertiser},
        campaign::{
            campaign_list, create_campaign, delete_campaign, get_campaign, update_campaign,
        },
        client::{create_clients, get_client, upsert_ml_score},
        stats::{
            advertiser_daily_stats, advertiser_stats, campaign_daily_stats, campaign_stats,
        },
        time::advance_day,
    },
    Application,
};

pub fn application_router(app: Arc<Application>) -> Router {
    let campaign_routes = Router::new()
        .route("/", post(create_campaign).get(campaign_list))
        .route(
            "/:campaign_id",
            get(get_campaign)
                .put(update_campaign)
                .delete(delete_campaign),
        )
        .layer(
            // keeps the order from top to bottom!
            ServiceBuilder::new()
                // Load the advertiser from the store based on the AdvertiserId
                .layer(middleware::from_fn(advertiser_load)),
        );

    let stats_routes = Router::new()
        .route("/campaigns/:campaign_id", get(campaign_stats))
        .route("/campaigns/:campaign_id/daily", get(campaign_daily_stats))
        .route(
            "/advertisers/:advertiser_id/campaigns",
            get(advertiser_stats),
        )
        .route(
            "/advertisers/:advertiser_id/campaigns/daily",
            get(advertiser_daily_stats),
        );

    Router::new()
        .route("/advertisers/bulk", post(create_advertisers))
        .route("/advertisers/:advertiser_id", get(get_advertiser))
        .nest("/advertisers/:advertiser_id/campaigns", campaign_routes)
        .route("/clients/bulk", post(create_clients))
        .route("/clients/:client_id", get(get_client))
        .route("/ml-scores", post(upsert_ml_score))
        .route("/ads", get(serve_ad))
        .route(
            "/ads/:campaign_id/click",
            post(click_ad).route_layer(middleware::from_fn(campaign_load)),
        )
        .route("/time/advance", post(advance_day))
        .nest("/stats", stats_routes)
        .layer(
            ServiceBuilder::new()
                .layer(Extension(app))
                .layer(CorsLayer::permissive()),
        )
}
