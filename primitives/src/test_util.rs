//! Shared fixtures for tests, available to downstream crates through the
//! `test-util` feature.

use once_cell::sync::Lazy;

use crate::{Advertiser, Campaign, Client, Day, Gender, MlScore};

pub static DUMMY_ADVERTISER: Lazy<Advertiser> = Lazy::new(|| Advertiser {
    advertiser_id: "b2c8e1a0-5b7d-4c4e-9f3a-2d1e8c7b6a50"
        .parse()
        .expect("Valid UUID"),
    name: "Dummy Advertiser".to_string(),
});

pub static DUMMY_ADVERTISER_2: Lazy<Advertiser> = Lazy::new(|| Advertiser {
    advertiser_id: "7d0c0c4e-2ad0-4e1b-b8c3-9f6e5a4d3c2b"
        .parse()
        .expect("Valid UUID"),
    name: "Dummy Advertiser 2".to_string(),
});

pub static DUMMY_CLIENT: Lazy<Client> = Lazy::new(|| Client {
    client_id: "a6f2e3d4-1b0c-4d5e-8f9a-7c6b5a4d3e2f"
        .parse()
        .expect("Valid UUID"),
    login: "dummy".to_string(),
    age: 25,
    location: "New mexico".to_string(),
    gender: Gender::Male,
});

pub static DUMMY_CAMPAIGN: Lazy<Campaign> = Lazy::new(|| Campaign {
    campaign_id: "f3f1e6a2-0c3b-4a8e-b7c6-5d4e3f2a1b0c"
        .parse()
        .expect("Valid UUID"),
    advertiser_id: DUMMY_ADVERTISER.advertiser_id,
    impressions_limit: 100,
    clicks_limit: 10,
    cost_per_impression: 0.5,
    cost_per_click: 5.0,
    ad_title: "Dummy ad".to_string(),
    ad_text: "Dummy ad text".to_string(),
    start_date: Day::new(0),
    end_date: Day::new(10),
    targeting: None,
    impressions_count: 0,
    clicks_count: 0,
});

pub static DUMMY_ML_SCORE: Lazy<MlScore> = Lazy::new(|| MlScore {
    advertiser_id: DUMMY_ADVERTISER.advertiser_id,
    client_id: DUMMY_CLIENT.client_id,
    score: 0.5,
});
