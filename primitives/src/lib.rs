#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

pub mod advertiser;
pub mod api;
pub mod campaign;
pub mod client;
pub mod day;
pub mod event;
pub mod ml_score;
pub mod stats;
pub mod targeting;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use self::advertiser::{Advertiser, AdvertiserId};
pub use self::campaign::{Campaign, CampaignId};
pub use self::client::{Client, ClientId, Gender};
pub use self::day::Day;
pub use self::event::{AdClick, AdImpression};
pub use self::ml_score::MlScore;
pub use self::stats::{DailyStats, Stats};
pub use self::targeting::{AudienceGender, Targeting};
