use serde::{Deserialize, Serialize};

use crate::{targeting::Targeting, AdvertiserId, Day};

pub use campaign_id::CampaignId;

mod campaign_id {
    use std::{fmt, str::FromStr};

    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    /// A [`Uuid`] identifying a [`Campaign`](super::Campaign),
    /// (de)serialized as the plain hyphenated UUID string.
    ///
    /// The `Ord` impl orders by the underlying UUID bytes and is what the
    /// ad-selection tie-break relies on.
    #[derive(
        Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord,
    )]
    #[serde(transparent)]
    pub struct CampaignId(Uuid);

    impl CampaignId {
        /// Generates a random `CampaignId` using `Uuid::new_v4()`.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn as_uuid(&self) -> &Uuid {
            &self.0
        }
    }

    impl Default for CampaignId {
        fn default() -> Self {
            Self(Uuid::new_v4())
        }
    }

    impl From<Uuid> for CampaignId {
        fn from(uuid: Uuid) -> Self {
            Self(uuid)
        }
    }

    impl FromStr for CampaignId {
        type Err = uuid::Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(Self(s.parse()?))
        }
    }

    impl fmt::Display for CampaignId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt(f)
        }
    }
}

/// An advertiser's ad unit with budget caps and optional audience targeting.
///
/// The activation window `start_date..=end_date` is inclusive on both ends
/// and compared against the virtual [`Day`], never wall-clock time. A
/// campaign with `start_date > end_date` is not rejected, it is simply never
/// active.
///
/// The `impressions_count` / `clicks_count` counters start at 0 and are only
/// ever incremented by the event recorder, exactly once per recorded event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub campaign_id: CampaignId,
    pub advertiser_id: AdvertiserId,
    pub impressions_limit: u32,
    pub clicks_limit: u32,
    pub cost_per_impression: f64,
    pub cost_per_click: f64,
    pub ad_title: String,
    pub ad_text: String,
    pub start_date: Day,
    pub end_date: Day,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<Targeting>,
    #[serde(default)]
    pub impressions_count: u32,
    #[serde(default)]
    pub clicks_count: u32,
}

impl Campaign {
    /// Whether `today` falls inside the inclusive activation window.
    pub fn is_active(&self, today: Day) -> bool {
        self.start_date <= today && today <= self.end_date
    }
}
