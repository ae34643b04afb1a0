use serde::{Deserialize, Serialize};

use crate::{AdvertiserId, ClientId};

/// An externally supplied affinity value between an advertiser and a client.
///
/// At most one score exists per (advertiser, client) pair, a repeated write
/// for the same pair overwrites the previous score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MlScore {
    pub advertiser_id: AdvertiserId,
    pub client_id: ClientId,
    pub score: f64,
}
