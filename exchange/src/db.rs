use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use thiserror::Error;

use primitives::{
    AdClick, AdImpression, Advertiser, AdvertiserId, Campaign, CampaignId, Client, ClientId,
};

pub use self::advertiser::*;
pub use self::campaign::*;
pub use self::client::*;
pub use self::event::*;
pub use self::ml_score::*;
pub use self::stats::*;

mod advertiser;
mod campaign;
mod client;
mod event;
mod ml_score;
mod stats;

/// All records of the exchange, kept in memory behind a single `RwLock`.
///
/// A write guard over the whole [`State`] is the transactional unit of the
/// store. Multi-step updates (re-check, insert, increment) happen under one
/// guard and are never observable half-applied.
#[derive(Debug, Default)]
pub struct State {
    pub advertisers: HashMap<AdvertiserId, Advertiser>,
    pub clients: HashMap<ClientId, Client>,
    pub campaigns: HashMap<CampaignId, Campaign>,
    /// At most one score per (advertiser, client) pair.
    pub ml_scores: HashMap<(AdvertiserId, ClientId), f64>,
    /// At most one impression per (campaign, client) pair.
    pub impressions: HashMap<(CampaignId, ClientId), AdImpression>,
    /// At most one click per (campaign, client) pair.
    pub clicks: HashMap<(CampaignId, ClientId), AdClick>,
}

/// A cloneable handle over the shared in-memory [`State`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<State>>,
}

impl Store {
    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, State>, Error> {
        self.state.read().map_err(Error::from)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, State>, Error> {
        self.state.write().map_err(Error::from)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Error occurred when trying to acquire lock for: reading")]
    Reading,
    #[error("Error occurred when trying to acquire lock for: writing")]
    Writing,
}

impl<T> From<PoisonError<RwLockReadGuard<'_, T>>> for Error {
    fn from(_: PoisonError<RwLockReadGuard<'_, T>>) -> Self {
        Error::Reading
    }
}

impl<T> From<PoisonError<RwLockWriteGuard<'_, T>>> for Error {
    fn from(_: PoisonError<RwLockWriteGuard<'_, T>>) -> Self {
        Error::Writing
    }
}
