#![deny(clippy::all)]
#![deny(rust_2018_idioms)]

use slog::Logger;

use crate::{application::Config, clock::VirtualClock, db::Store};

pub mod application;
pub mod clock;
pub mod db;
pub mod response;
pub mod selection;

pub mod middleware {
    pub mod advertiser;
    pub mod campaign;
}
pub mod routes {
    pub mod ads;
    pub mod advertiser;
    pub mod campaign;
    pub mod client;
    pub mod routers;
    pub mod stats;
    pub mod time;
}

#[cfg(test)]
pub mod test_util;

/// The shared state of the exchange REST API web server.
///
/// Cheap to clone, the store and the clock are handles over shared state.
#[derive(Clone)]
pub struct Application {
    pub config: Config,
    pub logger: Logger,
    pub store: Store,
    pub clock: VirtualClock,
}

impl Application {
    pub fn new(config: Config, logger: Logger, store: Store, clock: VirtualClock) -> Self {
        Self {
            config,
            logger,
            store,
            clock,
        }
    }
}
