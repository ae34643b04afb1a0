use primitives::{Advertiser, AdvertiserId};

use super::{Error, Store};

/// Inserts or fully replaces each advertiser under one write guard.
/// Within a batch the last occurrence of an id wins.
pub fn upsert_advertisers(store: &Store, advertisers: &[Advertiser]) -> Result<(), Error> {
    let mut state = store.write()?;

    for advertiser in advertisers {
        state
            .advertisers
            .insert(advertiser.advertiser_id, advertiser.clone());
    }

    Ok(())
}

pub fn fetch_advertiser(
    store: &Store,
    advertiser_id: &AdvertiserId,
) -> Result<Option<Advertiser>, Error> {
    Ok(store.read()?.advertisers.get(advertiser_id).cloned())
}
