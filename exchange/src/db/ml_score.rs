use primitives::{AdvertiserId, ClientId, MlScore};

use super::{Error, Store};

/// Writes the score for the (advertiser, client) pair, replacing a previous
/// one. Returns `false` when either side of the pair is unknown.
pub fn upsert_ml_score(store: &Store, ml_score: &MlScore) -> Result<bool, Error> {
    let mut state = store.write()?;

    if !state.advertisers.contains_key(&ml_score.advertiser_id)
        || !state.clients.contains_key(&ml_score.client_id)
    {
        return Ok(false);
    }

    state.ml_scores.insert(
        (ml_score.advertiser_id, ml_score.client_id),
        ml_score.score,
    );

    Ok(true)
}

pub fn fetch_ml_score(
    store: &Store,
    advertiser_id: &AdvertiserId,
    client_id: &ClientId,
) -> Result<Option<f64>, Error> {
    Ok(store
        .read()?
        .ml_scores
        .get(&(*advertiser_id, *client_id))
        .copied())
}
