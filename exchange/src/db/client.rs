use primitives::{Client, ClientId};

use super::{Error, Store};

/// Inserts or fully replaces each client under one write guard.
/// Within a batch the last occurrence of an id wins.
pub fn upsert_clients(store: &Store, clients: &[Client]) -> Result<(), Error> {
    let mut state = store.write()?;

    for client in clients {
        state.clients.insert(client.client_id, client.clone());
    }

    Ok(())
}

pub fn fetch_client(store: &Store, client_id: &ClientId) -> Result<Option<Client>, Error> {
    Ok(store.read()?.clients.get(client_id).cloned())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use primitives::test_util::DUMMY_CLIENT;

    use super::*;

    #[test]
    fn upserting_replaces_existing_records() {
        let store = Store::default();

        upsert_clients(&store, &[DUMMY_CLIENT.clone()]).expect("Should insert the client");

        let relocated = Client {
            location: "Texas".to_string(),
            ..DUMMY_CLIENT.clone()
        };
        upsert_clients(&store, &[relocated.clone()]).expect("Should replace the client");

        assert_eq!(
            Some(relocated),
            fetch_client(&store, &DUMMY_CLIENT.client_id).expect("Should fetch the client")
        );
    }
}
