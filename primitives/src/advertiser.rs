use serde::{Deserialize, Serialize};

pub use advertiser_id::AdvertiserId;

mod advertiser_id {
    use std::{fmt, str::FromStr};

    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    /// A [`Uuid`] identifying an [`Advertiser`](super::Advertiser),
    /// (de)serialized as the plain hyphenated UUID string.
    #[derive(
        Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord,
    )]
    #[serde(transparent)]
    pub struct AdvertiserId(Uuid);

    impl AdvertiserId {
        /// Generates a random `AdvertiserId` using `Uuid::new_v4()`.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn as_uuid(&self) -> &Uuid {
            &self.0
        }
    }

    impl Default for AdvertiserId {
        fn default() -> Self {
            Self(Uuid::new_v4())
        }
    }

    impl From<Uuid> for AdvertiserId {
        fn from(uuid: Uuid) -> Self {
            Self(uuid)
        }
    }

    impl FromStr for AdvertiserId {
        type Err = uuid::Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(Self(s.parse()?))
        }
    }

    impl fmt::Display for AdvertiserId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt(f)
        }
    }
}

/// The owner of [`Campaign`](crate::Campaign)s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advertiser {
    pub advertiser_id: AdvertiserId,
    pub name: String,
}
