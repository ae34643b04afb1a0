use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

pub use client_id::ClientId;

mod client_id {
    use std::{fmt, str::FromStr};

    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    /// A [`Uuid`] identifying a [`Client`](super::Client),
    /// (de)serialized as the plain hyphenated UUID string.
    #[derive(
        Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord,
    )]
    #[serde(transparent)]
    pub struct ClientId(Uuid);

    impl ClientId {
        /// Generates a random `ClientId` using `Uuid::new_v4()`.
        pub fn new() -> Self {
            Self::default()
        }

        pub fn as_uuid(&self) -> &Uuid {
            &self.0
        }
    }

    impl Default for ClientId {
        fn default() -> Self {
            Self(Uuid::new_v4())
        }
    }

    impl From<Uuid> for ClientId {
        fn from(uuid: Uuid) -> Self {
            Self(uuid)
        }
    }

    impl FromStr for ClientId {
        type Err = uuid::Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(Self(s.parse()?))
        }
    }

    impl fmt::Display for ClientId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt(f)
        }
    }
}

/// The gender of a [`Client`].
///
/// Unlike [`AudienceGender`](crate::AudienceGender) there is no `ALL` value,
/// a client is always one concrete gender.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, FromStr, Hash, PartialEq, Eq,
)]
#[serde(rename_all = "UPPERCASE")]
#[display(style = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

/// An end user to whom ads are served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub client_id: ClientId,
    pub login: String,
    pub age: u32,
    pub location: String,
    pub gender: Gender,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn de_serializes_client_with_uppercase_gender() {
        let client = Client {
            client_id: "6f2a3e64-1b5c-4f7a-8c3d-9e0b1a2c3d4e"
                .parse()
                .expect("Should parse ClientId"),
            login: "jane".to_string(),
            age: 25,
            location: "New mexico".to_string(),
            gender: Gender::Female,
        };

        let expected = json!({
            "client_id": "6f2a3e64-1b5c-4f7a-8c3d-9e0b1a2c3d4e",
            "login": "jane",
            "age": 25,
            "location": "New mexico",
            "gender": "FEMALE",
        });

        assert_eq!(
            expected,
            serde_json::to_value(&client).expect("Should serialize")
        );
        assert_eq!(
            client,
            serde_json::from_value::<Client>(expected).expect("Should deserialize")
        );
    }

    #[test]
    fn gender_display_and_from_str() {
        assert_eq!("MALE", Gender::Male.to_string());
        assert_eq!(Gender::Female, "FEMALE".parse().expect("Should parse"));
        assert!("ALL".parse::<Gender>().is_err());
    }
}
