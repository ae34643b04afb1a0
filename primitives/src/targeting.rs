use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{client::Gender, Client};

/// The audience a [`Campaign`](crate::Campaign) is restricted to.
///
/// Every field is optional and an unset field imposes no constraint,
/// so `Targeting::default()` matches any client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Targeting {
    #[serde(default)]
    pub gender: Option<AudienceGender>,
    /// Inclusive lower bound on the client's age.
    #[serde(default)]
    pub age_from: Option<u32>,
    /// Inclusive upper bound on the client's age.
    #[serde(default)]
    pub age_to: Option<u32>,
    /// Exact, case-sensitive match against the client's location.
    #[serde(default)]
    pub location: Option<String>,
}

/// The gender of the targeted audience, `ALL` matches both client genders.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, FromStr, Hash, PartialEq, Eq,
)]
#[serde(rename_all = "UPPERCASE")]
#[display(style = "UPPERCASE")]
pub enum AudienceGender {
    Male,
    Female,
    All,
}

impl AudienceGender {
    pub fn matches(self, gender: Gender) -> bool {
        match self {
            AudienceGender::All => true,
            AudienceGender::Male => gender == Gender::Male,
            AudienceGender::Female => gender == Gender::Female,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("age_from cannot be greater than age_to")]
    InvalidAgeRange,
}

impl Targeting {
    /// Checks whether the client belongs to the targeted audience.
    ///
    /// Each constraint is evaluated independently, all set constraints must
    /// hold. The date window and budget caps of the campaign are a separate
    /// concern and are not checked here.
    pub fn matches(&self, client: &Client) -> bool {
        let gender = self
            .gender
            .map_or(true, |audience| audience.matches(client.gender));
        let age_from = self.age_from.map_or(true, |from| from <= client.age);
        let age_to = self.age_to.map_or(true, |to| client.age <= to);
        let location = self
            .location
            .as_deref()
            .map_or(true, |location| location == client.location);

        gender && age_from && age_to && location
    }

    /// Validates the invariant `age_from <= age_to` when both bounds are set.
    ///
    /// Enforced at campaign-write time only, a stored violating range simply
    /// matches no client.
    pub fn validate(&self) -> Result<(), Error> {
        match (self.age_from, self.age_to) {
            (Some(from), Some(to)) if from > to => Err(Error::InvalidAgeRange),
            _ => Ok(()),
        }
    }
}
