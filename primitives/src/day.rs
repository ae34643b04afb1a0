use std::fmt;

use serde::{Deserialize, Serialize};

/// The virtual day of the exchange.
///
/// All campaign activation windows and event timestamps use this integer day
/// instead of wall-clock time. It only ever moves by an explicit
/// "time advance" operation, never by itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Day(u32);

impl Day {
    pub const ZERO: Day = Day(0);

    pub fn new(day: u32) -> Self {
        Self(day)
    }

    pub fn to_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for Day {
    fn from(day: u32) -> Self {
        Self(day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
