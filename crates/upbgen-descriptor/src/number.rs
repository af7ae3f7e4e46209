use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

///
/// FieldNumber
///
/// Wire tag number of a field. Ordering is numeric, which is the order the
/// minitable builder lays field storage out in.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct FieldNumber(u32);

impl FieldNumber {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(536_870_911);

    /// Numbers reserved for the protobuf implementation itself.
    pub const RESERVED: RangeInclusive<u32> = 19_000..=19_999;

    /// Wrap a raw number without range checks; pool validation rejects
    /// anything outside `MIN..=MAX` or inside `RESERVED`.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.0 >= Self::MIN.0 && self.0 <= Self::MAX.0
    }

    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0 >= *Self::RESERVED.start() && self.0 <= *Self::RESERVED.end()
    }
}

impl From<u32> for FieldNumber {
    fn from(number: u32) -> Self {
        Self::new(number)
    }
}

///
/// TESTS
///
