use chrono::{DateTime, TimeDelta, Utc};

use crate::quantity::rate::KilowattHourRate;

/// Energy price valid for exactly one hour.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct PricePoint {
    valid_from: DateTime<Utc>,
    valid_to: DateTime<Utc>,
    value: KilowattHourRate,
}

impl PricePoint {
    pub fn hourly(valid_from: DateTime<Utc>, value: KilowattHourRate) -> Self {
        Self { valid_from, valid_to: valid_from + TimeDelta::hours(1), value }
    }

    /// Inclusive.
    #[must_use]
    pub const fn valid_from(&self) -> DateTime<Utc> {
        self.valid_from
    }

    /// Exclusive.
    #[must_use]
    pub const fn valid_to(&self) -> DateTime<Utc> {
        self.valid_to
    }

    pub const fn value(&self) -> KilowattHourRate {
        self.value
    }
}
