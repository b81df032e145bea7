use std::fmt::{Debug, Formatter};

use chrono::{DateTime, TimeDelta, Utc};

/// Half-open time window `[from, to)`.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PriceWindow {
    /// Inclusive.
    pub from: DateTime<Utc>,

    /// Exclusive.
    pub to: DateTime<Utc>,
}

impl Debug for PriceWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.from, self.to)
    }
}

impl PriceWindow {
    pub const fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    pub fn contains(self, time: DateTime<Utc>) -> bool {
        (self.from <= time) && (time < self.to)
    }

    /// Move the start back by the specified delta, keeping the end.
    pub fn extend_back(self, delta: TimeDelta) -> Self {
        Self { from: self.from - delta, to: self.to }
    }

    /// Number of hours touched by the window, partial hours rounded up.
    ///
    /// Empty and inverted windows have zero hours.
    #[must_use]
    pub fn hour_count(self) -> usize {
        let duration = self.to - self.from;
        let whole_hours = duration.num_hours();
        let hours =
            if duration > TimeDelta::hours(whole_hours) { whole_hours + 1 } else { whole_hours };
        usize::try_from(hours).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn window(from_hour: u32, to: DateTime<Utc>) -> PriceWindow {
        PriceWindow::new(Utc.with_ymd_and_hms(2024, 1, 1, from_hour, 0, 0).unwrap(), to)
    }

    #[test]
    fn test_hour_count_whole_hours() {
        let window = window(0, Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap());
        assert_eq!(window.hour_count(), 3);
    }

    #[test]
    fn test_hour_count_rounds_up() {
        let window = window(0, Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 1).unwrap());
        assert_eq!(window.hour_count(), 3);
    }

    #[test]
    fn test_hour_count_empty_and_inverted() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 5, 0, 0).unwrap();
        assert_eq!(window(5, from).hour_count(), 0);
        assert_eq!(window(5, from - TimeDelta::minutes(90)).hour_count(), 0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let window = window(0, Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap());
        assert!(window.contains(window.from));
        assert!(window.contains(window.to - TimeDelta::seconds(1)));
        assert!(!window.contains(window.to));
        assert!(!window.contains(window.from - TimeDelta::seconds(1)));
    }

    #[test]
    fn test_extend_back() {
        let window = window(1, Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap());
        let extended = window.extend_back(TimeDelta::hours(1));
        assert_eq!(extended.from, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(extended.to, window.to);
    }
}
