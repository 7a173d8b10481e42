//! Time remaining until the grand opening.

use chrono::{DateTime, TimeZone};

/// Days, hours, minutes and seconds until an instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Time left from `now` until `event`.
    ///
    /// All fields are zero once the event has started.
    #[must_use]
    pub fn until<Tz1: TimeZone, Tz2: TimeZone>(event: &DateTime<Tz1>, now: &DateTime<Tz2>) -> Self {
        let remaining = event.clone().signed_duration_since(now.clone());
        if remaining.num_seconds() <= 0 {
            return Self::default();
        }
        Self {
            days: remaining.num_days(),
            hours: remaining.num_hours() % 24,
            minutes: remaining.num_minutes() % 60,
            seconds: remaining.num_seconds() % 60,
        }
    }

    /// Whether the event has started.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_breaks_down_remaining_time() {
        let now = Utc::now();
        let event = now + Duration::days(3) + Duration::hours(5) + Duration::minutes(7) + Duration::seconds(9);
        let c = Countdown::until(&event, &now);
        assert_eq!(
            c,
            Countdown {
                days: 3,
                hours: 5,
                minutes: 7,
                seconds: 9
            }
        );
        assert!(!c.is_over());
    }

    #[test]
    fn test_zero_after_start() {
        let now = Utc::now();
        let event = now - Duration::minutes(1);
        let c = Countdown::until(&event, &now);
        assert_eq!(c, Countdown::default());
        assert!(c.is_over());
    }

    #[test]
    fn test_mixed_time_zones() {
        let cat = FixedOffset::east_opt(2 * 3600).unwrap();
        let event = cat.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 7, 30, 0).unwrap();
        let c = Countdown::until(&event, &now);
        assert_eq!(c.days, 0);
        assert_eq!(c.hours, 0);
        assert_eq!(c.minutes, 30);
    }
}
