//! # Reward Countdown
//!
//! Turns "seconds until the epoch ends" into the zero-padded day/hour/minute fields
//! shown next to the reward payout.
//!
//! - [`format_time_left`] - pure formatting of a signed duration in seconds
//! - [`time_left`] - difference between an end timestamp and the current time
//! - [`EpochCountdown`] - the same, read directly off an [`Epoch`]
//!
//! Once the deadline is reached every field collapses to `"00"`. A later epoch is picked
//! up only when the epoch query hands over a new end time.
//!
//! ```rust
//! use lib_core::countdown::format_time_left;
//!
//! let left = format_time_left(90_061);
//! assert_eq!(left.to_string(), "01-01-01");
//! assert_eq!(format_time_left(-5).to_string(), "00-00-00");
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use shared::dto::epoch::Epoch;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Remaining time split into display fields, each at least two digits wide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeLeft {
    pub days: String,
    pub hours: String,
    pub minutes: String,
}

impl TimeLeft {
    /// The value shown once the deadline has passed.
    pub fn elapsed() -> Self {
        Self {
            days: "00".to_string(),
            hours: "00".to_string(),
            minutes: "00".to_string(),
        }
    }

    pub fn is_elapsed(&self) -> bool {
        *self == Self::elapsed()
    }
}

impl Default for TimeLeft {
    fn default() -> Self {
        Self::elapsed()
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.days, self.hours, self.minutes)
    }
}

/// Format a duration in whole seconds. Leftover seconds are truncated, never rounded.
pub fn format_time_left(seconds: i64) -> TimeLeft {
    if seconds <= 0 {
        return TimeLeft::elapsed();
    }

    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    TimeLeft {
        days: format!("{days:02}"),
        hours: format!("{hours:02}"),
        minutes: format!("{minutes:02}"),
    }
}

/// Time left until `end` as seen at `now`.
pub fn time_left(end: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    // num_seconds truncates toward zero, so less than a second left reads as elapsed
    format_time_left((end - now).num_seconds())
}

pub trait EpochCountdown {
    fn time_left(&self, now: DateTime<Utc>) -> TimeLeft;
}

impl EpochCountdown for Epoch {
    fn time_left(&self, now: DateTime<Utc>) -> TimeLeft {
        time_left(self.end_time, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn seconds_of(left: &TimeLeft) -> i64 {
        let days: i64 = left.days.parse().unwrap();
        let hours: i64 = left.hours.parse().unwrap();
        let minutes: i64 = left.minutes.parse().unwrap();
        days * SECONDS_PER_DAY + hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE
    }

    #[test]
    fn test_non_positive_is_sentinel() {
        for seconds in [0, -1, -59, -86_400, i64::MIN] {
            assert_eq!(format_time_left(seconds), TimeLeft::elapsed());
        }
    }

    #[test]
    fn test_one_day_one_hour_one_minute() {
        let left = format_time_left(90_061);
        assert_eq!(left.days, "01");
        assert_eq!(left.hours, "01");
        assert_eq!(left.minutes, "01");
    }

    #[test]
    fn test_truncates_not_rounds() {
        let left = format_time_left(119);
        assert_eq!(left.to_string(), "00-00-01");

        // under a minute left still shows zero minutes, but is not the sentinel input
        assert_eq!(format_time_left(59).to_string(), "00-00-00");
    }

    #[test]
    fn test_days_are_not_wrapped() {
        let left = format_time_left(123 * SECONDS_PER_DAY + 5);
        assert_eq!(left.days, "123");
        assert_eq!(left.hours, "00");
    }

    #[test]
    fn test_reconstruction_stays_within_a_minute() {
        let samples = (1..200_000).step_by(997).chain([1, 59, 60, 3_599, 3_600, 86_399, 86_400]);

        for seconds in samples {
            let left = format_time_left(seconds);
            let rebuilt = seconds_of(&left);
            assert!(rebuilt <= seconds, "{seconds}: {left}");
            assert!(rebuilt > seconds - 60, "{seconds}: {left}");
            assert!(left.days.len() >= 2 && left.hours.len() == 2 && left.minutes.len() == 2);
        }
    }

    #[test]
    fn test_end_equal_to_now_is_sentinel() {
        let now = Utc.with_ymd_and_hms(2022, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(time_left(now, now).to_string(), "00-00-00");
    }

    #[test]
    fn test_past_deadline_is_sentinel() {
        let now = Utc.with_ymd_and_hms(2022, 3, 1, 12, 0, 0).unwrap();
        let end = now - Duration::hours(3);
        assert!(time_left(end, now).is_elapsed());
    }

    #[test]
    fn test_epoch_countdown() {
        let now = Utc.with_ymd_and_hms(2022, 3, 1, 12, 0, 0).unwrap();
        let epoch = Epoch {
            identifier: "day".to_string(),
            end_time: now + Duration::hours(5) + Duration::minutes(30) + Duration::milliseconds(900),
        };

        assert_eq!(epoch.time_left(now).to_string(), "00-05-30");
    }
}
