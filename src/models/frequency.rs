//! Aggregation bucket width.
//!
//! Parses short pandas-style aliases as well as spelled-out units:
//!
//! ```text
//! frequency := [count] [whitespace] unit
//! unit      := S | s | sec | second(s)
//!            | T | min | minute(s)
//!            | H | h | hour(s)
//!            | D | d | day(s)
//!            | W | w | week(s)
//! ```
//!
//! Only fixed-length units are accepted; months and years vary in length and
//! cannot be expressed as a single bucket width.
//!
//! # Examples
//!
//! ```rust
//! # use facebook_to_journal::models::Frequency;
//! let hourly: Frequency = "1 hour".parse().unwrap();
//! assert_eq!(hourly, "1H".parse::<Frequency>().unwrap());
//! assert_eq!(hourly.width().num_minutes(), 60);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use thiserror::Error;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrequencyError {
    #[error("frequency must not be empty")]
    Empty,
    #[error("invalid frequency count '{0}'")]
    InvalidCount(String),
    #[error("unknown frequency unit '{0}' (expected seconds, minutes, hours, days or weeks)")]
    UnknownUnit(String),
    #[error("frequency must be greater than zero")]
    NonPositive,
    #[error("frequency is too large")]
    OutOfRange,
}

/// Fixed-width time bucket used to group journal entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frequency(TimeDelta);

impl Frequency {
    pub fn new(width: TimeDelta) -> Result<Self, FrequencyError> {
        if width.num_seconds() <= 0 {
            return Err(FrequencyError::NonPositive);
        }
        Ok(Self(width))
    }

    pub fn width(&self) -> TimeDelta {
        self.0
    }

    pub fn num_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    /// Buckets that span whole days are labelled by date alone.
    pub fn is_whole_days(&self) -> bool {
        self.num_seconds() % SECONDS_PER_DAY == 0
    }

    /// `strftime` pattern for labelling a bucket start at this resolution.
    pub fn date_format(&self) -> &'static str {
        if self.is_whole_days() { "%Y-%m-%d" } else { "%Y-%m-%d %H:%M" }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self(TimeDelta::hours(1))
    }
}

impl FromStr for Frequency {
    type Err = FrequencyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(FrequencyError::Empty);
        }

        let split = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
        let (count, unit) = input.split_at(split);
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<i64>().map_err(|_| FrequencyError::InvalidCount(count.to_string()))?
        };
        if count == 0 {
            return Err(FrequencyError::NonPositive);
        }

        let unit = unit.trim();
        let unit_seconds =
            unit_seconds(unit).ok_or_else(|| FrequencyError::UnknownUnit(unit.to_string()))?;
        let seconds = count.checked_mul(unit_seconds).ok_or(FrequencyError::OutOfRange)?;
        let width = TimeDelta::try_seconds(seconds).ok_or(FrequencyError::OutOfRange)?;

        Self::new(width)
    }
}

fn unit_seconds(unit: &str) -> Option<i64> {
    // Single-letter pandas aliases are case-sensitive ("M" would be month end there)
    match unit {
        "S" | "s" => return Some(1),
        "T" => return Some(SECONDS_PER_MINUTE),
        "H" | "h" => return Some(SECONDS_PER_HOUR),
        "D" | "d" => return Some(SECONDS_PER_DAY),
        "W" | "w" => return Some(SECONDS_PER_WEEK),
        _ => {}
    }

    match unit.to_lowercase().as_str() {
        "sec" | "secs" | "second" | "seconds" => Some(1),
        "min" | "mins" | "minute" | "minutes" => Some(SECONDS_PER_MINUTE),
        "hour" | "hours" => Some(SECONDS_PER_HOUR),
        "day" | "days" => Some(SECONDS_PER_DAY),
        "week" | "weeks" => Some(SECONDS_PER_WEEK),
        _ => None,
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.num_seconds();
        let (count, unit) = [
            (SECONDS_PER_WEEK, "week"),
            (SECONDS_PER_DAY, "day"),
            (SECONDS_PER_HOUR, "hour"),
            (SECONDS_PER_MINUTE, "minute"),
        ]
        .into_iter()
        .find(|(size, _)| seconds % size == 0)
        .map(|(size, unit)| (seconds / size, unit))
        .unwrap_or((seconds, "second"));

        if count == 1 { write!(f, "1 {}", unit) } else { write!(f, "{} {}s", count, unit) }
    }
}
