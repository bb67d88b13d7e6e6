//! Time-bucket aggregation of normalized entries.
//!
//! Buckets are `width` wide and anchored at midnight UTC of the earliest
//! entry's day, so hourly or daily buckets line up with the clock. Within a
//! bucket texts and photos are space-joined in input order; buckets come out
//! in ascending date order.
//!
//! A bucket is dropped only when *both* joined strings are empty. The check
//! runs after joining, so two entries without photos join to a single space
//! and keep their bucket.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

use crate::models::{AggregatedEntry, Frequency, NormalizedEntry};

/// Start of the bucket containing `date`, for buckets anchored at `origin`.
pub fn bucket_start(
    date: DateTime<Utc>,
    origin: DateTime<Utc>,
    frequency: Frequency,
) -> DateTime<Utc> {
    let width = frequency.num_seconds();
    let offset = (date - origin).num_seconds();
    origin + TimeDelta::seconds(offset.div_euclid(width) * width)
}

/// Midnight UTC of the given instant's day.
fn start_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    date.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Group entries into `frequency`-wide buckets.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use facebook_to_journal::aggregator::aggregate;
/// use facebook_to_journal::models::NormalizedEntry;
///
/// let at = |s| DateTime::from_timestamp(s, 0).unwrap();
/// let entries = vec![
///     NormalizedEntry { date: at(3600), text: "A".into(), photo: String::new() },
///     NormalizedEntry { date: at(4200), text: "B".into(), photo: String::new() },
/// ];
///
/// let rows = aggregate(&entries, "1 hour".parse().unwrap());
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].text, "A B");
/// ```
pub fn aggregate(entries: &[NormalizedEntry], frequency: Frequency) -> Vec<AggregatedEntry> {
    let Some(origin) = entries.iter().map(|e| e.date).min().map(start_of_day) else {
        return Vec::new();
    };

    let mut buckets: BTreeMap<DateTime<Utc>, (Vec<&str>, Vec<&str>)> = BTreeMap::new();
    for entry in entries {
        let start = bucket_start(entry.date, origin, frequency);
        let (texts, photos) = buckets.entry(start).or_default();
        texts.push(&entry.text);
        photos.push(&entry.photo);
    }

    buckets
        .into_iter()
        .map(|(date, (texts, photos))| AggregatedEntry {
            date,
            text: texts.join(" "),
            photo: photos.join(" "),
        })
        .filter(|row| !row.is_empty())
        .collect()
}
