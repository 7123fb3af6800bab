//! Display helpers shared by every view: compact counts, relative times and
//! video durations.

use chrono::{DateTime, Utc};

/// Compacts a count the way the cards show it: `1_250_000` -> `1M`,
/// `15_300` -> `15K`. Values are truncated, never rounded up.
pub fn value_converter(value: i64) -> String {
    if value >= 1_000_000 {
        format!("{}M", value / 1_000_000)
    } else if value >= 1_000 {
        format!("{}K", value / 1_000)
    } else {
        value.to_string()
    }
}

/// Same as [`value_converter`] for the decimal strings the Data API returns.
/// Unparseable input is passed through untouched, a missing count shows as `0`.
pub fn value_converter_str(raw: Option<&str>) -> String {
    match raw {
        None => "0".to_string(),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) => value_converter(value),
            Err(_) => raw.to_string(),
        },
    }
}

pub fn parse_count(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
}

pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Humanized distance between `instant` and `now`, e.g. `3 days ago` or
/// `in 2 hours`.
///
/// Every unit is the rounded absolute duration measured in that unit and the
/// first matching bucket wins:
///
/// | bucket             | output          |
/// |--------------------|-----------------|
/// | seconds < 45       | a few seconds   |
/// | minutes <= 1       | a minute        |
/// | minutes < 45       | N minutes       |
/// | hours <= 1         | an hour         |
/// | hours < 22         | N hours         |
/// | days <= 1          | a day           |
/// | days < 26          | N days          |
/// | months <= 1        | a month         |
/// | months < 11        | N months        |
/// | years <= 1         | a year          |
/// | otherwise          | N years         |
pub fn from_now(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = (now - instant).num_milliseconds();
    let phrase = humanize(millis.unsigned_abs() as f64);

    if millis < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn humanize(millis: f64) -> String {
    let seconds = (millis / 1_000.0).round();
    let minutes = (millis / 60_000.0).round();
    let hours = (millis / 3_600_000.0).round();
    let exact_days = millis / 86_400_000.0;
    let days = exact_days.round();
    // 400 Gregorian years hold 146097 days and 4800 months
    let exact_months = exact_days * 4_800.0 / 146_097.0;
    let months = exact_months.round();
    let years = (exact_months / 12.0).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes as i64)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours as i64)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days as i64)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months as i64)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years as i64)
    }
}

/// Turns an ISO 8601 duration from `contentDetails.duration` into a clock
/// label: `PT4M13S` -> `4:13`, `PT1H2M3S` -> `1:02:03`.
///
/// Designators must appear at most once and in `W D T H M S` order.
pub fn format_duration(raw: &str) -> Option<String> {
    let rest = raw.strip_prefix('P')?;

    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut in_time = false;
    let mut time_units = 0;
    let mut last_rank: Option<u8> = None;

    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'T' if !in_time && digits.is_empty() => in_time = true,
            unit => {
                let value: u64 = digits.parse().ok()?;
                digits.clear();
                let (rank, seconds) = match (unit, in_time) {
                    ('W', false) => (0, 7 * 86_400),
                    ('D', false) => (1, 86_400),
                    ('H', true) => (2, 3_600),
                    ('M', true) => (3, 60),
                    ('S', true) => (4, 1),
                    _ => return None,
                };
                if last_rank.is_some_and(|last| rank <= last) {
                    return None;
                }
                last_rank = Some(rank);
                if in_time {
                    time_units += 1;
                }
                total = total.checked_add(value.checked_mul(seconds)?)?;
            }
        }
    }

    if !digits.is_empty() || last_rank.is_none() || (in_time && time_units == 0) {
        return None;
    }

    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        Some(format!("{}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Some(format!("{}:{:02}", minutes, seconds))
    }
}
