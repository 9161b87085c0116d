// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{Datelike, NaiveDate};

/// Abbreviated month names in Brazilian Portuguese
const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// ISO-8601 layouts accepted for publish dates
///
/// `%#z` takes `Z`, `+03`, `+0300` and `+03:00` alike.
const ISO_FORMATS: [&str; 17] = [
    // Extended date with `T` separator
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H%#z",
    "%Y-%m-%dT%H",
    // Extended date with space separator
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M%#z",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    // Basic format
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M%#z",
    "%Y%m%dT%H%M",
    "%Y%m%dT%H",
    "%Y%m%d",
];

/// Parse an ISO-8601 publish date into its calendar date
///
/// The date is the one written in the string, i.e. the day in the offset
/// the value carries. Values without an offset are taken as UTC.
pub fn parse_published_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    let mut last_error = None;

    for format in ISO_FORMATS {
        let mut parsed = Parsed::new();
        let result = parse(&mut parsed, value, StrftimeItems::new(format))
            .and_then(|()| parsed.to_naive_date());

        match result {
            Ok(date) => return Ok(date),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.map_or_else(|| "not an ISO-8601 date".to_string(), |e| e.to_string()))
}

/// Format a date as day, abbreviated month and two-digit year, e.g. `10 mai 21`
pub fn format_short_date(date: NaiveDate) -> String {
    format!(
        "{} {} {:02}",
        date.day(),
        MONTHS_PT_BR[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}

/// Parse and format an ISO-8601 publish date in one step
pub fn format_published_date(value: &str) -> Result<String, String> {
    parse_published_date(value).map(format_short_date)
}

/// Parse a duration in seconds
///
/// Any finite, non-negative number is accepted, including fractions
/// (`"12.5"`) and exponents (`"5.4e3"`). Empty, negative, infinite and
/// non-numeric values yield `None`.
pub fn parse_duration(value: &str) -> Option<f64> {
    let seconds: f64 = value.trim().parse().ok()?;
    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}

/// Render seconds as zero-padded `HH:MM:SS`
///
/// Fractions of a second are dropped. Hours are not wrapped, so very long
/// episodes render as e.g. `100:00:00`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{hours:02}:{minutes:02}:{secs:02}")
}
