//! Human-facing date formatting for tables, detail panels, and the home card.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// `2025-04-12T10:00:00Z` → `04/12/2025`.
///
/// Accepts full RFC 3339 timestamps or anything starting with a
/// `YYYY-MM-DD` date; other input is returned unchanged.
#[must_use]
pub fn short_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = OffsetDateTime::parse(raw, &Rfc3339)
        .map(OffsetDateTime::date)
        .ok()
        .or_else(|| {
            raw.get(..10)
                .and_then(|prefix| Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok())
        });
    match date {
        Some(date) => date
            .format(format_description!("[month]/[day]/[year]"))
            .unwrap_or_else(|_| raw.to_owned()),
        None => raw.to_owned(),
    }
}

/// Greeting date on the home page, e.g. `18, October 2026`.
#[must_use]
pub fn welcome_date(date: Date) -> String {
    format!("{}, {} {}", date.day(), date.month(), date.year())
}

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;
