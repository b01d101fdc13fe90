use super::*;
use time::Month;

#[test]
fn short_date_from_rfc3339() {
    assert_eq!(short_date("2025-04-12T10:00:00Z"), "04/12/2025");
    assert_eq!(short_date("2025-04-12T23:30:00+02:00"), "04/12/2025");
}

#[test]
fn short_date_from_naive_timestamp_prefix() {
    assert_eq!(short_date("2025-04-12T10:00:00.123456"), "04/12/2025");
    assert_eq!(short_date("2025-04-12"), "04/12/2025");
}

#[test]
fn short_date_passes_through_unparsable() {
    assert_eq!(short_date("yesterday"), "yesterday");
    assert_eq!(short_date(""), "");
}

#[test]
fn welcome_date_spells_month() {
    let date = Date::from_calendar_date(2026, Month::October, 18).expect("date");
    assert_eq!(welcome_date(date), "18, October 2026");
}
