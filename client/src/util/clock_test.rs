use super::*;
use time::Month;

#[test]
fn iso_date_zero_pads() {
    let date = Date::from_calendar_date(2025, Month::January, 5).unwrap();
    assert_eq!(iso_date(date), "2025-01-05");
    assert_eq!(year_month(date), "2025-01");
}

#[test]
fn today_iso_starts_with_current_month() {
    let today = today_iso();
    assert_eq!(today.len(), 10);
    assert!(today.starts_with(&current_year_month()));
}
