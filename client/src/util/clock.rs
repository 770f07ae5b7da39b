//! Current date in the formats the pages store and compare.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Date, OffsetDateTime};

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Today's UTC date as `YYYY-MM-DD`.
#[must_use]
pub fn today_iso() -> String {
    iso_date(today())
}

/// Current UTC month as `YYYY-MM`, matching the prefix of [`today_iso`].
#[must_use]
pub fn current_year_month() -> String {
    year_month(today())
}

#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

#[must_use]
pub fn year_month(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}
