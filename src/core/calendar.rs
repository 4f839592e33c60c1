//! Calendar math: pure helpers for month day lists and month boundaries.
//! No I/O here; everything operates on a reference date.

use chrono::{Datelike, NaiveDate};

/// All days of the month containing `reference`, ascending and contiguous.
pub fn month_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let month = reference.month();
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(reference.year(), month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

/// First and last day of the month containing `reference`.
///
/// The last day is "first day of the next month minus one day", rolling
/// December over to January of the following year.
pub fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1).unwrap();

    let (next_year, next_month) = if reference.month() == 12 {
        (reference.year() + 1, 1)
    } else {
        (reference.year(), reference.month() + 1)
    };

    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap();

    (first, last)
}

/// Number of days in the month containing `reference`.
pub fn days_in_month(reference: NaiveDate) -> u32 {
    month_bounds(reference).1.day()
}
