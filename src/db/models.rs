//! Database row models.
//! Thin wrappers around SQLite rows.

use chrono::NaiveDate;

/// One row of the `checkboxes` table: the persisted state of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub id: i64,
    pub checked: bool,
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub full_date: NaiveDate,
}
