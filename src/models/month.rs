//! In-memory projection of one month of day records.

use crate::db::models::DayRecord;

/// Ordered view over the current month's rows, indexed 1..=days_in_month.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub records: Vec<DayRecord>,
    pub days_in_month: u32,
}

impl MonthView {
    pub fn new(records: Vec<DayRecord>, days_in_month: u32) -> Self {
        Self {
            records,
            days_in_month,
        }
    }

    pub fn record(&self, day: u32) -> Option<&DayRecord> {
        self.records.iter().find(|r| r.day == day)
    }

    /// Length of the checked prefix starting at day 1.
    pub fn streak_len(&self) -> u32 {
        (1..=self.days_in_month)
            .take_while(|&d| self.record(d).is_some_and(|r| r.checked))
            .count() as u32
    }

    /// True when the checked days form a gap-free prefix of the month.
    pub fn holds_streak_invariant(&self) -> bool {
        let k = self.streak_len();
        (k + 1..=self.days_in_month).all(|d| !self.record(d).is_some_and(|r| r.checked))
    }
}
