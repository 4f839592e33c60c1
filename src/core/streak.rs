//! The streak state machine.
//!
//! Keeps the toggle grid, its enabled/disabled state and the stored rows in
//! agreement: checked days must always form a gap-free prefix of the month.
//! Checking a day unlocks the next one; unchecking a day clears and locks
//! everything after it.

use std::collections::BTreeMap;

use crate::core::grid::{GRID_SLOTS, ToggleGrid};
use crate::db::models::DayRecord;
use crate::errors::{AppError, AppResult};

/// State of a single day slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// Disabled and unchecked: the streak has not reached this day yet.
    Locked,
    /// Enabled and unchecked: the next day to complete.
    Active,
    /// Enabled and checked.
    Done,
}

/// Reconciles toggle interactions with the grid and flushes the final state
/// to the store once per session.
pub struct StreakController<G: ToggleGrid> {
    grid: G,
    days_in_month: u32,
    persisted: bool,
}

impl<G: ToggleGrid> StreakController<G> {
    /// Initialize the grid from the month's stored rows.
    ///
    /// Every slot gets its checked flag and tooltip from the matching
    /// record; slots past the end of the month are hidden. Day 1 is always
    /// enabled, completed days stay enabled, and the first unchecked day is
    /// enabled as the active day so the streak invariant holds before any
    /// interaction.
    pub fn init(mut grid: G, records: &[DayRecord], days_in_month: u32) -> Self {
        for day in 1..=GRID_SLOTS {
            if day > days_in_month {
                grid.hide(day);
            } else {
                grid.show(day);
            }
        }

        for rec in records {
            if rec.day > days_in_month {
                continue;
            }
            grid.set_checked(rec.day, rec.checked);
            grid.set_tooltip(rec.day, &rec.full_date.format("%Y-%m-%d").to_string());
        }

        let active = (1..=days_in_month).find(|&d| !grid.is_checked(d));
        for day in 1..=days_in_month {
            let enabled = day == 1 || grid.is_checked(day) || Some(day) == active;
            grid.set_enabled(day, enabled);
        }

        Self {
            grid,
            days_in_month,
            persisted: false,
        }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn state_of(&self, day: u32) -> DayState {
        if self.grid.is_checked(day) {
            DayState::Done
        } else if self.grid.is_enabled(day) {
            DayState::Active
        } else {
            DayState::Locked
        }
    }

    /// Length of the current streak: checked days starting at day 1.
    pub fn streak_len(&self) -> u32 {
        (1..=self.days_in_month)
            .take_while(|&d| self.grid.is_checked(d))
            .count() as u32
    }

    /// The first unchecked day, or None when the whole month is done.
    pub fn active_day(&self) -> Option<u32> {
        (1..=self.days_in_month).find(|&d| !self.grid.is_checked(d))
    }

    /// Apply one toggle interaction.
    pub fn toggle(&mut self, day: u32, checked: bool) -> AppResult<()> {
        if checked { self.check(day) } else { self.uncheck(day) }
    }

    /// Mark `day` as done and unlock the day after it.
    ///
    /// The last day of the month has no successor; the boundary is an
    /// explicit check, not an error path.
    pub fn check(&mut self, day: u32) -> AppResult<()> {
        if day == 0 || day > self.days_in_month {
            return Err(AppError::DayOutOfRange(day));
        }
        if !self.grid.is_enabled(day) {
            return Err(AppError::DayLocked(day));
        }
        if self.grid.is_checked(day) {
            return Ok(()); // already done, nothing to change
        }

        self.grid.set_checked(day, true);
        if let Some(next) = self.next_day(day) {
            self.grid.set_enabled(next, true);
        }
        Ok(())
    }

    /// Un-mark `day`: clear every checked day from `day` on and lock
    /// everything after it. `day` itself stays enabled and becomes the new
    /// active day, so the checked prefix now ends at `day - 1`.
    pub fn uncheck(&mut self, day: u32) -> AppResult<()> {
        if day == 0 || day > self.days_in_month {
            return Err(AppError::DayOutOfRange(day));
        }

        for j in day..=self.days_in_month {
            if self.grid.is_checked(j) {
                self.grid.set_checked(j, false);
            }
            if j > day {
                self.grid.set_enabled(j, false);
            }
        }
        Ok(())
    }

    fn next_day(&self, day: u32) -> Option<u32> {
        (day < self.days_in_month).then_some(day + 1)
    }

    /// Current checked flag per day, for the bulk persist.
    pub fn snapshot(&self) -> BTreeMap<u32, bool> {
        (1..=self.days_in_month)
            .map(|d| (d, self.grid.is_checked(d)))
            .collect()
    }

    /// End-of-session flush: hand the checked flags to `persist` exactly
    /// once. A second call (close event plus explicit exit) is a no-op.
    pub fn finish<F>(&mut self, persist: F) -> AppResult<()>
    where
        F: FnOnce(&BTreeMap<u32, bool>) -> AppResult<()>,
    {
        if self.persisted {
            return Ok(());
        }
        persist(&self.snapshot())?;
        self.persisted = true;
        Ok(())
    }
}
