//! Property-based tests for the streak invariant.
//!
//! For any starting prefix and any sequence of toggle attempts (valid or
//! rejected), the checked days must always form a gap-free prefix of the
//! month, with exactly one active day after it (or none when the month is
//! complete) and everything beyond the active day locked.

use chrono::NaiveDate;
use proptest::prelude::*;
use streakcal::core::grid::{MonthGrid, ToggleGrid};
use streakcal::core::streak::StreakController;
use streakcal::db::models::DayRecord;

fn records(days_in_month: u32, prefix: u32) -> Vec<DayRecord> {
    (1..=days_in_month)
        .map(|day| DayRecord {
            id: day as i64,
            checked: day <= prefix,
            day,
            month: 7,
            year: 2025,
            full_date: NaiveDate::from_ymd_opt(2025, 7, day).unwrap(),
        })
        .collect()
}

/// Assert the full §-style invariant: checked prefix of length k, day k+1
/// active, days k+2.. locked, day 1 always enabled.
fn assert_streak_invariant(ctrl: &StreakController<MonthGrid>, days_in_month: u32) {
    let k = ctrl.streak_len();

    for day in 1..=days_in_month {
        let checked = ctrl.grid().is_checked(day);
        let enabled = ctrl.grid().is_enabled(day);

        if day <= k {
            assert!(checked, "day {} inside the streak must be checked", day);
            assert!(enabled, "day {} inside the streak must be enabled", day);
        } else if day == k + 1 {
            assert!(!checked, "active day {} must be unchecked", day);
            assert!(enabled, "active day {} must be enabled", day);
        } else {
            assert!(!checked, "day {} past the active day must be unchecked", day);
            assert!(!enabled, "day {} past the active day must be locked", day);
        }
    }

    assert!(ctrl.grid().is_enabled(1), "day 1 is always enabled");
}

proptest! {
    #[test]
    fn random_toggle_sequences_never_break_the_streak(
        days_in_month in 28u32..=31,
        prefix_frac in 0u32..=31,
        ops in prop::collection::vec((1u32..=31, any::<bool>()), 0..64),
    ) {
        let prefix = prefix_frac.min(days_in_month);
        let mut ctrl = StreakController::init(
            MonthGrid::new(),
            &records(days_in_month, prefix),
            days_in_month,
        );

        assert_streak_invariant(&ctrl, days_in_month);

        for (day, checked) in ops {
            // rejected toggles (locked or out-of-range days) must leave the
            // grid untouched; accepted ones must preserve the invariant
            let _ = ctrl.toggle(day, checked);
            assert_streak_invariant(&ctrl, days_in_month);
        }
    }

    #[test]
    fn unchecking_always_truncates_to_just_before_the_day(
        days_in_month in 28u32..=31,
        target in 1u32..=28,
    ) {
        // start from a fully complete month
        let mut ctrl = StreakController::init(
            MonthGrid::new(),
            &records(days_in_month, days_in_month),
            days_in_month,
        );

        ctrl.uncheck(target).unwrap();

        prop_assert_eq!(ctrl.streak_len(), target - 1);
        prop_assert_eq!(ctrl.active_day(), Some(target));
        assert_streak_invariant(&ctrl, days_in_month);
    }
}
