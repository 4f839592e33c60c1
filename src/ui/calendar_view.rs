//! Terminal rendering of the month grid.
//!
//! One cell per day: `[x]` done (green), `[ ]` active (yellow), ` . ` locked
//! (dim). The grid wraps at `grid_columns` cells per row.

use chrono::Datelike;
use chrono::NaiveDate;

use crate::core::grid::ToggleGrid;
use crate::core::streak::{DayState, StreakController};
use crate::ui::messages::{BOLD, DIM, FG_GREEN, FG_YELLOW, RESET};
use crate::utils::date::month_name;

fn cell(state: DayState, day: u32) -> String {
    match state {
        DayState::Done => format!("{}{}[x]{:>3}{}", FG_GREEN, BOLD, day, RESET),
        DayState::Active => format!("{}{}[ ]{:>3}{}", FG_YELLOW, BOLD, day, RESET),
        DayState::Locked => format!("{} . {:>3}{}", DIM, day, RESET),
    }
}

/// Render the whole month below a "June 2026" style title.
pub fn render_month<G: ToggleGrid>(
    ctrl: &StreakController<G>,
    reference: NaiveDate,
    columns: u32,
) -> String {
    let columns = columns.max(1);
    let mut out = String::new();

    out.push_str(&format!(
        "{}{}{} {}{}\n\n",
        BOLD,
        FG_YELLOW,
        month_name(reference.month()),
        reference.year(),
        RESET
    ));

    for day in 1..=ctrl.days_in_month() {
        out.push_str(&cell(ctrl.state_of(day), day));
        if day % columns == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    if ctrl.days_in_month() % columns != 0 {
        out.push('\n');
    }

    let streak = ctrl.streak_len();
    out.push_str(&match ctrl.active_day() {
        Some(next) => format!("\nStreak: {} day(s). Next up: day {}.\n", streak, next),
        None => format!("\nStreak: {} day(s). Month complete! 🎉\n", streak),
    });

    out
}
