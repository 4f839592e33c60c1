use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::queries::persist_month;
use crate::errors::AppResult;
use crate::ui::calendar_view::render_month;
use crate::ui::messages::{success, warning};

use super::session::{controller_for, open_month, resolve_today};

/// Handle `check <DAY>` and `uncheck <DAY>`.
///
/// One invocation is one session: load the month, apply the toggle through
/// the streak controller, flush the grid state back to the store once, and
/// render the result.
pub fn handle(cli: &Cli, cfg: &Config, day: u32, checked: bool) -> AppResult<()> {
    let today = resolve_today(cli)?;
    let (pool, view) = open_month(cfg, today)?;
    let mut ctrl = controller_for(&view);

    ctrl.toggle(day, checked)?;

    ctrl.finish(|snapshot| persist_month(&pool.conn, today, snapshot))?;

    let op = if checked { "check" } else { "uncheck" };
    if let Err(e) = ttlog(&pool.conn, op, &format!("day {}", day), "State persisted") {
        warning(format!("Could not write internal log: {}", e));
    }

    if checked {
        success(format!("Day {} marked as done.", day));
    } else {
        success(format!(
            "Day {} cleared; later days are locked again.",
            day
        ));
    }
    println!();
    print!("{}", render_month(&ctrl, today, cfg.grid_columns));

    Ok(())
}
