//! Shared per-invocation plumbing.
//!
//! Every subcommand that touches day state runs the same startup sequence:
//! open the store, make sure the schema exists, seed the current month if
//! this is the first time it is observed, then load the rows and hand them
//! to the streak controller.

use chrono::NaiveDate;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calendar::days_in_month;
use crate::core::grid::MonthGrid;
use crate::core::streak::StreakController;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{ensure_month_seeded, load_month};
use crate::errors::{AppError, AppResult};
use crate::models::month::MonthView;
use crate::utils::date;

/// Resolve "today": the hidden `--today` override wins, otherwise the local
/// date.
pub fn resolve_today(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}

/// Open the store and bring the current month up: schema, seed, load.
pub fn open_month(cfg: &Config, today: NaiveDate) -> AppResult<(DbPool, MonthView)> {
    let pool = DbPool::open(&cfg.database)?;
    init_db(&pool.conn)?;
    ensure_month_seeded(&pool.conn, today)?;

    let records = load_month(&pool.conn, today)?;
    let view = MonthView::new(records, days_in_month(today));
    Ok((pool, view))
}

/// Build the streak controller over a fresh in-memory grid.
pub fn controller_for(view: &MonthView) -> StreakController<MonthGrid> {
    StreakController::init(MonthGrid::new(), &view.records, view.days_in_month)
}
