use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Handle the `log` command: dump the internal log table, newest first.
pub fn handle(cfg: &Config, print: bool) -> AppResult<()> {
    if !print {
        info("Use `log --print` to list the internal log table.");
        return Ok(());
    }

    let pool = DbPool::open(&cfg.database)?;
    crate::db::initialize::init_db(&pool.conn)?;
    let rows = load_log(&pool.conn)?;

    header("Internal log");
    for (date, operation, message) in rows {
        println!("{}  [{}]  {}", date, operation, message);
    }

    Ok(())
}
