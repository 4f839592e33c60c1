use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::ensure_month_seeded;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::session::resolve_today;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its tables
///  - the current month's day rows (seeding)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing streakcal…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open(&db_path)?;
    init_db(&pool.conn)?;

    let today = resolve_today(cli)?;
    ensure_month_seeded(&pool.conn, today)?;

    success(format!("Database initialized at {}", &db_path));

    // Internal log (non-blocking)
    if let Err(e) = ttlog(&pool.conn, "init", &db_path, "Database initialized") {
        crate::ui::messages::warning(format!("Could not write internal log: {}", e));
    }

    Ok(())
}
