use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::calendar_view::render_month;
use crate::ui::messages::info;

use super::session::{controller_for, open_month, resolve_today};

/// Handle the `show` command: render the month grid and the streak line.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let today = resolve_today(cli)?;
    let (_pool, view) = open_month(cfg, today)?;
    let ctrl = controller_for(&view);

    info(&cfg.motto);
    println!();
    print!("{}", render_month(&ctrl, today, cfg.grid_columns));

    Ok(())
}
