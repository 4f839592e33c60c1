use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Handle the `config` command.
pub fn handle(command: &Commands) -> AppResult<()> {
    if let Commands::Config { print_config } = command {
        if *print_config {
            header("Configuration");
            println!("{}", Config::raw()?);
        } else {
            info(format!(
                "Config file: {}",
                Config::config_file().display()
            ));
        }
    }
    Ok(())
}
