use clap::{Parser, Subcommand};

/// Command-line interface definition for streakcal
/// CLI habit calendar: keep a daily streak with SQLite
#[derive(Parser)]
#[command(
    name = "streakcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit calendar CLI: mark each day done and keep your monthly streak using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD); mainly for tests
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration, and seed the current month
    Init,

    /// Show the current month's grid and streak
    Show,

    /// Mark a day as done (unlocks the next day)
    Check {
        /// Day of the month (1-31)
        day: u32,
    },

    /// Un-mark a day (clears and locks every later day)
    Uncheck {
        /// Day of the month (1-31)
        day: u32,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
