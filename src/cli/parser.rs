use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklog
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Review and edit office work entries (office, date, clock-in, clock-out) stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a work entry; omitted fields stay empty
    Add {
        #[arg(long = "office", help = "Office name")]
        office: Option<String>,

        #[arg(long = "date", help = "Date of the entry (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        time_in: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        time_out: Option<String>,
    },

    /// List work entries (incomplete entries show as blank rows)
    List {
        #[arg(long, help = "Only entries for this office")]
        office: Option<String>,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or start:end)"
        )]
        period: Option<String>,
    },

    /// Open the interactive entries screen
    Edit,
}
