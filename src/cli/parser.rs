use clap::{Parser, Subcommand};

/// Command-line interface definition for sleeplogger
#[derive(Parser)]
#[command(
    name = "sleeplogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log when you go to sleep and when you wake up, export the log as CSV",
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

    /// Log that you are going to sleep
    Sleep {
        #[arg(long = "at", value_name = "YYYY-MM-DD HH:MM", help = "Log at this moment instead of now")]
        at: Option<String>,
    },

    /// Log that you woke up
    Wake {
        #[arg(long = "at", value_name = "YYYY-MM-DD HH:MM", help = "Log at this moment instead of now")]
        at: Option<String>,
    },

    /// List all records, most recent first
    List {
        #[arg(long = "json", help = "Print records as JSON")]
        json: bool,
    },

    /// Erase every record from the sleep log
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the log to CSV and optionally share it by email
    Export {
        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: <export_dir>/<export_file> from config)"
        )]
        file: Option<String>,

        #[arg(long = "share", help = "Hand the exported file to the email program")]
        share: bool,
    },

    /// Show a chart of the sleep log
    Chart,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
