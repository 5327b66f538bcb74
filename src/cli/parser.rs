use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for incidentlog
#[derive(Parser)]
#[command(
    name = "incidentlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record emergency occurrences at mining deposits and summarize them by deposit and year",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db", env = "INCIDENTLOG_DB")]
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List deposits, or add a new one
    Deposits {
        #[arg(long = "add", value_name = "NAME", help = "Add a deposit with this name")]
        add: Option<String>,
    },

    /// List emergency types, or add a new one
    Types {
        #[arg(long = "add", value_name = "NAME", help = "Add an emergency type with this name")]
        add: Option<String>,
    },

    /// List occurrences, optionally filtered by deposit and/or type
    List {
        #[arg(long = "deposit", value_name = "ID", help = "Deposit id (0 = all deposits)")]
        deposit: Option<i64>,

        #[arg(long = "type", value_name = "ID", help = "Emergency type id (0 = all types)")]
        emergency_type: Option<i64>,
    },

    /// Record a new occurrence
    Add {
        #[arg(long = "deposit", value_name = "ID")]
        deposit: i64,

        #[arg(long = "type", value_name = "ID")]
        emergency_type: i64,

        /// Year of the occurrence (YYYY)
        #[arg(long = "year", allow_hyphen_values = true)]
        year: String,

        /// Damage amount (monetary), `.` or `,` as decimal separator
        #[arg(long = "amount", allow_hyphen_values = true)]
        amount: String,

        #[arg(long = "comment", default_value = "")]
        comment: String,
    },

    /// Delete an occurrence by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show chart series (stacked bar, pie, line) for the filtered list
    Charts {
        #[arg(long = "deposit", value_name = "ID", help = "Deposit id (0 = all deposits)")]
        deposit: Option<i64>,

        #[arg(long = "type", value_name = "ID", help = "Emergency type id (0 = all types)")]
        emergency_type: Option<i64>,

        #[arg(long = "json", help = "Print the series as JSON")]
        json: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export the filtered occurrence list
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "deposit", value_name = "ID")]
        deposit: Option<i64>,

        #[arg(long = "type", value_name = "ID")]
        emergency_type: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
