use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lccudb
/// Inventory of seized items and assistance records kept in SQLite
#[derive(Parser)]
#[command(
    name = "lccudb",
    version = env!("CARGO_PKG_VERSION"),
    about = "LCCU inventory: register seized devices and assistance records in a shared SQLite file",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Show which database file is used and where that setting comes from"
        )]
        check: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "limit", help = "Only show the last N rows")]
        limit: Option<usize>,
    },

    /// Register a seized device (Mobile or Computer)
    Add {
        /// SIN of the item: 4 letters followed by 4 digits
        sin: String,

        #[arg(long = "type", help = "Mobile or Computer")]
        object_type: String,

        #[arg(long, default_value = "", help = "e.g. GSM, Tablet, Laptop")]
        subcategorie: String,

        #[arg(long, default_value = "")]
        merk: String,

        #[arg(long, default_value = "", help = "Operating system")]
        os: String,

        #[arg(long, default_value = "", help = "Requesting department")]
        dienst: String,
    },

    /// Register an assistance record with its participating staff
    Bijstand {
        #[arg(long = "soort", default_value = "", help = "Kind of assistance")]
        soort: String,

        #[arg(long, default_value = "")]
        dienst: String,

        #[arg(
            long = "medewerker",
            value_name = "NAME",
            help = "Participating staff member (repeat for more)"
        )]
        medewerkers: Vec<String>,

        #[arg(long, help = "Number of participants; must match the names given")]
        aantal: Option<usize>,

        #[arg(long, value_name = "DATETIME", help = "Start (dd-mm-yyyy HH:MM)")]
        start: Option<String>,

        #[arg(long, value_name = "DATETIME", help = "End (dd-mm-yyyy HH:MM)")]
        einde: Option<String>,
    },

    /// Search records by SIN and/or date range
    Search {
        #[arg(long, help = "Part of the SIN")]
        sin: Option<String>,

        #[arg(long, value_name = "DATE", help = "From date (dd-mm-yyyy)")]
        from: Option<String>,

        #[arg(long, value_name = "DATE", help = "To date (dd-mm-yyyy)")]
        to: Option<String>,

        #[arg(long = "skip-ingave", help = "Do not match on the entry date")]
        skip_ingave: bool,

        #[arg(long, value_enum, requires = "file", help = "Export the results")]
        export: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show one record with its participants
    Show {
        id: i64,
    },

    /// Edit an existing record
    Edit {
        id: i64,

        #[arg(long)]
        sin: Option<String>,

        #[arg(long = "type")]
        object_type: Option<String>,

        #[arg(long)]
        subcategorie: Option<String>,

        #[arg(long)]
        merk: Option<String>,

        #[arg(long)]
        os: Option<String>,

        #[arg(long)]
        dienst: Option<String>,

        #[arg(long = "soort")]
        soort: Option<String>,

        #[arg(long = "lccu-lid")]
        lccu_lid: Option<String>,

        #[arg(
            long = "in-behandeling",
            value_name = "DATETIME",
            num_args = 0..=1,
            default_missing_value = "now",
            conflicts_with = "no_in_behandeling",
            help = "Mark as in behandeling (dd-mm-yyyy HH:MM, default now)"
        )]
        in_behandeling: Option<String>,

        #[arg(long = "no-in-behandeling")]
        no_in_behandeling: bool,

        #[arg(long, value_name = "DATETIME", conflicts_with = "clear_start")]
        start: Option<String>,

        #[arg(long, value_name = "DATETIME", conflicts_with = "clear_einde")]
        einde: Option<String>,

        #[arg(long = "clear-start")]
        clear_start: bool,

        #[arg(long = "clear-einde")]
        clear_einde: bool,

        #[arg(
            long = "medewerker",
            value_name = "NAME",
            help = "Replace the participant list (repeat for more)"
        )]
        medewerkers: Vec<String>,
    },

    /// Print the selectable values (types, departments, staff, ...)
    Options {
        #[arg(long = "type", help = "Only show the picklists of this type")]
        object_type: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
