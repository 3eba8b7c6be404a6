use crate::export::{ExportFormat, ExportScope};
use clap::{Parser, Subcommand};

/// Command-line interface definition for workhours
/// CLI application to log weekly work hours by category
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small work-hour log: record hours per category and week, exchange them as CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the store file path (useful for tests or separate logs)
    #[arg(global = true, long = "store", value_name = "FILE")]
    pub store: Option<String>,

    /// Override the taxonomy file path
    #[arg(global = true, long = "taxonomy", value_name = "FILE")]
    pub taxonomy: Option<String>,

    /// Work on the week containing this date (YYYY-MM-DD) instead of the current one
    #[arg(global = true, long = "week", value_name = "DATE")]
    pub week: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, default taxonomy and an empty store
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Show categories, colours and subcategories
    Taxonomy,

    /// Add an entry to the selected week
    Add {
        /// Category (defaults to the last one used)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Subcategory (defaults to the last one used)
        #[arg(long = "sub", short = 's')]
        subcategory: Option<String>,

        /// Hours worked, greater than 0 (e.g. 1.5)
        #[arg(long)]
        hours: String,

        /// Free-text memo
        #[arg(long, short = 'm', default_value = "")]
        memo: String,
    },

    /// Replace category, subcategory, hours and memo of an entry
    Edit {
        /// Entry id (see `list`)
        id: String,

        #[arg(long, short = 'c')]
        category: Option<String>,

        #[arg(long = "sub", short = 's')]
        subcategory: Option<String>,

        #[arg(long)]
        hours: Option<String>,

        #[arg(long, short = 'm')]
        memo: Option<String>,
    },

    /// Delete an entry by id
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every entry
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries (default: the selected week with its total)
    List {
        #[arg(long, conflicts_with_all = ["month", "range"], help = "All entries, newest week first")]
        all: bool,

        #[arg(long, conflicts_with = "range", help = "Entries of the current month")]
        month: bool,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Weeks starting within YYYY, YYYY-MM, YYYY-MM-DD or START:END"
        )]
        range: Option<String>,
    },

    /// Week total, month total and number of entries
    Stats,

    /// Export entries to a file named after the period
    Export {
        #[arg(long, value_enum, default_value = "week")]
        scope: ExportScope,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Import entries from a CSV file into the selected week
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },
}
