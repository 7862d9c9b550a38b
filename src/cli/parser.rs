use crate::export::ExportFormat;
use crate::utils::date::{MAX_YEAR, MIN_YEAR};
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftplan
#[derive(Parser)]
#[command(
    name = "shiftplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal shift planner: rotations, national holidays and worked-hours statistics",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, database and the default shift catalog
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

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the shift catalog
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Manage the repeating rotation
    Rotation {
        #[command(subcommand)]
        action: RotationAction,
    },

    /// Fill empty calendar days from the rotation
    Apply,

    /// Assign, blank or clear a single day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Shift id to assign
        #[arg(conflicts_with_all = ["none", "clear"])]
        shift: Option<String>,

        /// Mark the day explicitly as "no shift"
        #[arg(long, conflicts_with = "clear")]
        none: bool,

        /// Remove the entry for this day
        #[arg(long)]
        clear: bool,
    },

    /// Manage holidays
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Show or set the annual target hours
    Target {
        /// New target in hours
        hours: Option<f64>,
    },

    /// Show the month calendar
    Calendar {
        #[arg(long, short, value_parser = year_parser(), help = "Year (default: current year)")]
        year: Option<i32>,

        #[arg(long, short, help = "Month 1-12 (default: all months of the year)")]
        month: Option<u32>,

        #[arg(
            long,
            short,
            help = "Only highlight days with this shift id, or 'holiday'"
        )]
        filter: Option<String>,
    },

    /// Show the full-year table
    Year {
        #[arg(long, short, value_parser = year_parser(), help = "Year (default: current year)")]
        year: Option<i32>,
    },

    /// Show per-month and annual statistics
    Stats {
        #[arg(long, short, value_parser = year_parser(), help = "Year (default: current year)")]
        year: Option<i32>,
    },

    /// Copy the previous year's assignments into YEAR (overwrites)
    DuplicateYear {
        /// Target year
        #[arg(value_parser = year_parser())]
        year: i32,
    },

    /// Export a JSON backup or a CSV year table
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_parser = year_parser(),
            help = "Year for the CSV table (default: current year)"
        )]
        year: Option<i32>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a JSON backup (any subset of fields)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Add a shift type
    Add {
        /// Short unique code (e.g. M)
        id: String,

        /// Display name
        name: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "color", help = "Hex color (#rrggbb)")]
        color: Option<String>,
    },

    /// Change fields of a shift type
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "start", help = "Start time (HH:MM, empty to clear)")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM, empty to clear)")]
        end: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a shift type (assigned days keep the id)
    Del { id: String },

    /// List shift types
    List,
}

#[derive(Subcommand)]
pub enum RotationAction {
    /// Define the rotation and project it
    Set {
        /// First day of the cycle (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        #[arg(long, default_value = "Rotation")]
        name: String,

        /// Shift ids in cycle order
        #[arg(required = true, num_args = 1..)]
        sequence: Vec<String>,
    },

    /// Show the rotation
    Show,

    /// Remove the rotation (already filled days stay)
    Clear,
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// List holidays of a year
    List {
        #[arg(long, short, value_parser = year_parser(), help = "Year (default: current year)")]
        year: Option<i32>,
    },

    /// Add or rename a custom holiday
    Add { date: String, name: String },

    /// Remove a custom holiday
    Del { date: String },

    /// Switch off a national holiday on DATE
    Disable { date: String },

    /// Switch a national holiday back on
    Enable { date: String },
}

fn year_parser() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR))
}
