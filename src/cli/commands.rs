//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Interactive conversion form reading commands from stdin (default)
    Form,
    /// List every category with its units
    Categories,
    /// List the units of one category
    Units {
        /// Category name (Length, Weight, Temperature, Currency)
        category: String,
    },
    /// Convert a single value and record it in the history
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit
        from: String,
        /// Destination unit
        to: String,
        /// Category (inferred from the source unit when omitted)
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Do not append the conversion to the history file
        #[arg(long)]
        no_history: bool,
    },
    /// Show the conversion history
    History,
    /// Truncate the conversion history
    Clear,
    /// Show the static currency rates
    Rates,
}
