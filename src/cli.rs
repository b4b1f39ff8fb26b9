use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueHint;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Status page configuration file
    ///
    /// JSON file holding the status page settings. Only the "page" field is
    /// required; extra fields are ignored.
    #[arg(short, long, env="INSTATUS_CONFIG", value_hint=ValueHint::FilePath, default_value="config.json")]
    pub config: PathBuf,

    /// Set the logging level
    ///
    /// Set the logging level to use when logging to the instamet.log file
    #[arg(short, long, env="LOG_LEVEL", value_hint=ValueHint::Other, default_value="INFO")]
    pub loglevel: log::LevelFilter,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the metrics configured on the status page (default)
    List {
        /// Print only the metric IDs, one per line
        #[arg(long)]
        ids: bool,
    },

    /// Append a data point to one metric
    Push {
        /// ID of the metric to push to
        #[arg(short, long, value_hint=ValueHint::Other)]
        metric: String,

        /// Value of the data point
        #[arg(short, long, value_hint=ValueHint::Other)]
        value: f64,

        /// Unix timestamp of the data point in milliseconds (defaults to now)
        #[arg(short, long, value_hint=ValueHint::Other)]
        timestamp: Option<i64>,
    },
}

impl Cli {
    /// The command to run, listing when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List { ids: false })
    }
}
