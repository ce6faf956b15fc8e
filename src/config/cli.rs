use crate::config::{DEFAULT_DATA_DIR, DEFAULT_RESORTS_PATH};
use crate::core::persistence::DEFAULT_FAVORITES_FILE;
use crate::core::{ConfigProvider, SortOrder};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "snowseeker")]
#[command(about = "Browse ski resorts, search and sort them, and keep a list of favorites")]
pub struct CliConfig {
    /// Path to the resort dataset (JSON array)
    #[arg(long, global = true)]
    pub resorts: Option<String>,

    /// Directory where favorites are kept between sessions
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, global = true, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List resorts, optionally filtered by name and sorted
    List {
        /// Case-insensitive text the resort name must contain
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },
    /// Show the details of one resort
    Show {
        /// Resort id; omit to show the welcome screen
        id: Option<String>,
    },
    /// Mark or unmark a resort as favorite
    Toggle { id: String },
    /// List favorite resorts
    Favorites,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl ConfigProvider for CliConfig {
    fn resorts_path(&self) -> &str {
        self.resorts.as_deref().unwrap_or(DEFAULT_RESORTS_PATH)
    }

    fn data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    fn favorites_file(&self) -> &str {
        DEFAULT_FAVORITES_FILE
    }

    fn default_sort(&self) -> SortOrder {
        SortOrder::None
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--resorts", self.resorts_path())?;
        validate_file_extension("--resorts", self.resorts_path(), &["json"])?;
        validate_path("--data-dir", self.data_dir())
    }
}
