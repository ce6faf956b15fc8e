#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, LogFormat};

pub const DEFAULT_RESORTS_PATH: &str = "data/resorts.json";
pub const DEFAULT_DATA_DIR: &str = ".snowseeker";
