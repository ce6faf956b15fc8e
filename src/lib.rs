pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::Session;
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    catalog::Catalog, favorites::FavoritesRegistry, view_model::ResortListViewModel,
};
pub use domain::model::{FavoriteChange, Resort, SortOrder};
pub use utils::error::{Result, SeekerError};
