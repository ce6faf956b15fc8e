pub mod catalog;
pub mod favorites;
pub mod persistence;
pub mod view_model;

pub use crate::domain::model::{Facility, FavoriteChange, Resort, SortOrder};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
