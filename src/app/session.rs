use crate::adapters::storage::LocalStorage;
use crate::core::catalog::Catalog;
use crate::core::favorites::FavoritesRegistry;
use crate::core::persistence::{load_favorites, spawn_saver};
use crate::core::view_model::ResortListViewModel;
use crate::core::{ConfigProvider, Resort, Storage};
use crate::utils::error::{Result, SeekerError};
use tokio::task::JoinHandle;

/// Everything a front end needs for one run: the list view-model and the favorites.
pub struct Session {
    pub view_model: ResortListViewModel,
    pub favorites: FavoritesRegistry,
    saver_handle: Option<JoinHandle<()>>,
}

impl Session {
    pub async fn bootstrap<C: ConfigProvider>(config: &C) -> Result<Self> {
        let storage = LocalStorage::new(config.data_dir().to_string());
        Self::bootstrap_with_storage(config, storage).await
    }

    pub async fn bootstrap_with_storage<C, S>(config: &C, storage: S) -> Result<Self>
    where
        C: ConfigProvider,
        S: Storage + 'static,
    {
        tracing::info!("📁 Loading resorts from: {}", config.resorts_path());
        let catalog = Catalog::from_file(config.resorts_path())?;

        let restored = load_favorites(&storage, config.favorites_file()).await;
        let unknown = restored.iter().filter(|id| catalog.get(id).is_none()).count();
        if unknown > 0 {
            tracing::debug!("{} saved favorites are not in the current catalog", unknown);
        }

        let (saver, saver_handle) = spawn_saver(storage, config.favorites_file());
        let mut favorites = FavoritesRegistry::with_favorites(restored);
        favorites.attach_saver(saver);

        let mut view_model = ResortListViewModel::new(catalog);
        view_model.set_sort_order(config.default_sort());

        Ok(Self {
            view_model,
            favorites,
            saver_handle: Some(saver_handle),
        })
    }

    pub fn resort(&self, id: &str) -> Result<&Resort> {
        self.view_model
            .catalog()
            .get(id)
            .ok_or_else(|| SeekerError::UnknownResort { id: id.to_string() })
    }

    /// Toggles a resort that exists in the catalog. Returns the new favorite state.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.resort(id)?;
        Ok(self.favorites.toggle(id))
    }

    pub fn favorite_resorts(&self) -> Vec<&Resort> {
        let catalog = self.view_model.catalog();
        self.favorites.ids().filter_map(|id| catalog.get(id)).collect()
    }

    /// Stops the saver and waits for the last queued write.
    pub async fn shutdown(mut self) {
        drop(self.favorites.detach_saver());
        if let Some(handle) = self.saver_handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Favorites saver ended abnormally: {}", e);
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("resorts", &self.view_model.catalog().len())
            .field("favorites", &self.favorites)
            .finish()
    }
}
