use crate::core::Storage;
use crate::utils::error::{Result, SeekerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

pub const DEFAULT_FAVORITES_FILE: &str = "favorites.json";

/// On-disk form of the favorites set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesDocument {
    pub favorites: Vec<String>,
    pub saved_at: DateTime<Utc>,
}

impl FavoritesDocument {
    pub fn new(favorites: Vec<String>) -> Self {
        Self {
            favorites,
            saved_at: Utc::now(),
        }
    }
}

/// 啟動時讀取一次收藏清單
///
/// A missing file means a first run. Any other read failure or a malformed
/// document is logged and ignored so a bad favorites file never keeps the
/// catalog from opening.
pub async fn load_favorites<S: Storage>(storage: &S, file_name: &str) -> BTreeSet<String> {
    let data = match storage.read_file(file_name).await {
        Ok(data) => data,
        Err(SeekerError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No saved favorites at '{}', starting empty", file_name);
            return BTreeSet::new();
        }
        Err(e) => {
            tracing::warn!("Cannot read favorites file '{}', starting empty: {}", file_name, e);
            return BTreeSet::new();
        }
    };

    match serde_json::from_slice::<FavoritesDocument>(&data) {
        Ok(document) => {
            tracing::info!(
                "⭐ Restored {} favorites saved at {}",
                document.favorites.len(),
                document.saved_at.to_rfc3339()
            );
            document.favorites.into_iter().collect()
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable favorites file '{}': {}", file_name, e);
            BTreeSet::new()
        }
    }
}

pub async fn save_favorites<S: Storage>(storage: &S, file_name: &str, favorites: Vec<String>) -> Result<()> {
    let document = FavoritesDocument::new(favorites);
    let json = serde_json::to_vec_pretty(&document)?;
    storage.write_file(file_name, &json).await
}

/// Handle used by the registry to queue snapshots for the background saver.
#[derive(Debug, Clone)]
pub struct FavoritesSaver {
    sender: UnboundedSender<Vec<String>>,
}

impl FavoritesSaver {
    /// Queues a snapshot without waiting. Returns `false` once the saver task has stopped.
    pub fn submit(&self, snapshot: Vec<String>) -> bool {
        self.sender.send(snapshot).is_ok()
    }
}

/// Starts the saver task. It exits after every [`FavoritesSaver`] clone is dropped
/// and the queue has drained.
pub fn spawn_saver<S>(storage: S, file_name: impl Into<String>) -> (FavoritesSaver, JoinHandle<()>)
where
    S: Storage + 'static,
{
    let (sender, receiver) = mpsc::unbounded_channel();
    let file_name = file_name.into();
    let handle = tokio::spawn(run_saver(storage, file_name, receiver));
    (FavoritesSaver { sender }, handle)
}

async fn run_saver<S: Storage>(storage: S, file_name: String, mut receiver: UnboundedReceiver<Vec<String>>) {
    while let Some(mut snapshot) = receiver.recv().await {
        // 只寫入最新的快照
        while let Ok(newer) = receiver.try_recv() {
            snapshot = newer;
        }

        let count = snapshot.len();
        match save_favorites(&storage, &file_name, snapshot).await {
            Ok(()) => tracing::debug!("💾 Saved {} favorites to '{}'", count, file_name),
            Err(e) => tracing::warn!("Failed to save favorites to '{}': {}", file_name, e),
        }
    }
    tracing::debug!("Favorites saver stopped");
}
