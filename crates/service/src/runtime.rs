//! Runtime wiring: turn an [`AppConfig`] into a ready word service.

use std::sync::Arc;

use configs::{AppConfig, StorageBackend};
use tracing::info;

use crate::storage::FileBlobStore;
use crate::words::{LocalBlobStore, RemoteTableStore, WordService, WordStore};

/// Open the substrate selected by `cfg.storage.backend`.
pub async fn open_store(cfg: &AppConfig) -> anyhow::Result<Arc<dyn WordStore>> {
    let store: Arc<dyn WordStore> = match cfg.storage.backend {
        StorageBackend::Local => {
            common::env::ensure_data_dir(&cfg.storage.data_dir).await?;
            let blob = FileBlobStore::new(&cfg.storage.data_dir).await?;
            info!(data_dir = %cfg.storage.data_dir.display(), key = %cfg.storage.key, "local_blob_store_opened");
            Arc::new(LocalBlobStore::new(Arc::new(blob), cfg.storage.key.clone()))
        }
        StorageBackend::Remote => {
            let store = RemoteTableStore::connect(&cfg.database).await?;
            info!("remote_table_store_opened");
            Arc::new(store)
        }
    };
    Ok(store)
}

pub async fn open_service(cfg: &AppConfig) -> anyhow::Result<WordService> {
    Ok(WordService::new(open_store(cfg).await?))
}
