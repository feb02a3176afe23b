use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use crate::{
    services::maps_client::types::google_place_details_response::GooglePlaceDetailsResult,
    types::place::Place,
};

use super::types::history_store_error::HistoryStoreError;

/// Key of the single slot holding the serialized history.
pub const HISTORY_STORAGE_KEY: &str = "searchHistory";

/// Persisted search history: one slot, read whole and overwritten whole.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Returns the stored entries, or an empty list when nothing was ever saved.
    async fn load(&self) -> Result<Vec<Place>, HistoryStoreError>;

    async fn save(&self, entries: &[Place]) -> Result<(), HistoryStoreError>;
}

// Entries are stored in the Places details shape so existing slots stay readable.
fn encode(entries: &[Place]) -> Result<String, HistoryStoreError> {
    let records: Vec<GooglePlaceDetailsResult> = entries.iter().map(Into::into).collect();
    Ok(serde_json::to_string(&records)?)
}

fn decode(raw: &str) -> Result<Vec<Place>, HistoryStoreError> {
    let records: Vec<GooglePlaceDetailsResult> = serde_json::from_str(raw)?;
    Ok(records.into_iter().map(Place::from).collect())
}

pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir
                .as_ref()
                .join(format!("{}.json", HISTORY_STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn load(&self) -> Result<Vec<Place>, HistoryStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => decode(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &[Place]) -> Result<(), HistoryStoreError> {
        let raw = encode(entries)?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        // write-then-rename keeps the slot whole if we die mid-write
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}

/// In-process slot, used where the history should not touch the filesystem.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryHistoryStore {
    slot: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryHistoryStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: std::sync::Mutex::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

#[cfg(test)]
#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn load(&self) -> Result<Vec<Place>, HistoryStoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))?;

        match slot.as_deref() {
            Some(raw) => decode(raw),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, entries: &[Place]) -> Result<(), HistoryStoreError> {
        let raw = encode(entries)?;

        *self
            .slot
            .lock()
            .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))? = Some(raw);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::place::LatLng;

    fn place(id: &str) -> Place {
        Place {
            place_id: id.to_string(),
            name: format!("Name {}", id),
            formatted_address: format!("Address {}", id),
            location: LatLng {
                lat: 17.4,
                lng: 78.5,
            },
        }
    }

    #[tokio::test]
    async fn file_store_missing_slot_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path());

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_store_saves_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path().join("nested"));

        store.save(&[place("a"), place("b")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, vec![place("a"), place("b")]);
        assert!(store.path().ends_with("searchHistory.json"));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn file_store_writes_places_details_shape() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path());

        store.save(&[place("a")]).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["place_id"], "a");
        assert_eq!(value[0]["formatted_address"], "Address a");
        assert_eq!(value[0]["geometry"]["location"]["lat"], 17.4);
        assert_eq!(value[0]["geometry"]["location"]["lng"], 78.5);
    }

    #[tokio::test]
    async fn file_store_corrupt_slot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(
            store.load().await,
            Err(HistoryStoreError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn memory_store_overwrites_slot() {
        let store = MemoryHistoryStore::default();
        assert!(store.load().await.unwrap().is_empty());

        store.save(&[place("a")]).await.unwrap();
        store.save(&[place("b")]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), vec![place("b")]);
    }
}
