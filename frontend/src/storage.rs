use shared::{SessionStorage, StorageError};
use web_sys::Storage;

/// Session slot backed by `window.localStorage`. Values are stored verbatim.
/// The handle is looked up per call and may be missing when storage is blocked.
pub struct BrowserStorage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        let storage = local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read {} from local storage: {:?}", key, e);
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("Local storage unavailable, cannot remove {}", key);
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("Failed to remove {} from local storage: {:?}", key, e);
        }
    }
}
