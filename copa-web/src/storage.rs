use crate::dom;
use copa_core::error::StorageError;
use copa_core::storage::KeyValueStorage;
use web_sys::Storage;

/// Raw-string access to `window.localStorage`, shared by the session and the
/// language setting.
///
/// The handle is looked up on every call so a storage disabled mid-session
/// surfaces as [`StorageError::Unavailable`] instead of a stale handle.
#[derive(Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    fn handle() -> Result<Storage, StorageError> {
        dom::local_storage().map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))
    }
}

impl KeyValueStorage for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::handle()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::handle()?
            .remove_item(key)
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))
    }
}
