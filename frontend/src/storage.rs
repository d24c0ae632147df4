use web_sys::{window, Storage};
use shared::constants::BALANCE_FLAG_KEY;
use shared::flag_store::{parse_balance, FlagStore, FlagStoreError};

/// `window.localStorage` as a flag store. Private browsing and sandboxed
/// iframes make every call fallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageFlags;

fn local_storage() -> Result<Storage, FlagStoreError> {
    let window = window().ok_or_else(|| FlagStoreError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| FlagStoreError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| FlagStoreError::Unavailable("localStorage disabled".to_string()))
}

impl FlagStore for LocalStorageFlags {
    fn read_flag(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| FlagStoreError::Rejected(format!("{:?}", e)))
    }

    fn write_flag(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| FlagStoreError::Rejected(format!("{:?}", e)))
    }
}

pub fn read_main_page_balance() -> Option<f64> {
    match LocalStorageFlags.read_flag(BALANCE_FLAG_KEY) {
        Ok(raw) => raw.as_deref().and_then(parse_balance),
        Err(e) => {
            log::error!("Error loading balance from localStorage: {}", e);
            None
        }
    }
}
