use gloo_storage::{LocalStorage, Storage};
use komento_client::{api::Error, Backend};
use wasm_bindgen::{JsCast, JsValue};

/// The browser's `localStorage`, shared by all questions
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

fn storage_error(key: &str, needed: usize, e: JsValue) -> Error {
    match e.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => Error::QuotaExceeded {
            key: String::from(key),
            needed,
            // the browser does not say how much room is left
            available: 0,
        },
        _ => Error::unavailable(format!("localStorage error on {key:?}: {e:?}")),
    }
}

impl Backend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| storage_error(key, 0, e))
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), Error> {
        LocalStorage::raw()
            .set_item(key, &value)
            .map_err(|e| storage_error(key, key.len() + value.len(), e))
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| storage_error(key, 0, e))
    }
}
