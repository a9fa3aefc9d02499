use dioxus::prelude::*;
use serde::Deserialize;
use shared_types::{AppError, MemoryStorage, PreferenceStorage};

/// `window.localStorage`, reached through the renderer's JS bridge.
///
/// Works on web and desktop (webview) targets. Where no document exists
/// (server rendering) every call fails with `StorageUnavailable`, which
/// the persistence layer treats as "no stored preference".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BrowserStorage;

#[derive(Debug, Deserialize)]
struct StorageReply {
    ok: bool,
    value: Option<String>,
    error: Option<String>,
}

impl StorageReply {
    fn into_result(self, kind: fn(String) -> AppError) -> Result<Option<String>, AppError> {
        if self.ok {
            Ok(self.value)
        } else {
            Err(kind(self.error.unwrap_or_else(|| "unknown storage error".to_string())))
        }
    }
}

async fn run_storage_script(script: String) -> Result<StorageReply, AppError> {
    document::eval(&script)
        .join::<StorageReply>()
        .await
        .map_err(|err| AppError::storage_unavailable(err.to_string()))
}

fn js_string(value: &str) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|err| AppError::internal(err.to_string()))
}

impl PreferenceStorage for BrowserStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let script = format!(
            r#"
            try {{
                return {{ ok: true, value: window.localStorage.getItem({key}) }};
            }} catch (e) {{
                return {{ ok: false, error: String(e) }};
            }}
            "#,
            key = js_string(key)?,
        );
        run_storage_script(script)
            .await?
            .into_result(|msg| AppError::storage_read(msg))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let script = format!(
            r#"
            try {{
                window.localStorage.setItem({key}, {value});
                return {{ ok: true }};
            }} catch (e) {{
                return {{ ok: false, error: String(e) }};
            }}
            "#,
            key = js_string(key)?,
            value = js_string(value)?,
        );
        run_storage_script(script)
            .await?
            .into_result(|msg| AppError::storage_write(msg))
            .map(|_| ())
    }
}

/// Storage injected into [`SidebarLayoutProvider`](crate::SidebarLayoutProvider).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StorageBackend {
    #[default]
    Browser,
    /// In-process storage for tests and previews.
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub fn memory() -> Self {
        StorageBackend::Memory(MemoryStorage::new())
    }
}

impl PreferenceStorage for StorageBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        match self {
            StorageBackend::Browser => BrowserStorage.read(key).await,
            StorageBackend::Memory(storage) => storage.read(key).await,
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        match self {
            StorageBackend::Browser => BrowserStorage.write(key, value).await,
            StorageBackend::Memory(storage) => storage.write(key, value).await,
        }
    }
}
