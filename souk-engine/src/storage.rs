//! Persistent Store Adapter
//!
//! Thin key/value durability layer with versioned namespaces. `load` is
//! fail-soft: a missing key yields the supplied default, malformed stored
//! content is logged and replaced by the default, and the caller's in-memory
//! state is never corrupted. `save` serializes the full collection and
//! overwrites the namespace.

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use shared::{AppError, AppResult};

// =============================================================================
// Namespaces
// =============================================================================

/// Product catalog namespace
pub const PRODUCTS_KEY: &str = "souk.products.v1";
/// Order ledger namespace
pub const ORDERS_KEY: &str = "souk.orders.v1";
/// Analytics configuration namespace
pub const ANALYTICS_KEY: &str = "souk.analytics.v1";
/// Admin secret namespace (plain string, see `auth` module)
pub const ADMIN_SECRET_KEY: &str = "souk.admin-secret.v1";

/// Session-scoped authenticated flag (never written to durable storage)
pub const SESSION_ADMIN_FLAG: &str = "souk.session.admin-authenticated";

// =============================================================================
// Backends
// =============================================================================

/// Raw key/value durability backend
///
/// One logical writer per namespace; writes are synchronous from the
/// caller's perspective.
pub trait StorageBackend: Send + Sync {
    /// Read the raw content stored under `key`, if any
    fn read(&self, key: &str) -> Option<String>;
    /// Overwrite the content stored under `key`
    fn write(&self, key: &str, value: &str) -> AppResult<()>;
    /// Remove `key` entirely; no-op when absent
    fn remove(&self, key: &str);
}

/// Volatile in-memory backend
///
/// Clones share the same underlying map, so a second engine instance built
/// over a clone observes the first instance's writes (reload simulation).
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// File-backed backend: one file per namespace under a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create the backend, ensuring the data directory exists
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| AppError::storage_write(format!("cannot create data dir: {e}")))?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.path(key);
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read namespace file");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        std::fs::write(self.path(key), value)
            .map_err(|e| AppError::storage_write(format!("write {key} failed: {e}")))
    }

    fn remove(&self, key: &str) {
        let path = self.path(key);
        if path.exists()
            && let Err(e) = std::fs::remove_file(&path)
        {
            tracing::warn!(key, error = %e, "failed to remove namespace file");
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// Typed store over a [`StorageBackend`]
pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Load a namespace, falling back to `default` when the key is missing
    /// or its content is malformed. Never fails.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.backend.read(key) {
            None => default,
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = %e, "namespace corrupt, using default");
                    default
                }
            },
        }
    }

    /// Serialize and overwrite a full namespace
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::storage_write(format!("serialize {key} failed: {e}")))?;
        self.backend.write(key, &raw)
    }

    /// Load a plain-string namespace (admin secret)
    pub fn load_raw(&self, key: &str) -> Option<String> {
        self.backend.read(key)
    }

    /// Overwrite a plain-string namespace
    pub fn save_raw(&self, key: &str, value: &str) -> AppResult<()> {
        self.backend.write(key, value)
    }
}

// =============================================================================
// Session flags
// =============================================================================

/// Session-scoped boolean flags
///
/// Shared by every engine instance within one process (one browser session):
/// a reload builds a new engine over the same `SessionFlags` clone, so the
/// authenticated flag survives reloads and disappears when the session ends.
#[derive(Debug, Clone, Default)]
pub struct SessionFlags {
    flags: Arc<RwLock<HashMap<String, bool>>>,
}

impl SessionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> bool {
        self.flags.read().get(key).copied().unwrap_or(false)
    }

    pub fn set(&self, key: &str, value: bool) {
        self.flags.write().insert(key.to_string(), value);
    }

    pub fn remove(&self, key: &str) {
        self.flags.write().remove(key);
    }
}
