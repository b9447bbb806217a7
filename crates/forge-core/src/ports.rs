//! Port traits: the hexagonal architecture boundary.
//!
//! Implementations live in `forge-platform` (browser adapters).
//! The core only depends on these traits.

use async_trait::async_trait;
use forge_types::Result;

// ─── Storage Port ────────────────────────────────────────────

/// String key-value store with `localStorage` semantics: every call
/// completes synchronously on the UI thread.
pub trait StoragePort {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value
    fn delete(&self, key: &str) -> Result<()>;

    /// List keys with a given prefix
    fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Remove every key in the store
    fn clear(&self) -> Result<()>;

    /// Check if a key exists
    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Timer Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait TimerPort {
    /// Resolve after roughly `ms` milliseconds
    async fn sleep(&self, ms: u64);
}
