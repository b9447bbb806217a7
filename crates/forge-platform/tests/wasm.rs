//! WASM-target tests for forge-platform (Node.js runtime).
//!
//! Tests MemoryStorage, backend fallback and GlooTimer under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage tests require a browser and live in browser.rs.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use forge_core::ports::{StoragePort, TimerPort};
use forge_platform::storage::{open_storage, LocalStorage, MemoryStorage};
use forge_platform::timer::GlooTimer;
use forge_types::config::StorageBackendType;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    assert_eq!(MemoryStorage::new().backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    assert!(storage.get("nonexistent").unwrap().is_none());
    assert!(!storage.exists("nonexistent").unwrap());
}

#[wasm_bindgen_test]
fn memory_storage_set_and_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", "v1").unwrap();
    storage.set("key", "v2").unwrap();
    assert_eq!(storage.get("key").unwrap(), Some("v2".to_string()));
    assert!(storage.exists("key").unwrap());
}

#[wasm_bindgen_test]
fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("key", "val").unwrap();
    storage.delete("key").unwrap();
    storage.delete("never-set").unwrap();
    assert!(storage.get("key").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_storage_list_keys_and_clear() {
    let storage = MemoryStorage::new();
    storage.set("forge:projects", "[]").unwrap();
    storage.set("forge:preferences", "{}").unwrap();
    storage.set("other", "x").unwrap();

    let mut keys = storage.list_keys("forge:").unwrap();
    keys.sort();
    assert_eq!(keys, vec!["forge:preferences", "forge:projects"]);

    storage.clear().unwrap();
    assert!(storage.list_keys("").unwrap().is_empty());
}

// ─── Backend selection ───────────────────────────────────

#[wasm_bindgen_test]
fn local_storage_unavailable_in_node() {
    assert!(LocalStorage::open().is_err());
}

#[wasm_bindgen_test]
fn open_storage_falls_back_to_memory() {
    assert_eq!(open_storage(&StorageBackendType::Auto).backend_name(), "memory");
    assert_eq!(open_storage(&StorageBackendType::Memory).backend_name(), "memory");
}

// ─── GlooTimer ───────────────────────────────────────────

#[wasm_bindgen_test]
async fn gloo_timer_resolves() {
    GlooTimer.sleep(10).await;
}
