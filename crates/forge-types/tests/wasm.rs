//! WASM-target tests for forge-types.
//!
//! Exercises id generation, timestamps and serde under wasm32-unknown-unknown
//! via `wasm-pack test --node`, where uuid and chrono rely on JS bindings.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use forge_types::chat::ChatMessage;
use forge_types::config::Preferences;
use forge_types::project::{derive_title, Project, ProjectStatus};

#[wasm_bindgen_test]
fn project_ids_are_generated() {
    let a = Project::from_description("a todo app", true);
    let b = Project::from_description("a todo app", true);
    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
}

#[wasm_bindgen_test]
fn project_timestamp_roundtrip() {
    let project = Project::from_description("an online store", false);
    let json = serde_json::to_string(&project).unwrap();
    let back: Project = serde_json::from_str(&json).unwrap();
    assert_eq!(back.created_at, project.created_at);
    assert_eq!(back.status, ProjectStatus::InProgress);
}

#[wasm_bindgen_test]
fn title_truncation() {
    let input = "y".repeat(80);
    assert_eq!(derive_title(&input).chars().count(), 53);
}

#[wasm_bindgen_test]
fn chat_message_has_timestamp() {
    let msg = ChatMessage::user("hi");
    assert_eq!(msg.time_label().len(), 5);
}

#[wasm_bindgen_test]
fn preferences_roundtrip() {
    let prefs = Preferences { default_public: false, notifications: false, dark_mode: true };
    let json = serde_json::to_vec(&prefs).unwrap();
    let back: Preferences = serde_json::from_slice(&json).unwrap();
    assert_eq!(back, prefs);
}
