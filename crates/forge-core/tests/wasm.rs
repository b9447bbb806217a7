//! WASM-target tests for forge-core.
//!
//! Runs the store, simulator and controller under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use forge_core::controller::{AppController, ReplyTicket, SubmitOutcome, View, deliver_reply};
use forge_core::event_bus::EventBus;
use forge_core::ports::*;
use forge_core::simulator;
use forge_core::store::ProjectStore;
use forge_types::config::AppConfig;
use forge_types::event::AppEvent;
use forge_types::Result;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use async_trait::async_trait;

// ─── Mock Ports ──────────────────────────────────────────

#[derive(Default)]
struct MockStorage {
    data: RefCell<HashMap<String, String>>,
}

impl StoragePort for MockStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
    fn delete(&self, key: &str) -> Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }
    fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self.data.borrow().keys().filter(|k| k.starts_with(prefix)).cloned().collect())
    }
    fn clear(&self) -> Result<()> {
        self.data.borrow_mut().clear();
        Ok(())
    }
    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct NoDelay;

#[async_trait(?Send)]
impl TimerPort for NoDelay {
    async fn sleep(&self, _ms: u64) {}
}

fn controller() -> (AppController, EventBus, Rc<MockStorage>) {
    let storage = Rc::new(MockStorage::default());
    let bus = EventBus::new();
    let ctrl = AppController::new(&AppConfig::default(), storage.clone(), bus.clone());
    (ctrl, bus, storage)
}

// ─── Tests ───────────────────────────────────────────────

#[wasm_bindgen_test]
fn classify_app_keyword() {
    assert_eq!(
        simulator::classify("build me a todo app"),
        simulator::reply_for(simulator::Topic::App)
    );
}

#[wasm_bindgen_test]
async fn submission_flows_through_timer_and_bus() {
    let (mut ctrl, bus, storage) = controller();
    ctrl.set_input("build me a todo app");
    let SubmitOutcome::Scheduled(ticket) = ctrl.submit() else {
        panic!("submission should be scheduled");
    };

    deliver_reply(&NoDelay, &bus, ticket, ctrl.reply_delay_ms()).await;
    for event in bus.drain() {
        if let AppEvent::ReplyDue { ticket } = event {
            ctrl.complete_submission(ReplyTicket(ticket));
        }
    }

    assert_eq!(ctrl.view(), View::Chat);
    assert_eq!(ctrl.messages().len(), 2);
    let persisted = ProjectStore::try_load(&*storage).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].title, "build me a todo app");
}

#[wasm_bindgen_test]
fn blank_submission_rejected() {
    let (mut ctrl, _bus, storage) = controller();
    ctrl.set_input("   ");
    assert_eq!(ctrl.submit(), SubmitOutcome::Rejected);
    assert!(storage.data.borrow().is_empty());
}

#[wasm_bindgen_test]
fn clear_all_then_reload_is_empty() {
    let (mut ctrl, _bus, storage) = controller();
    ctrl.set_input("a website");
    if let SubmitOutcome::Scheduled(ticket) = ctrl.submit() {
        ctrl.complete_submission(ticket);
    }
    ctrl.clear_all_data();
    assert!(ProjectStore::load(storage).is_empty());
}
