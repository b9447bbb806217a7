//! Persistence for user preferences.

use forge_types::{Result, config::Preferences};
use crate::ports::StoragePort;

pub const PREFERENCES_KEY: &str = "forge:preferences";

/// Restore preferences, falling back to defaults when absent or unreadable.
pub fn load_preferences(storage: &dyn StoragePort) -> Preferences {
    let raw = match storage.get(PREFERENCES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Preferences::default(),
        Err(e) => {
            log::warn!("Could not read preferences ({}), using defaults", e);
            return Preferences::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(prefs) => {
            log::info!("Preferences restored from storage");
            prefs
        }
        Err(e) => {
            log::warn!("Malformed preferences ({}), using defaults", e);
            Preferences::default()
        }
    }
}

pub fn save_preferences(storage: &dyn StoragePort, prefs: &Preferences) -> Result<()> {
    let json = serde_json::to_string(prefs)?;
    storage.set(PREFERENCES_KEY, &json)
}
