use serde::{Deserialize, Serialize};

/// Delay used by the original UI between submit and the canned reply.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 2000;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub simulator: SimulatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// localStorage when the browser exposes it, memory otherwise
    Auto,
    Memory,
    LocalStorage,
}

impl StorageBackendType {
    pub fn label(&self) -> &str {
        match self {
            StorageBackendType::Auto => "Auto-detect",
            StorageBackendType::Memory => "Memory",
            StorageBackendType::LocalStorage => "localStorage",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Artificial "thinking" time before the reply and project appear
    pub reply_delay_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

/// User-toggled settings, persisted next to the projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// New projects are public; shared with the home-screen toggle
    pub default_public: bool,
    /// When off, only error toasts are shown
    pub notifications: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_public: true,
            notifications: true,
            dark_mode: true,
        }
    }
}
