//! The data connector behind the setting registry.
//!
//! A [`SettingConnector`] fetches and saves per-plugin setting data. The
//! registry never touches storage directly, so the same registry code runs
//! against any backend. The bundled [`MemoryConnector`] keeps everything in
//! an in-memory map and supports artificial latency and failure injection,
//! which the synchronization tests lean on.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SettingsError;

/// The raw setting data of one plugin: its declared defaults and the user's
/// overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginData {
    /// Values declared by the plugin's setting schema.
    pub defaults: HashMap<String, Value>,
    /// User overrides, overlaid on the defaults.
    pub user: HashMap<String, Value>,
}

/// An async source and sink of per-plugin setting data.
pub trait SettingConnector: Send + Sync {
    /// Fetch the setting data of a plugin.
    fn fetch(&self, plugin_id: &str) -> BoxFuture<'static, Result<PluginData, SettingsError>>;

    /// Persist the user overrides of a plugin.
    fn save(
        &self,
        plugin_id: &str,
        user: HashMap<String, Value>,
    ) -> BoxFuture<'static, Result<(), SettingsError>>;
}

/// An in-memory [`SettingConnector`].
pub struct MemoryConnector {
    data: Arc<Mutex<HashMap<String, PluginData>>>,
    latency: Option<Duration>,
    failing: Arc<AtomicBool>,
}

impl Default for MemoryConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryConnector {
    /// Create an empty connector.
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(HashMap::new())),
            latency: None,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Delay every fetch and save by the given duration.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Seed the stored data of a plugin.
    pub fn with_plugin(self, plugin_id: impl Into<String>, data: PluginData) -> Self {
        self.data.lock().insert(plugin_id.into(), data);
        self
    }

    /// Make every subsequent fetch and save fail (or stop failing).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// The stored user overrides of a plugin, if any.
    pub fn stored_user(&self, plugin_id: &str) -> Option<HashMap<String, Value>> {
        self.data.lock().get(plugin_id).map(|d| d.user.clone())
    }
}

impl SettingConnector for MemoryConnector {
    fn fetch(&self, plugin_id: &str) -> BoxFuture<'static, Result<PluginData, SettingsError>> {
        let plugin_id = plugin_id.to_string();
        let data = self.data.clone();
        let latency = self.latency;
        let failing = self.failing.clone();
        async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            if failing.load(Ordering::SeqCst) {
                return Err(SettingsError::Connector("injected fetch failure".into()));
            }
            data.lock()
                .get(&plugin_id)
                .cloned()
                .ok_or(SettingsError::UnknownPlugin(plugin_id))
        }
        .boxed()
    }

    fn save(
        &self,
        plugin_id: &str,
        user: HashMap<String, Value>,
    ) -> BoxFuture<'static, Result<(), SettingsError>> {
        let plugin_id = plugin_id.to_string();
        let data = self.data.clone();
        let latency = self.latency;
        let failing = self.failing.clone();
        async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            if failing.load(Ordering::SeqCst) {
                return Err(SettingsError::Connector("injected save failure".into()));
            }
            data.lock().entry(plugin_id).or_default().user = user;
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded() -> MemoryConnector {
        MemoryConnector::new().with_plugin(
            "fileeditor",
            PluginData {
                defaults: HashMap::from([("lineNumbers".to_string(), json!(true))]),
                user: HashMap::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_fetch_seeded_plugin() {
        let connector = seeded();
        let data = connector.fetch("fileeditor").await.unwrap();
        assert_eq!(data.defaults.get("lineNumbers"), Some(&json!(true)));
        assert!(data.user.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_unknown_plugin() {
        let connector = MemoryConnector::new();
        let err = connector.fetch("nope").await.unwrap_err();
        assert!(matches!(err, SettingsError::UnknownPlugin(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_save_round_trip() {
        let connector = seeded();
        let user = HashMap::from([("lineNumbers".to_string(), json!(false))]);
        connector.save("fileeditor", user.clone()).await.unwrap();
        assert_eq!(connector.stored_user("fileeditor"), Some(user));
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let connector = seeded();
        connector.set_failing(true);
        assert!(connector.fetch("fileeditor").await.is_err());
        assert!(connector.save("fileeditor", HashMap::new()).await.is_err());

        connector.set_failing(false);
        assert!(connector.fetch("fileeditor").await.is_ok());
    }
}
