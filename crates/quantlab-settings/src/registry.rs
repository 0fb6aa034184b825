//! The setting registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use quantlab_core::logging::targets;
use serde_json::Value;

use crate::connector::SettingConnector;
use crate::error::SettingsError;
use crate::settings::Settings;

/// The registry of loaded per-plugin settings.
///
/// Loading is fetch-and-cache: the first [`load`](Self::load) for a plugin
/// goes through the connector, later loads return the cached [`Settings`]
/// object, so every consumer of a plugin's settings shares one object and
/// one `changed` signal.
pub struct SettingRegistry {
    connector: Arc<dyn SettingConnector>,
    plugins: Mutex<HashMap<String, Arc<Settings>>>,
}

impl SettingRegistry {
    /// Create a registry backed by the given connector.
    pub fn new(connector: Arc<dyn SettingConnector>) -> Self {
        Self {
            connector,
            plugins: Mutex::new(HashMap::new()),
        }
    }

    /// Load the settings of a plugin, fetching through the connector on the
    /// first call and returning the cached object afterwards.
    pub async fn load(&self, plugin_id: &str) -> Result<Arc<Settings>, SettingsError> {
        if let Some(settings) = self.plugins.lock().get(plugin_id) {
            return Ok(settings.clone());
        }

        let data = self.connector.fetch(plugin_id).await?;
        tracing::debug!(target: targets::SETTINGS, plugin = %plugin_id, "settings loaded");

        let mut plugins = self.plugins.lock();
        // A concurrent load may have won the race; keep the first object so
        // changed-signal subscriptions stay unified.
        let settings = plugins
            .entry(plugin_id.to_string())
            .or_insert_with(|| Arc::new(Settings::new(plugin_id, data)));
        Ok(settings.clone())
    }

    /// The cached settings of a plugin, if it has been loaded.
    pub fn get(&self, plugin_id: &str) -> Option<Arc<Settings>> {
        self.plugins.lock().get(plugin_id).cloned()
    }

    /// Set a user override: persist through the connector, then commit to
    /// the cached settings and emit its `changed` signal.
    pub async fn set(
        &self,
        plugin_id: &str,
        key: impl Into<String>,
        value: Value,
    ) -> Result<(), SettingsError> {
        let settings = self
            .get(plugin_id)
            .ok_or_else(|| SettingsError::UnknownPlugin(plugin_id.to_string()))?;

        let key = key.into();
        let mut user = settings.user_snapshot();
        user.insert(key.clone(), value.clone());
        self.connector.save(plugin_id, user).await?;

        settings.set_user(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::{MemoryConnector, PluginData};
    use parking_lot::Mutex;
    use serde_json::json;

    fn registry() -> (Arc<MemoryConnector>, SettingRegistry) {
        let connector = Arc::new(MemoryConnector::new().with_plugin(
            "fileeditor",
            PluginData {
                defaults: HashMap::from([("wordWrap".to_string(), json!(false))]),
                user: HashMap::new(),
            },
        ));
        let registry = SettingRegistry::new(connector.clone());
        (connector, registry)
    }

    #[tokio::test]
    async fn test_load_caches_settings_object() {
        let (_connector, registry) = registry();

        let first = registry.load("fileeditor").await.unwrap();
        let second = registry.load("fileeditor").await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.composite("wordWrap"), Some(json!(false)));
    }

    #[tokio::test]
    async fn test_load_unknown_plugin() {
        let (_connector, registry) = registry();
        let err = registry.load("nope").await.unwrap_err();
        assert!(matches!(err, SettingsError::UnknownPlugin(_)));
    }

    #[tokio::test]
    async fn test_set_persists_and_emits() {
        let (connector, registry) = registry();
        let settings = registry.load("fileeditor").await.unwrap();

        let changes = Arc::new(Mutex::new(0));
        let changes_clone = changes.clone();
        settings.changed.connect(move |()| {
            *changes_clone.lock() += 1;
        });

        registry
            .set("fileeditor", "wordWrap", json!(true))
            .await
            .unwrap();

        assert_eq!(settings.composite("wordWrap"), Some(json!(true)));
        assert_eq!(*changes.lock(), 1);
        assert_eq!(
            connector.stored_user("fileeditor").unwrap().get("wordWrap"),
            Some(&json!(true))
        );
    }

    #[tokio::test]
    async fn test_set_before_load_is_an_error() {
        let (_connector, registry) = registry();
        let err = registry
            .set("fileeditor", "wordWrap", json!(true))
            .await
            .unwrap_err();
        assert!(matches!(err, SettingsError::UnknownPlugin(_)));
    }

    #[tokio::test]
    async fn test_failed_save_does_not_commit() {
        let (connector, registry) = registry();
        let settings = registry.load("fileeditor").await.unwrap();

        connector.set_failing(true);
        let err = registry
            .set("fileeditor", "wordWrap", json!(true))
            .await
            .unwrap_err();
        assert!(matches!(err, SettingsError::Connector(_)));
        assert_eq!(settings.composite("wordWrap"), Some(json!(false)));
    }
}
