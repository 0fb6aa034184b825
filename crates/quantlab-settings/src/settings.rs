//! The per-plugin settings object.

use std::collections::HashMap;

use parking_lot::RwLock;
use quantlab_core::Signal;
use quantlab_core::logging::targets;
use serde_json::Value;

use crate::connector::PluginData;

/// The loaded settings of one plugin.
///
/// Holds the plugin's declared defaults and the user's overrides; reads go
/// through [`composite`](Self::composite), which overlays user values on the
/// defaults. Mutations emit [`changed`](Self::changed).
pub struct Settings {
    plugin_id: String,
    defaults: RwLock<HashMap<String, Value>>,
    user: RwLock<HashMap<String, Value>>,
    /// Emitted after any user value changes.
    pub changed: Signal<()>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("plugin_id", &self.plugin_id)
            .field("defaults", &self.defaults)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl Settings {
    /// Create a settings object from fetched plugin data.
    pub fn new(plugin_id: impl Into<String>, data: PluginData) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            defaults: RwLock::new(data.defaults),
            user: RwLock::new(data.user),
            changed: Signal::new(),
        }
    }

    /// The identifier of the owning plugin.
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// The declared default for a key, if any.
    pub fn default(&self, key: &str) -> Option<Value> {
        self.defaults.read().get(key).cloned()
    }

    /// The user override for a key, if any.
    pub fn user(&self, key: &str) -> Option<Value> {
        self.user.read().get(key).cloned()
    }

    /// The effective value for a key: the user override if present,
    /// otherwise the declared default.
    pub fn composite(&self, key: &str) -> Option<Value> {
        self.user(key).or_else(|| self.default(key))
    }

    /// A snapshot of the user overrides.
    pub fn user_snapshot(&self) -> HashMap<String, Value> {
        self.user.read().clone()
    }

    /// Set a user override and emit [`changed`](Self::changed).
    pub fn set_user(&self, key: impl Into<String>, value: Value) {
        let key = key.into();
        tracing::debug!(
            target: targets::SETTINGS,
            plugin = %self.plugin_id,
            key = %key,
            "user setting changed"
        );
        self.user.write().insert(key, value);
        self.changed.emit(());
    }

    /// Remove a user override, falling back to the default, and emit
    /// [`changed`](Self::changed) if anything was removed.
    pub fn remove_user(&self, key: &str) {
        if self.user.write().remove(key).is_some() {
            self.changed.emit(());
        }
    }
}
