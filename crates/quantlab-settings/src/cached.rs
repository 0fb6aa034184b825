//! Plugin-local mirrors of individual setting values.

use parking_lot::RwLock;
use quantlab_core::logging::targets;
use serde::de::DeserializeOwned;

use crate::settings::Settings;

/// A typed, plugin-local mirror of one setting value.
///
/// The cache is populated by [`refresh`](Self::refresh) (on load and on every
/// change notification) and read synchronously by widget update routines via
/// [`get`](Self::get). A missing or malformed value falls back to the
/// plugin's hard-coded default.
pub struct CachedSetting<T> {
    key: &'static str,
    fallback: T,
    value: RwLock<T>,
}

impl<T> CachedSetting<T>
where
    T: Clone + DeserializeOwned,
{
    /// Create a cache holding the fallback value.
    pub fn new(key: &'static str, fallback: T) -> Self {
        Self {
            key,
            value: RwLock::new(fallback.clone()),
            fallback,
        }
    }

    /// The setting key this cache mirrors.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Re-read the composite value from the settings object.
    ///
    /// A key that is absent resets the cache to the fallback; a value that
    /// fails to deserialize is logged and also falls back.
    pub fn refresh(&self, settings: &Settings) {
        let value = match settings.composite(self.key) {
            Some(raw) => match serde_json::from_value(raw) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(
                        target: targets::SETTINGS,
                        plugin = %settings.plugin_id(),
                        key = %self.key,
                        error = %err,
                        "malformed setting value, using fallback"
                    );
                    self.fallback.clone()
                }
            },
            None => self.fallback.clone(),
        };
        *self.value.write() = value;
    }

    /// The current cached value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}
