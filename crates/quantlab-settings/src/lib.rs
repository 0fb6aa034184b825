//! Settings for the QuantLab extension layer.
//!
//! The [`SettingRegistry`] loads per-plugin [`Settings`] through a pluggable
//! async [`SettingConnector`]. Plugins mirror individual values into typed
//! [`CachedSetting`]s and keep their tracked widgets consistent with the
//! registry via [`sync::synchronize`]: one load joined with the application
//! restored barrier, then re-apply passes on every change notification.
//!
//! # Example
//!
//! ```
//! # async fn demo() -> Result<(), quantlab_settings::SettingsError> {
//! use std::sync::Arc;
//! use quantlab_settings::{MemoryConnector, SettingRegistry};
//!
//! let registry = SettingRegistry::new(Arc::new(MemoryConnector::new()));
//! let settings = registry.load("fileeditor").await?;
//! println!("{:?}", settings.composite("lineNumbers"));
//! # Ok(())
//! # }
//! ```

pub mod cached;
pub mod connector;
pub mod error;
pub mod registry;
pub mod settings;
pub mod sync;

pub use cached::CachedSetting;
pub use connector::{MemoryConnector, PluginData, SettingConnector};
pub use error::SettingsError;
pub use registry::SettingRegistry;
pub use settings::Settings;
pub use sync::{SettingsSync, synchronize};
