//! Error types for the setting registry.

use thiserror::Error;

/// Errors surfaced by the setting registry and its connectors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The connector failed to fetch or save plugin data.
    #[error("setting connector failure: {0}")]
    Connector(String),

    /// No setting data exists for the requested plugin.
    #[error("unknown setting plugin: {0}")]
    UnknownPlugin(String),

    /// A setting value could not be deserialized.
    #[error("invalid setting value: {0}")]
    Serialization(#[from] serde_json::Error),
}
