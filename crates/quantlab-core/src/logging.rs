//! Logging facilities for the QuantLab extension layer.
//!
//! The extension layer uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every subsystem logs under its own target so traces can be filtered per
//! concern, e.g. `RUST_LOG=quantlab_settings::sync=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "quantlab_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "quantlab_core::signal";
    /// Restored-barrier target.
    pub const RESTORED: &str = "quantlab_core::restored";
    /// Command-table target.
    pub const COMMANDS: &str = "quantlab_shell::commands";
    /// Widget-tracker target.
    pub const TRACKER: &str = "quantlab_shell::tracker";
    /// Menu composition target.
    pub const MENU: &str = "quantlab_mainmenu::menu";
    /// Extension-point registration target.
    pub const EXTENSION: &str = "quantlab_mainmenu::extension";
    /// Delegate-resolution target.
    pub const DELEGATE: &str = "quantlab_mainmenu::delegate";
    /// Setting-registry target.
    pub const SETTINGS: &str = "quantlab_settings::registry";
    /// Settings-synchronization target.
    pub const SYNC: &str = "quantlab_settings::sync";
}
