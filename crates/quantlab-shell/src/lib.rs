//! Shell collaborators for QuantLab plugins.
//!
//! This crate models the in-process surface the extension layer sees of the
//! application shell:
//!
//! - **Widget Handles**: identity, title, and option map of shell widgets
//! - **Widget Trackers**: per-activity ownership collections with signals
//! - **Shell**: the active-widget capability object
//! - **Command Table**: the typed command registry
//!
//! The widgets themselves, the document model, and the kernel sessions are
//! external collaborators; only the interfaces the menu-composition core
//! needs are represented here.

pub mod commands;
pub mod shell;
pub mod tracker;
pub mod widget;

pub use commands::{CommandEntry, CommandId, CommandTable, ExecuteResult, done};
pub use shell::Shell;
pub use tracker::WidgetTracker;
pub use widget::{WidgetHandle, WidgetId};
