//! Core systems for the QuantLab extension layer.
//!
//! This crate provides the foundational components shared by every plugin in
//! the extension layer:
//!
//! - **Signal/Slot System**: Type-safe change notification between plugins
//! - **Restored Barrier**: The one-shot "application restored" startup gate
//! - **Error Types**: The workspace error enum and `Result` alias
//! - **Logging**: `tracing` target constants per subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use quantlab_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
mod restored;
pub mod signal;

pub use error::{CommandError, LabError, Result};
pub use restored::RestoredBarrier;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
