//! Signal/slot system for the QuantLab extension layer.
//!
//! This module provides a type-safe signal/slot mechanism for communication
//! between independently-loaded plugins. Signals are emitted by trackers,
//! settings objects, and the shell when their state changes, and connected
//! slots (callbacks) are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//!
//! # Invocation Model
//!
//! The extension layer is single-threaded and event-loop-cooperative: slots
//! are always invoked directly on the emitting call stack, in connection
//! order. There is no queued or cross-thread dispatch; asynchronous work is
//! modeled with futures, not with deferred slot invocation.
//!
//! # Example
//!
//! ```
//! use quantlab_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let title_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = title_changed.connect(|title| {
//!     println!("Title changed to: {}", title);
//! });
//!
//! // Emit the signal
//! title_changed.emit("untitled.ipynb".to_string());
//!
//! // Disconnect when done
//! title_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with the
/// provided arguments, in the order the connections were made.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple for multiple arguments.
///
/// # Related Types
///
/// - [`ConnectionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`ConnectionGuard`] - RAII-style connection that auto-disconnects on drop
pub struct Signal<Args> {
    /// All active connections, in insertion order of the slot map.
    connections: Mutex<SlotMap<ConnectionId, Arc<dyn Fn(&Args) + Send + Sync>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use quantlab_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot whose connection lifetime is tied to the returned guard.
    ///
    /// The connection is removed when the [`ConnectionGuard`] is dropped.
    pub fn connect_scoped<'a, F>(&'a self, slot: F) -> ConnectionGuard<'a, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            signal: self,
            id: self.connect(slot),
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. This is useful during
    /// initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing. Slots are invoked
    /// directly on the current call stack, in connection order.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Snapshot the slots so a slot may connect or disconnect reentrantly
        // without deadlocking on the connection map.
        let slots: Vec<_> = self.connections.lock().values().cloned().collect();
        tracing::trace!(
            target: targets::SIGNAL,
            connection_count = slots.len(),
            "emitting signal"
        );
        for slot in slots {
            slot(&args);
        }
    }
}

/// An RAII guard that disconnects a signal connection when dropped.
///
/// Created by [`Signal::connect_scoped`]. Useful for connections that should
/// only live as long as a particular scope, such as a test body or a
/// short-lived widget.
pub struct ConnectionGuard<'a, Args> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<'_, Args> {
    /// The identifier of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}
