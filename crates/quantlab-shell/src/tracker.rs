//! Widget trackers.
//!
//! A [`WidgetTracker`] is the capability an activity plugin (notebooks,
//! consoles, editors) exposes to the rest of the extension layer: it answers
//! "does this collection currently own widget W" and supports iteration over
//! the owned widgets. Semantic menu extenders carry a tracker so the delegate
//! resolver can decide which extender owns the active widget, and the
//! settings synchronization flow iterates a tracker to apply cached values.
//!
//! A widget that is disposed simply stops being tracked; there is no
//! cancellation of in-flight work (the tracker is the only membership
//! authority).
//!
//! # Example
//!
//! ```
//! use quantlab_shell::{WidgetHandle, WidgetTracker};
//!
//! let tracker = WidgetTracker::new("notebook");
//! let widget = WidgetHandle::new("notebook", "untitled.ipynb");
//!
//! tracker.widget_added.connect(|w| {
//!     println!("now tracking: {}", w.title());
//! });
//!
//! tracker.add(widget.clone());
//! assert!(tracker.has(&widget));
//! ```

use parking_lot::RwLock;
use quantlab_core::Signal;
use quantlab_core::logging::targets;

use crate::widget::WidgetHandle;

/// An ordered collection of widgets owned by one activity plugin.
pub struct WidgetTracker {
    namespace: String,
    widgets: RwLock<Vec<WidgetHandle>>,
    current: RwLock<Option<WidgetHandle>>,
    /// Emitted whenever a widget is added to the tracker.
    pub widget_added: Signal<WidgetHandle>,
}

impl WidgetTracker {
    /// Create a tracker for the given namespace, e.g. `"notebook"`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            widgets: RwLock::new(Vec::new()),
            current: RwLock::new(None),
            widget_added: Signal::new(),
        }
    }

    /// The namespace of the tracker.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Add a widget to the tracker and emit [`widget_added`](Self::widget_added).
    ///
    /// Adding a widget that is already tracked is ignored with a warning.
    pub fn add(&self, widget: WidgetHandle) {
        {
            let mut widgets = self.widgets.write();
            if widgets.contains(&widget) {
                tracing::warn!(
                    target: targets::TRACKER,
                    namespace = %self.namespace,
                    widget = %widget.title(),
                    "widget already tracked, ignoring add"
                );
                return;
            }
            widgets.push(widget.clone());
        }
        tracing::debug!(
            target: targets::TRACKER,
            namespace = %self.namespace,
            widget = %widget.title(),
            "widget added"
        );
        self.widget_added.emit(widget);
    }

    /// Remove a widget from the tracker.
    ///
    /// Returns `true` if the widget was tracked. If the removed widget was
    /// the tracker's current widget, the current widget is cleared.
    pub fn remove(&self, widget: &WidgetHandle) -> bool {
        let removed = {
            let mut widgets = self.widgets.write();
            match widgets.iter().position(|w| w == widget) {
                Some(index) => {
                    widgets.remove(index);
                    true
                }
                None => false,
            }
        };
        if removed {
            let mut current = self.current.write();
            if current.as_ref() == Some(widget) {
                *current = None;
            }
        }
        removed
    }

    /// Whether the tracker currently owns the given widget.
    pub fn has(&self, widget: &WidgetHandle) -> bool {
        self.widgets.read().contains(widget)
    }

    /// A snapshot of the tracked widgets, in insertion order.
    pub fn widgets(&self) -> Vec<WidgetHandle> {
        self.widgets.read().clone()
    }

    /// The tracker's current (most recently focused) widget, if any.
    pub fn current_widget(&self) -> Option<WidgetHandle> {
        self.current.read().clone()
    }

    /// Mark a tracked widget as the tracker's current widget.
    ///
    /// Setting an untracked widget is ignored with a warning.
    pub fn set_current(&self, widget: Option<WidgetHandle>) {
        if let Some(ref w) = widget {
            if !self.has(w) {
                tracing::warn!(
                    target: targets::TRACKER,
                    namespace = %self.namespace,
                    widget = %w.title(),
                    "cannot set untracked widget as current"
                );
                return;
            }
        }
        *self.current.write() = widget;
    }

    /// The number of tracked widgets.
    pub fn len(&self) -> usize {
        self.widgets.read().len()
    }

    /// Whether the tracker is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_add_has_remove() {
        let tracker = WidgetTracker::new("editor");
        let widget = WidgetHandle::new("editor", "main.rs");

        assert!(!tracker.has(&widget));
        tracker.add(widget.clone());
        assert!(tracker.has(&widget));
        assert_eq!(tracker.len(), 1);

        assert!(tracker.remove(&widget));
        assert!(!tracker.has(&widget));
        assert!(tracker.is_empty());
        assert!(!tracker.remove(&widget));
    }

    #[test]
    fn test_widget_added_signal() {
        let tracker = WidgetTracker::new("console");
        let added = Arc::new(Mutex::new(Vec::new()));

        let added_clone = added.clone();
        tracker.widget_added.connect(move |w| {
            added_clone.lock().push(w.title());
        });

        tracker.add(WidgetHandle::new("console", "Console 1"));
        tracker.add(WidgetHandle::new("console", "Console 2"));

        assert_eq!(*added.lock(), vec!["Console 1", "Console 2"]);
    }

    #[test]
    fn test_duplicate_add_ignored() {
        let tracker = WidgetTracker::new("editor");
        let widget = WidgetHandle::new("editor", "lib.rs");
        let count = Arc::new(Mutex::new(0));

        let count_clone = count.clone();
        tracker.widget_added.connect(move |_| {
            *count_clone.lock() += 1;
        });

        tracker.add(widget.clone());
        tracker.add(widget);
        assert_eq!(tracker.len(), 1);
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_remove_clears_current() {
        let tracker = WidgetTracker::new("notebook");
        let widget = WidgetHandle::new("notebook", "a.ipynb");

        tracker.add(widget.clone());
        tracker.set_current(Some(widget.clone()));
        assert_eq!(tracker.current_widget(), Some(widget.clone()));

        tracker.remove(&widget);
        assert_eq!(tracker.current_widget(), None);
    }

    #[test]
    fn test_set_current_requires_tracked() {
        let tracker = WidgetTracker::new("notebook");
        let untracked = WidgetHandle::new("notebook", "b.ipynb");

        tracker.set_current(Some(untracked));
        assert_eq!(tracker.current_widget(), None);
    }
}
