//! Semantic extension points.
//!
//! A semantic menu exposes one named [`ExtensionPoint`] per capability
//! ("undoers", "code runners", ...). Activity plugins register an extender
//! descriptor carrying their widget tracker and the operations they support;
//! the delegate resolver later consults the point to find the extender whose
//! tracker owns the active widget.
//!
//! Registration order is significant: the point is an ordered list, and
//! resolution is first-match-wins, so when two extenders both claim a widget
//! (a convention violation among plugins) the earliest registration wins
//! deterministically.

use std::sync::Arc;

use futures_util::FutureExt;
use parking_lot::RwLock;
use quantlab_core::logging::targets;
use quantlab_shell::{ExecuteResult, WidgetHandle, WidgetTracker};

/// An operation contributed by an extender, invoked with the widget the
/// extender's tracker owns.
pub type OperationFn = Arc<dyn Fn(&WidgetHandle) -> ExecuteResult + Send + Sync>;

/// A toggled-state predicate contributed by an extender.
pub type ToggleFn = Arc<dyn Fn(&WidgetHandle) -> bool + Send + Sync>;

/// Wrap a synchronous closure as an [`OperationFn`].
pub fn operation<F>(f: F) -> OperationFn
where
    F: Fn(&WidgetHandle) + Send + Sync + 'static,
{
    Arc::new(move |widget| {
        f(widget);
        futures_util::future::ready(Ok(())).boxed()
    })
}

/// Wrap a future-returning closure as an [`OperationFn`].
pub fn async_operation<F>(f: F) -> OperationFn
where
    F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`ToggleFn`].
pub fn toggle<F>(f: F) -> ToggleFn
where
    F: Fn(&WidgetHandle) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The capability every extender descriptor carries: a tracker identifying
/// the widgets the extender owns.
pub trait MenuExtender: Send + Sync {
    /// The widget tracker used to decide ownership of the active widget.
    fn tracker(&self) -> &Arc<WidgetTracker>;
}

/// An ordered registry of extender descriptors for one semantic capability.
///
/// Clones share the same underlying list, so a point stored on a menu and a
/// clone captured by a command closure observe the same registrations.
/// Entries live for the process lifetime once a plugin activates; there is
/// no removal-by-widget operation, only [`clear`](Self::clear) on disposal.
pub struct ExtensionPoint<E> {
    entries: Arc<RwLock<Vec<Arc<E>>>>,
}

impl<E> Clone for ExtensionPoint<E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<E> Default for ExtensionPoint<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ExtensionPoint<E> {
    /// Create an empty extension point.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register an extender descriptor.
    ///
    /// Registering the same descriptor instance twice is ignored with a
    /// warning. Distinct descriptors whose trackers overlap are accepted;
    /// conflicts resolve first-match-wins at delegation time.
    pub fn add(&self, extender: Arc<E>) {
        let mut entries = self.entries.write();
        if entries.iter().any(|e| Arc::ptr_eq(e, &extender)) {
            tracing::warn!(
                target: targets::EXTENSION,
                "extender already registered, ignoring duplicate"
            );
            return;
        }
        entries.push(extender);
        tracing::debug!(
            target: targets::EXTENSION,
            count = entries.len(),
            "extender registered"
        );
    }

    /// Remove every registered extender. Invoked on menu disposal.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// The number of registered extenders.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the point has no registered extenders.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// A snapshot of the registered extenders, in registration order.
    pub fn entries(&self) -> Vec<Arc<E>> {
        self.entries.read().clone()
    }
}

impl<E: MenuExtender> ExtensionPoint<E> {
    /// The first registered extender whose tracker owns the given widget.
    pub fn first_owner(&self, widget: &WidgetHandle) -> Option<Arc<E>> {
        self.entries
            .read()
            .iter()
            .find(|e| e.tracker().has(widget))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestExtender {
        tracker: Arc<WidgetTracker>,
    }

    impl MenuExtender for TestExtender {
        fn tracker(&self) -> &Arc<WidgetTracker> {
            &self.tracker
        }
    }

    fn extender(namespace: &str) -> Arc<TestExtender> {
        Arc::new(TestExtender {
            tracker: Arc::new(WidgetTracker::new(namespace)),
        })
    }

    #[test]
    fn test_registration_order_preserved() {
        let point = ExtensionPoint::new();
        let a = extender("a");
        let b = extender("b");

        point.add(a.clone());
        point.add(b.clone());

        let entries = point.entries();
        assert_eq!(entries.len(), 2);
        assert!(Arc::ptr_eq(&entries[0], &a));
        assert!(Arc::ptr_eq(&entries[1], &b));
    }

    #[test]
    fn test_duplicate_instance_ignored() {
        let point = ExtensionPoint::new();
        let a = extender("a");

        point.add(a.clone());
        point.add(a);
        assert_eq!(point.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let point = ExtensionPoint::new();
        let view = point.clone();

        point.add(extender("a"));
        assert_eq!(view.len(), 1);

        view.clear();
        assert!(point.is_empty());
    }

    #[test]
    fn test_first_owner_wins_on_overlap() {
        let point = ExtensionPoint::new();
        let first = extender("first");
        let second = extender("second");
        let widget = WidgetHandle::new("notebook", "a.ipynb");

        // Both trackers claim the widget, violating the single-owner
        // convention; resolution must still be deterministic.
        first.tracker.add(widget.clone());
        second.tracker.add(widget.clone());
        point.add(first.clone());
        point.add(second);

        let owner = point.first_owner(&widget).unwrap();
        assert!(Arc::ptr_eq(&owner, &first));
    }

    #[test]
    fn test_no_owner() {
        let point: ExtensionPoint<TestExtender> = ExtensionPoint::new();
        point.add(extender("a"));

        let widget = WidgetHandle::new("notebook", "b.ipynb");
        assert!(point.first_owner(&widget).is_none());
    }
}
