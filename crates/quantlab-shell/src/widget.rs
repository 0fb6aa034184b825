//! Widget handles for the extension layer.
//!
//! The widgets themselves (notebooks, consoles, editors, terminals) live
//! outside this workspace. Plugins only ever see a [`WidgetHandle`]: a cheap,
//! clonable reference carrying the widget's identity, its title, a `kind` tag
//! naming the owning activity, and a string-keyed option map standing in for
//! the widget's configurable surface (line numbers, word wrap, themes, ...).
//!
//! # Example
//!
//! ```
//! use quantlab_shell::WidgetHandle;
//!
//! let widget = WidgetHandle::new("notebook", "untitled.ipynb");
//! widget.set_option("lineNumbers", serde_json::json!(true));
//!
//! assert_eq!(widget.title(), "untitled.ipynb");
//! assert_eq!(widget.option("lineNumbers"), Some(serde_json::json!(true)));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde_json::Value;

/// Counter for unique widget IDs.
static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of the ID.
    pub fn raw(self) -> u64 {
        self.0
    }
}

struct WidgetInner {
    id: WidgetId,
    kind: String,
    title: RwLock<String>,
    options: RwLock<HashMap<String, Value>>,
}

/// A cheap, clonable handle to a shell widget.
///
/// Equality and hashing are by widget identity, not by value: two handles
/// compare equal iff they refer to the same widget.
#[derive(Clone)]
pub struct WidgetHandle {
    inner: Arc<WidgetInner>,
}

impl WidgetHandle {
    /// Create a handle to a new widget with the given kind tag and title.
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(WidgetInner {
                id: WidgetId::next(),
                kind: kind.into(),
                title: RwLock::new(title.into()),
                options: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// The unique identifier of the widget.
    pub fn id(&self) -> WidgetId {
        self.inner.id
    }

    /// The kind tag of the widget, e.g. `"notebook"` or `"editor"`.
    pub fn kind(&self) -> &str {
        &self.inner.kind
    }

    /// The current title of the widget.
    pub fn title(&self) -> String {
        self.inner.title.read().clone()
    }

    /// Set the title of the widget.
    pub fn set_title(&self, title: impl Into<String>) {
        *self.inner.title.write() = title.into();
    }

    /// Set a named option on the widget, replacing any previous value.
    pub fn set_option(&self, key: impl Into<String>, value: Value) {
        self.inner.options.write().insert(key.into(), value);
    }

    /// Read a named option from the widget.
    pub fn option(&self, key: &str) -> Option<Value> {
        self.inner.options.read().get(key).cloned()
    }
}

impl PartialEq for WidgetHandle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for WidgetHandle {}

impl std::hash::Hash for WidgetHandle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for WidgetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetHandle")
            .field("id", &self.inner.id)
            .field("kind", &self.inner.kind)
            .field("title", &*self.inner.title.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = WidgetHandle::new("notebook", "a.ipynb");
        let b = WidgetHandle::new("notebook", "a.ipynb");
        let a2 = a.clone();

        assert_ne!(a, b); // Same value, different identity
        assert_eq!(a, a2);
        assert_eq!(a.id(), a2.id());
    }

    #[test]
    fn test_options_overwrite() {
        let w = WidgetHandle::new("editor", "main.rs");
        assert_eq!(w.option("wordWrap"), None);

        w.set_option("wordWrap", serde_json::json!(false));
        w.set_option("wordWrap", serde_json::json!(true));
        assert_eq!(w.option("wordWrap"), Some(serde_json::json!(true)));
    }

    #[test]
    fn test_title_update_visible_through_clones() {
        let w = WidgetHandle::new("console", "Console 1");
        let clone = w.clone();
        w.set_title("Console 2");
        assert_eq!(clone.title(), "Console 2");
    }
}
