//! The application shell surface visible to plugins.
//!
//! The real shell (dock panels, tab bars, layout restoration) lives outside
//! this workspace. Plugins only need one piece of its state: the currently
//! active widget. [`Shell`] is that capability object. It is passed
//! explicitly into the delegate resolver closures at command-registration
//! time rather than read from a global.

use parking_lot::RwLock;
use quantlab_core::Signal;

use crate::widget::WidgetHandle;

/// The active-widget state of the application shell.
///
/// Last-write-wins: whichever widget was activated most recently is the
/// current widget until the next activation (or `None` after deactivation).
pub struct Shell {
    current: RwLock<Option<WidgetHandle>>,
    /// Emitted whenever the current widget changes.
    pub current_changed: Signal<Option<WidgetHandle>>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// Create a shell with no active widget.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            current_changed: Signal::new(),
        }
    }

    /// The currently active widget, if any.
    pub fn current_widget(&self) -> Option<WidgetHandle> {
        self.current.read().clone()
    }

    /// Activate a widget (or deactivate with `None`).
    pub fn activate(&self, widget: Option<WidgetHandle>) {
        {
            let mut current = self.current.write();
            if *current == widget {
                return;
            }
            *current = widget.clone();
        }
        self.current_changed.emit(widget);
    }
}
