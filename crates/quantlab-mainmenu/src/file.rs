//! The extensible File menu.

use std::sync::Arc;

use quantlab_shell::{ExecuteResult, WidgetHandle, WidgetTracker};

use crate::extension::{ExtensionPoint, MenuExtender, OperationFn, async_operation};
use crate::menu::RankedMenu;

/// An activity that performs cleanup work (shutting down a session, deleting
/// a checkpoint) when its widget is closed from the File menu.
pub struct CloseAndCleaner {
    tracker: Arc<WidgetTracker>,
    action: String,
    close_and_cleanup: Option<OperationFn>,
}

impl CloseAndCleaner {
    /// Create a close-and-cleaner labeled with the cleanup action,
    /// e.g. "Shutdown".
    pub fn new(tracker: Arc<WidgetTracker>, action: impl Into<String>) -> Self {
        Self {
            tracker,
            action: action.into(),
            close_and_cleanup: None,
        }
    }

    /// Define the close-and-cleanup operation.
    pub fn with_close_and_cleanup<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.close_and_cleanup = Some(async_operation(f));
        self
    }

    /// A label for the cleanup action performed on close.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The close-and-cleanup operation, if defined.
    pub fn close_and_cleanup(&self) -> Option<OperationFn> {
        self.close_and_cleanup.clone()
    }
}

impl MenuExtender for CloseAndCleaner {
    fn tracker(&self) -> &Arc<WidgetTracker> {
        &self.tracker
    }
}

/// An extensible File menu for the application.
pub struct FileMenu {
    menu: Arc<RankedMenu>,
    /// Close-and-cleanup providers.
    pub close_and_cleaners: ExtensionPoint<CloseAndCleaner>,
}

impl Default for FileMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl FileMenu {
    /// Construct the file menu.
    pub fn new() -> Self {
        Self {
            menu: Arc::new(RankedMenu::new("File")),
            close_and_cleaners: ExtensionPoint::new(),
        }
    }

    /// The underlying ranked menu.
    pub fn menu(&self) -> &Arc<RankedMenu> {
        &self.menu
    }

    /// Add a group of menu items specific to a particular plugin.
    pub fn add_group(&self, items: Vec<crate::menu::MenuItem>, rank: i64) {
        self.menu.add_group(items, rank);
    }

    /// Dispose of the resources held by the file menu.
    pub fn dispose(&self) {
        self.close_and_cleaners.clear();
        self.menu.dispose();
    }
}
