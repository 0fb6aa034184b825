//! The extensible Edit menu.

use std::sync::Arc;

use quantlab_shell::{WidgetHandle, WidgetTracker};

use crate::extension::{ExtensionPoint, MenuExtender, OperationFn, operation};
use crate::menu::RankedMenu;

/// An activity that uses Undo/Redo.
pub struct Undoer {
    tracker: Arc<WidgetTracker>,
    undo: Option<OperationFn>,
    redo: Option<OperationFn>,
}

impl Undoer {
    /// Create an undoer with no operations defined.
    pub fn new(tracker: Arc<WidgetTracker>) -> Self {
        Self {
            tracker,
            undo: None,
            redo: None,
        }
    }

    /// Define the undo operation.
    pub fn with_undo<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) + Send + Sync + 'static,
    {
        self.undo = Some(operation(f));
        self
    }

    /// Define the redo operation.
    pub fn with_redo<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) + Send + Sync + 'static,
    {
        self.redo = Some(operation(f));
        self
    }

    /// The undo operation, if defined.
    pub fn undo(&self) -> Option<OperationFn> {
        self.undo.clone()
    }

    /// The redo operation, if defined.
    pub fn redo(&self) -> Option<OperationFn> {
        self.redo.clone()
    }
}

impl MenuExtender for Undoer {
    fn tracker(&self) -> &Arc<WidgetTracker> {
        &self.tracker
    }
}

/// An activity that wants to register a "Clear..." menu item.
pub struct Clearer {
    tracker: Arc<WidgetTracker>,
    noun: String,
    clear: Option<OperationFn>,
}

impl Clearer {
    /// Create a clearer labeled with the thing to be cleared, e.g. "Cells".
    pub fn new(tracker: Arc<WidgetTracker>, noun: impl Into<String>) -> Self {
        Self {
            tracker,
            noun: noun.into(),
            clear: None,
        }
    }

    /// Define the clear operation.
    pub fn with_clear<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) + Send + Sync + 'static,
    {
        self.clear = Some(operation(f));
        self
    }

    /// A label for the thing to be cleared.
    pub fn noun(&self) -> &str {
        &self.noun
    }

    /// The clear operation, if defined.
    pub fn clear(&self) -> Option<OperationFn> {
        self.clear.clone()
    }
}

impl MenuExtender for Clearer {
    fn tracker(&self) -> &Arc<WidgetTracker> {
        &self.tracker
    }
}

/// An activity that uses Find and Find/Replace.
pub struct FindReplacer {
    tracker: Arc<WidgetTracker>,
    find: Option<OperationFn>,
    find_and_replace: Option<OperationFn>,
}

impl FindReplacer {
    /// Create a find-replacer with no operations defined.
    pub fn new(tracker: Arc<WidgetTracker>) -> Self {
        Self {
            tracker,
            find: None,
            find_and_replace: None,
        }
    }

    /// Define the find operation.
    pub fn with_find<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) + Send + Sync + 'static,
    {
        self.find = Some(operation(f));
        self
    }

    /// Define the find-and-replace operation.
    pub fn with_find_and_replace<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) + Send + Sync + 'static,
    {
        self.find_and_replace = Some(operation(f));
        self
    }

    /// The find operation, if defined.
    pub fn find(&self) -> Option<OperationFn> {
        self.find.clone()
    }

    /// The find-and-replace operation, if defined.
    pub fn find_and_replace(&self) -> Option<OperationFn> {
        self.find_and_replace.clone()
    }
}

impl MenuExtender for FindReplacer {
    fn tracker(&self) -> &Arc<WidgetTracker> {
        &self.tracker
    }
}

/// An extensible Edit menu for the application.
pub struct EditMenu {
    menu: Arc<RankedMenu>,
    /// Undo/redo providers.
    pub undoers: ExtensionPoint<Undoer>,
    /// "Clear..." providers.
    pub clearers: ExtensionPoint<Clearer>,
    /// Find and find/replace providers.
    pub find_replacers: ExtensionPoint<FindReplacer>,
}

impl Default for EditMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl EditMenu {
    /// Construct the edit menu.
    pub fn new() -> Self {
        Self {
            menu: Arc::new(RankedMenu::new("Edit")),
            undoers: ExtensionPoint::new(),
            clearers: ExtensionPoint::new(),
            find_replacers: ExtensionPoint::new(),
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

    /// Dispose of the resources held by the edit menu.
    pub fn dispose(&self) {
        self.undoers.clear();
        self.clearers.clear();
        self.find_replacers.clear();
        self.menu.dispose();
    }
}
