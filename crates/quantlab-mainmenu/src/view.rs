//! The extensible View menu.

use std::sync::Arc;

use quantlab_shell::{WidgetHandle, WidgetTracker};

use crate::extension::{ExtensionPoint, MenuExtender, OperationFn, ToggleFn, operation, toggle};
use crate::menu::RankedMenu;

/// An activity hosting an editor whose view options can be toggled.
///
/// Each toggle operation has a companion predicate reporting the current
/// state, used to check the corresponding menu item.
pub struct EditorViewer {
    tracker: Arc<WidgetTracker>,
    toggle_line_numbers: Option<OperationFn>,
    toggle_match_brackets: Option<OperationFn>,
    toggle_word_wrap: Option<OperationFn>,
    line_numbers_toggled: Option<ToggleFn>,
    match_brackets_toggled: Option<ToggleFn>,
    word_wrap_toggled: Option<ToggleFn>,
}

impl EditorViewer {
    /// Create an editor viewer with no operations defined.
    pub fn new(tracker: Arc<WidgetTracker>) -> Self {
        Self {
            tracker,
            toggle_line_numbers: None,
            toggle_match_brackets: None,
            toggle_word_wrap: None,
            line_numbers_toggled: None,
            match_brackets_toggled: None,
            word_wrap_toggled: None,
        }
    }

    /// Define the line-numbers toggle and its state predicate.
    pub fn with_line_numbers<F, P>(mut self, f: F, state: P) -> Self
    where
        F: Fn(&WidgetHandle) + Send + Sync + 'static,
        P: Fn(&WidgetHandle) -> bool + Send + Sync + 'static,
    {
        self.toggle_line_numbers = Some(operation(f));
        self.line_numbers_toggled = Some(toggle(state));
        self
    }

    /// Define the match-brackets toggle and its state predicate.
    pub fn with_match_brackets<F, P>(mut self, f: F, state: P) -> Self
    where
        F: Fn(&WidgetHandle) + Send + Sync + 'static,
        P: Fn(&WidgetHandle) -> bool + Send + Sync + 'static,
    {
        self.toggle_match_brackets = Some(operation(f));
        self.match_brackets_toggled = Some(toggle(state));
        self
    }

    /// Define the word-wrap toggle and its state predicate.
    pub fn with_word_wrap<F, P>(mut self, f: F, state: P) -> Self
    where
        F: Fn(&WidgetHandle) + Send + Sync + 'static,
        P: Fn(&WidgetHandle) -> bool + Send + Sync + 'static,
    {
        self.toggle_word_wrap = Some(operation(f));
        self.word_wrap_toggled = Some(toggle(state));
        self
    }

    /// The line-numbers toggle, if defined.
    pub fn toggle_line_numbers(&self) -> Option<OperationFn> {
        self.toggle_line_numbers.clone()
    }

    /// The match-brackets toggle, if defined.
    pub fn toggle_match_brackets(&self) -> Option<OperationFn> {
        self.toggle_match_brackets.clone()
    }

    /// The word-wrap toggle, if defined.
    pub fn toggle_word_wrap(&self) -> Option<OperationFn> {
        self.toggle_word_wrap.clone()
    }

    /// The line-numbers state predicate, if defined.
    pub fn line_numbers_toggled(&self) -> Option<ToggleFn> {
        self.line_numbers_toggled.clone()
    }

    /// The match-brackets state predicate, if defined.
    pub fn match_brackets_toggled(&self) -> Option<ToggleFn> {
        self.match_brackets_toggled.clone()
    }

    /// The word-wrap state predicate, if defined.
    pub fn word_wrap_toggled(&self) -> Option<ToggleFn> {
        self.word_wrap_toggled.clone()
    }
}

impl MenuExtender for EditorViewer {
    fn tracker(&self) -> &Arc<WidgetTracker> {
        &self.tracker
    }
}

/// An extensible View menu for the application.
pub struct ViewMenu {
    menu: Arc<RankedMenu>,
    /// Editor view-option providers.
    pub editor_viewers: ExtensionPoint<EditorViewer>,
}

impl Default for ViewMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewMenu {
    /// Construct the view menu.
    pub fn new() -> Self {
        Self {
            menu: Arc::new(RankedMenu::new("View")),
            editor_viewers: ExtensionPoint::new(),
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

    /// Dispose of the resources held by the view menu.
    pub fn dispose(&self) {
        self.editor_viewers.clear();
        self.menu.dispose();
    }
}
