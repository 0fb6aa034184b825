//! The extensible Help menu.
//!
//! The help menu defines no semantic extension points; plugins contribute
//! plain ranked groups of documentation and about entries.

use std::sync::Arc;

use crate::menu::{MenuItem, RankedMenu};

/// An extensible Help menu for the application.
pub struct HelpMenu {
    menu: Arc<RankedMenu>,
}

impl Default for HelpMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpMenu {
    /// Construct the help menu.
    pub fn new() -> Self {
        Self {
            menu: Arc::new(RankedMenu::new("Help")),
        }
    }

    /// The underlying ranked menu.
    pub fn menu(&self) -> &Arc<RankedMenu> {
        &self.menu
    }

    /// Add a group of menu items specific to a particular plugin.
    pub fn add_group(&self, items: Vec<MenuItem>, rank: i64) {
        self.menu.add_group(items, rank);
    }

    /// Dispose of the resources held by the help menu.
    pub fn dispose(&self) {
        self.menu.dispose();
    }
}
