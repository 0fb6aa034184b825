//! The application main menu bar.
//!
//! [`MainMenu`] owns the fixed semantic menus (File, Edit, Run, Kernel,
//! View, Help) and supports ranked insertion of additional top-level menus
//! contributed by plugins, e.g. a codemirror plugin adding an "Editor" menu
//! at rank 30.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::edit::EditMenu;
use crate::file::FileMenu;
use crate::help::HelpMenu;
use crate::kernel::KernelMenu;
use crate::menu::RankedMenu;
use crate::run::RunMenu;
use crate::view::ViewMenu;

/// A top-level menu with its sort rank.
struct RankedEntry {
    menu: Arc<RankedMenu>,
    rank: i64,
}

/// The main menu bar of the application shell.
pub struct MainMenu {
    /// The File menu and its extension points.
    pub file_menu: FileMenu,
    /// The Edit menu and its extension points.
    pub edit_menu: EditMenu,
    /// The Run menu and its extension points.
    pub run_menu: RunMenu,
    /// The Kernel menu and its extension points.
    pub kernel_menu: KernelMenu,
    /// The View menu and its extension points.
    pub view_menu: ViewMenu,
    /// The Help menu.
    pub help_menu: HelpMenu,
    menus: RwLock<Vec<RankedEntry>>,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenu {
    /// Construct the main menu with the semantic menus at their standard
    /// ranks.
    pub fn new() -> Self {
        let file_menu = FileMenu::new();
        let edit_menu = EditMenu::new();
        let run_menu = RunMenu::new();
        let kernel_menu = KernelMenu::new();
        let view_menu = ViewMenu::new();
        let help_menu = HelpMenu::new();

        let main_menu = Self {
            menus: RwLock::new(Vec::new()),
            file_menu,
            edit_menu,
            run_menu,
            kernel_menu,
            view_menu,
            help_menu,
        };

        main_menu.add_menu(main_menu.file_menu.menu().clone(), 1);
        main_menu.add_menu(main_menu.edit_menu.menu().clone(), 2);
        main_menu.add_menu(main_menu.run_menu.menu().clone(), 3);
        main_menu.add_menu(main_menu.kernel_menu.menu().clone(), 4);
        main_menu.add_menu(main_menu.view_menu.menu().clone(), 5);
        main_menu.add_menu(main_menu.help_menu.menu().clone(), 1000);

        main_menu
    }

    /// Insert a top-level menu at the position determined by its rank.
    ///
    /// Menus with equal rank keep their insertion order.
    pub fn add_menu(&self, menu: Arc<RankedMenu>, rank: i64) {
        let mut menus = self.menus.write();
        let index = menus.partition_point(|entry| entry.rank <= rank);
        menus.insert(index, RankedEntry { menu, rank });
    }

    /// A snapshot of the top-level menus, in rank order.
    pub fn menus(&self) -> Vec<Arc<RankedMenu>> {
        self.menus.read().iter().map(|e| e.menu.clone()).collect()
    }

    /// Dispose of every semantic menu and clear the bar.
    pub fn dispose(&self) {
        self.file_menu.dispose();
        self.edit_menu.dispose();
        self.run_menu.dispose();
        self.kernel_menu.dispose();
        self.view_menu.dispose();
        self.help_menu.dispose();
        self.menus.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_menu_order() {
        let main_menu = MainMenu::new();
        let titles: Vec<String> = main_menu
            .menus()
            .iter()
            .map(|m| m.title().to_string())
            .collect();
        assert_eq!(titles, vec!["File", "Edit", "Run", "Kernel", "View", "Help"]);
    }

    #[test]
    fn test_add_menu_ranked_between_semantic_menus() {
        let main_menu = MainMenu::new();
        main_menu.add_menu(Arc::new(RankedMenu::new("Editor")), 30);

        let titles: Vec<String> = main_menu
            .menus()
            .iter()
            .map(|m| m.title().to_string())
            .collect();
        assert_eq!(
            titles,
            vec!["File", "Edit", "Run", "Kernel", "View", "Editor", "Help"]
        );
    }

    #[test]
    fn test_dispose_clears_everything() {
        let main_menu = MainMenu::new();
        main_menu
            .run_menu
            .code_runners
            .add(std::sync::Arc::new(crate::run::CodeRunner::new(
                Arc::new(quantlab_shell::WidgetTracker::new("notebook")),
                "Cells",
                "Cells",
            )));

        main_menu.dispose();
        assert!(main_menu.run_menu.code_runners.is_empty());
        assert!(main_menu.menus().is_empty());
        assert!(main_menu.edit_menu.menu().is_disposed());
    }
}
