//! Ranked-group menu composition.
//!
//! This module provides [`RankedMenu`], the ordered-insertion menu
//! abstraction behind every top-level application menu. Plugins contribute
//! whole groups of items at a numeric rank; the menu renders the groups into
//! one flat item list, separated by separators, keeping group order stable
//! under incremental insertion from independently-loaded plugins.
//!
//! # Example
//!
//! ```
//! use quantlab_mainmenu::menu::{MenuItem, RankedMenu};
//! use quantlab_shell::CommandId;
//!
//! let menu = RankedMenu::new("Edit");
//!
//! // Plugins add groups in any order; ranks decide final placement.
//! menu.add_group(vec![MenuItem::command(CommandId::Find)], 200);
//! menu.add_group(
//!     vec![
//!         MenuItem::command(CommandId::Undo),
//!         MenuItem::command(CommandId::Redo),
//!     ],
//!     0,
//! );
//!
//! // The undo group renders before the find group despite insertion order.
//! let items = menu.visible_items();
//! assert!(matches!(items[0], MenuItem::Command { command: CommandId::Undo, .. }));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use quantlab_core::logging::targets;
use quantlab_shell::CommandId;
use serde_json::Value;

/// The rank used when a plugin does not specify one.
pub const DEFAULT_RANK: i64 = 100;

/// An item in a menu.
///
/// Items are command references, separators, or nested submenus. Submenus
/// are plain item lists; a ranked submenu is composed by building a
/// [`RankedMenu`] and snapshotting its items.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuItem {
    /// A command reference, resolved through the command table when shown.
    Command {
        /// The referenced command.
        command: CommandId,
        /// Optional arguments forwarded to the command.
        args: Option<Value>,
    },
    /// A visual separator line.
    Separator,
    /// A nested submenu.
    Submenu {
        /// The title of the submenu.
        title: String,
        /// The submenu's items.
        items: Vec<MenuItem>,
    },
}

impl MenuItem {
    /// Create a command item without arguments.
    pub fn command(command: CommandId) -> Self {
        MenuItem::Command {
            command,
            args: None,
        }
    }

    /// Create a command item with arguments.
    pub fn command_with_args(command: CommandId, args: Value) -> Self {
        MenuItem::Command {
            command,
            args: Some(args),
        }
    }

    /// Create a separator item.
    pub fn separator() -> Self {
        MenuItem::Separator
    }

    /// Create a submenu item.
    pub fn submenu(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        MenuItem::Submenu {
            title: title.into(),
            items,
        }
    }

    /// Check if this item is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, MenuItem::Separator)
    }
}

/// A group of items inserted together at a sort rank.
///
/// Groups are never mutated after insertion; a plugin contributes its items
/// as a whole batch.
struct RankGroup {
    items: Vec<MenuItem>,
    rank: i64,
}

/// An extensible application menu composed of ranked item groups.
///
/// Groups render in non-decreasing rank order; within a group, item order is
/// preserved, and groups with equal rank keep their insertion order. Each
/// group is bracketed by a leading and a trailing separator in the flat item
/// list. The menu does not deduplicate separators itself; use
/// [`visible_items`](Self::visible_items) for the collapsed view a rendering
/// layer would present.
pub struct RankedMenu {
    title: String,
    items: RwLock<Vec<MenuItem>>,
    groups: RwLock<Vec<RankGroup>>,
    disposed: AtomicBool,
}

impl RankedMenu {
    /// Construct a new menu with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: RwLock::new(Vec::new()),
            groups: RwLock::new(Vec::new()),
            disposed: AtomicBool::new(false),
        }
    }

    /// The title of the menu.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Add a group of menu items specific to a particular plugin.
    ///
    /// The group is inserted after all existing groups whose rank is less
    /// than or equal to `rank`. Any rank value is accepted; an out-of-range
    /// rank simply sorts to an extreme position.
    pub fn add_group(&self, items: Vec<MenuItem>, rank: i64) {
        let mut groups = self.groups.write();

        // Upper-bound insertion keeps equal ranks in arrival order.
        let group_index = groups.partition_point(|g| g.rank <= rank);

        // The item offset of the insertion point counts each preceding
        // group's items plus its leading and trailing separators.
        let mut insert_index = 0;
        for group in &groups[..group_index] {
            insert_index += group.items.len() + 2;
        }

        tracing::debug!(
            target: targets::MENU,
            menu = %self.title,
            rank,
            group_index,
            insert_index,
            item_count = items.len(),
            "adding menu group"
        );

        {
            let mut flat = self.items.write();
            flat.insert(insert_index, MenuItem::Separator);
            insert_index += 1;
            for item in &items {
                flat.insert(insert_index, item.clone());
                insert_index += 1;
            }
            flat.insert(insert_index, MenuItem::Separator);
        }

        groups.insert(group_index, RankGroup { items, rank });
    }

    /// Add a group at the default rank of 100.
    pub fn add_group_default(&self, items: Vec<MenuItem>) {
        self.add_group(items, DEFAULT_RANK);
    }

    /// A snapshot of the flat item list, including redundant separators.
    pub fn items(&self) -> Vec<MenuItem> {
        self.items.read().clone()
    }

    /// The item list as a rendering layer would present it, with leading,
    /// trailing, and duplicate separators collapsed.
    pub fn visible_items(&self) -> Vec<MenuItem> {
        let mut visible: Vec<MenuItem> = Vec::new();
        for item in self.items.read().iter() {
            if item.is_separator()
                && visible.last().is_none_or(|last| last.is_separator())
            {
                continue;
            }
            visible.push(item.clone());
        }
        if visible.last().is_some_and(|last| last.is_separator()) {
            visible.pop();
        }
        visible
    }

    /// The number of inserted groups.
    pub fn group_count(&self) -> usize {
        self.groups.read().len()
    }

    /// Whether the menu has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Dispose of the resources held by the menu.
    pub fn dispose(&self) {
        self.groups.write().clear();
        self.items.write().clear();
        self.disposed.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(items: &[MenuItem]) -> Vec<CommandId> {
        items
            .iter()
            .filter_map(|item| match item {
                MenuItem::Command { command, .. } => Some(*command),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_rank_ordering_independent_of_insertion_order() {
        let menu = RankedMenu::new("Edit");
        menu.add_group(vec![MenuItem::command(CommandId::Find)], 50);
        menu.add_group(vec![MenuItem::command(CommandId::Undo)], 10);
        menu.add_group(vec![MenuItem::command(CommandId::Clear)], 90);

        assert_eq!(
            commands(&menu.items()),
            vec![CommandId::Undo, CommandId::Find, CommandId::Clear]
        );
    }

    #[test]
    fn test_equal_ranks_keep_insertion_order() {
        let menu = RankedMenu::new("File");
        menu.add_group(vec![MenuItem::command(CommandId::Save)], 100);
        menu.add_group(vec![MenuItem::command(CommandId::SaveAs)], 100);
        menu.add_group(vec![MenuItem::command(CommandId::Rename)], 100);

        assert_eq!(
            commands(&menu.items()),
            vec![CommandId::Save, CommandId::SaveAs, CommandId::Rename]
        );
    }

    #[test]
    fn test_item_offset_sums_group_sizes_plus_separators() {
        let menu = RankedMenu::new("View");
        menu.add_group(
            vec![
                MenuItem::command(CommandId::LineNumbers),
                MenuItem::command(CommandId::MatchBrackets),
            ],
            0,
        );
        menu.add_group(vec![MenuItem::command(CommandId::WordWrap)], 10);

        // Offset before the second group: (2 + 2) for the first group.
        let items = menu.items();
        assert_eq!(items.len(), 4 + 3);
        assert!(matches!(
            items[4],
            MenuItem::Separator
        ));
        assert!(matches!(
            items[5],
            MenuItem::Command { command: CommandId::WordWrap, .. }
        ));
    }

    #[test]
    fn test_group_items_keep_internal_order() {
        let menu = RankedMenu::new("Kernel");
        let group = vec![
            MenuItem::command(CommandId::InterruptKernel),
            MenuItem::command(CommandId::RestartKernel),
            MenuItem::command(CommandId::ShutdownKernel),
        ];
        menu.add_group(group, 0);

        assert_eq!(
            commands(&menu.items()),
            vec![
                CommandId::InterruptKernel,
                CommandId::RestartKernel,
                CommandId::ShutdownKernel
            ]
        );
    }

    #[test]
    fn test_visible_items_collapse_separators() {
        let menu = RankedMenu::new("Run");
        menu.add_group(vec![MenuItem::command(CommandId::Run)], 0);
        menu.add_group(vec![MenuItem::command(CommandId::RunAll)], 1);

        // Raw list carries four separators; the visible view keeps one
        // between the groups and none at the edges.
        assert_eq!(menu.items().len(), 6);
        let visible = menu.visible_items();
        assert_eq!(visible.len(), 3);
        assert!(visible[1].is_separator());
        assert!(!visible[0].is_separator());
        assert!(!visible[2].is_separator());
    }

    #[test]
    fn test_extreme_ranks_are_accepted() {
        let menu = RankedMenu::new("Edit");
        menu.add_group(vec![MenuItem::command(CommandId::Undo)], 0);
        menu.add_group(vec![MenuItem::command(CommandId::Find)], i64::MAX);
        menu.add_group(vec![MenuItem::command(CommandId::Clear)], i64::MIN);

        assert_eq!(
            commands(&menu.items()),
            vec![CommandId::Clear, CommandId::Undo, CommandId::Find]
        );
    }

    #[test]
    fn test_default_rank_sorts_between_extremes() {
        let menu = RankedMenu::new("File");
        menu.add_group(vec![MenuItem::command(CommandId::OpenSettings)], 1000);
        menu.add_group_default(vec![MenuItem::command(CommandId::Save)]);
        menu.add_group(vec![MenuItem::command(CommandId::Close)], 2);

        assert_eq!(
            commands(&menu.items()),
            vec![CommandId::Close, CommandId::Save, CommandId::OpenSettings]
        );
    }

    #[test]
    fn test_submenu_items() {
        let menu = RankedMenu::new("View");
        let submenu = MenuItem::submenu(
            "Text Editor",
            vec![MenuItem::command(CommandId::LineNumbers)],
        );
        menu.add_group(vec![submenu.clone()], 10);

        assert_eq!(menu.visible_items(), vec![submenu]);
    }

    #[test]
    fn test_dispose_clears_menu() {
        let menu = RankedMenu::new("Edit");
        menu.add_group(vec![MenuItem::command(CommandId::Undo)], 0);
        assert!(!menu.is_disposed());

        menu.dispose();
        assert!(menu.is_disposed());
        assert!(menu.items().is_empty());
        assert_eq!(menu.group_count(), 0);
    }
}
