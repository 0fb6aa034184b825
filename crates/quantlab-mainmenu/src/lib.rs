//! The extensible main menu of the application shell.
//!
//! The menu bar is composed from semantic menus (File, Edit, Run, Kernel,
//! View, Help). Each semantic menu pairs a [`RankedMenu`] of command groups
//! with one or more [`ExtensionPoint`]s where activity plugins register
//! typed extender descriptors. The shared semantic commands ("Undo",
//! "Run Cells", "Interrupt Kernel") are registered once by [`plugin::activate`]
//! and delegate at execution time to whichever extender's tracker owns the
//! shell's active widget.
//!
//! Menu structure is rank-driven: groups inside a menu and menus inside the
//! bar both sort by an integer rank, with separators inserted between groups
//! and collapsed on render.

pub mod delegate;
pub mod edit;
pub mod extension;
pub mod file;
pub mod help;
pub mod kernel;
pub mod mainmenu;
pub mod menu;
pub mod plugin;
pub mod run;
pub mod view;

pub use delegate::{
    delegate_enabled, delegate_execute, delegate_label, delegate_toggled, resolve_extender,
};
pub use edit::{Clearer, EditMenu, FindReplacer, Undoer};
pub use extension::{
    ExtensionPoint, MenuExtender, OperationFn, ToggleFn, async_operation, operation, toggle,
};
pub use file::{CloseAndCleaner, FileMenu};
pub use help::HelpMenu;
pub use kernel::{ConsoleCreator, KernelMenu, KernelUser};
pub use mainmenu::MainMenu;
pub use menu::{DEFAULT_RANK, MenuItem, RankedMenu};
pub use plugin::activate;
pub use run::{CodeRunner, RunMenu};
pub use view::{EditorViewer, ViewMenu};
