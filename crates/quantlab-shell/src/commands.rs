//! The typed command table.
//!
//! Commands in the extension layer are identified by a closed enumeration,
//! [`CommandId`], rather than free-form strings: the extension layer is the
//! whole command universe, so the set of identifiers is known at compile
//! time. Each identifier maps to at most one [`CommandEntry`] of callbacks
//! (`label`, `execute`, `is_enabled`, `is_toggled`), registered once by the
//! owning plugin.
//!
//! # Example
//!
//! ```
//! use quantlab_shell::{CommandEntry, CommandId, CommandTable, done};
//!
//! let table = CommandTable::new();
//! table
//!     .add_command(
//!         CommandId::Undo,
//!         CommandEntry::new("Undo").with_execute(|| {
//!             println!("undoing");
//!             done()
//!         }),
//!     )
//!     .unwrap();
//!
//! assert_eq!(table.label(CommandId::Undo).unwrap(), "Undo");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use quantlab_core::logging::targets;
use quantlab_core::{CommandError, Result};

/// The completion of a command execution.
///
/// A resolution miss (no extender owns the active widget) resolves to
/// `Ok(())`; a failing delegated operation propagates its error unwrapped.
pub type ExecuteResult = BoxFuture<'static, Result<()>>;

/// An already-completed, successful [`ExecuteResult`].
pub fn done() -> ExecuteResult {
    futures_util::future::ready(Ok(())).boxed()
}

/// Every command identifier in the extension layer.
///
/// The variants cover the semantic menu commands owned by the main-menu
/// plugin plus the document-manager and application commands that default
/// menu groups reference. Each maps to a stable wire id via
/// [`id`](Self::id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // Edit menu
    Undo,
    Redo,
    Clear,
    Find,
    FindAndReplace,
    // File menu
    Save,
    SaveAs,
    Rename,
    RestoreCheckpoint,
    CloneDocument,
    Close,
    CloseAndCleanup,
    CloseAllFiles,
    OpenSettings,
    // Kernel menu
    InterruptKernel,
    RestartKernel,
    ChangeKernel,
    ShutdownKernel,
    CreateConsole,
    // Run menu
    Run,
    RunAll,
    RunAbove,
    RunBelow,
    // View menu
    LineNumbers,
    MatchBrackets,
    WordWrap,
    ActivateNextTab,
    ActivatePreviousTab,
    ToggleMode,
}

impl CommandId {
    /// The stable wire identifier of the command.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Undo => "editmenu:undo",
            Self::Redo => "editmenu:redo",
            Self::Clear => "editmenu:clear",
            Self::Find => "editmenu:find",
            Self::FindAndReplace => "editmenu:find-and-replace",
            Self::Save => "docmanager:save",
            Self::SaveAs => "docmanager:save-as",
            Self::Rename => "docmanager:rename",
            Self::RestoreCheckpoint => "docmanager:restore-checkpoint",
            Self::CloneDocument => "docmanager:clone",
            Self::Close => "docmanager:close",
            Self::CloseAndCleanup => "filemenu:close-and-cleanup",
            Self::CloseAllFiles => "docmanager:close-all-files",
            Self::OpenSettings => "settingeditor:open",
            Self::InterruptKernel => "kernelmenu:interrupt",
            Self::RestartKernel => "kernelmenu:restart",
            Self::ChangeKernel => "kernelmenu:change",
            Self::ShutdownKernel => "kernelmenu:shutdown",
            Self::CreateConsole => "kernelmenu:create-console",
            Self::Run => "runmenu:run",
            Self::RunAll => "runmenu:run-all",
            Self::RunAbove => "runmenu:run-above",
            Self::RunBelow => "runmenu:run-below",
            Self::LineNumbers => "viewmenu:line-numbering",
            Self::MatchBrackets => "viewmenu:match-brackets",
            Self::WordWrap => "viewmenu:word-wrap",
            Self::ActivateNextTab => "application:activate-next-tab",
            Self::ActivatePreviousTab => "application:activate-previous-tab",
            Self::ToggleMode => "application:toggle-mode",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The callbacks registered for one command.
///
/// Built with the `with_*` methods; unset callbacks default to a static
/// label, a no-op execute, enabled, and untoggled.
pub struct CommandEntry {
    label: Box<dyn Fn() -> String + Send + Sync>,
    execute: Box<dyn Fn() -> ExecuteResult + Send + Sync>,
    is_enabled: Box<dyn Fn() -> bool + Send + Sync>,
    is_toggled: Box<dyn Fn() -> bool + Send + Sync>,
}

impl CommandEntry {
    /// Create an entry with a static label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            label: Box::new(move || label.clone()),
            execute: Box::new(done),
            is_enabled: Box::new(|| true),
            is_toggled: Box::new(|| false),
        }
    }

    /// Replace the static label with a dynamically computed one.
    pub fn with_label_fn<F>(mut self, label: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.label = Box::new(label);
        self
    }

    /// Set the execute callback.
    pub fn with_execute<F>(mut self, execute: F) -> Self
    where
        F: Fn() -> ExecuteResult + Send + Sync + 'static,
    {
        self.execute = Box::new(execute);
        self
    }

    /// Set the enablement predicate.
    pub fn with_is_enabled<F>(mut self, is_enabled: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.is_enabled = Box::new(is_enabled);
        self
    }

    /// Set the toggled predicate.
    pub fn with_is_toggled<F>(mut self, is_toggled: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.is_toggled = Box::new(is_toggled);
        self
    }
}

/// The registry mapping command identifiers to their callbacks.
///
/// Callbacks are invoked with the table unlocked, so a command may query or
/// execute other commands on the same table from inside its own callbacks.
pub struct CommandTable {
    entries: Mutex<HashMap<CommandId, Arc<CommandEntry>>>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    /// Create an empty command table.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Register the callbacks for a command.
    ///
    /// Each identifier may be registered at most once.
    pub fn add_command(&self, id: CommandId, entry: CommandEntry) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.contains_key(&id) {
            return Err(CommandError::AlreadyRegistered(id.id()).into());
        }
        tracing::debug!(target: targets::COMMANDS, command = %id, "command registered");
        entries.insert(id, Arc::new(entry));
        Ok(())
    }

    /// Whether the command has a registered entry.
    pub fn has_command(&self, id: CommandId) -> bool {
        self.entries.lock().contains_key(&id)
    }

    // The entry is cloned out and the lock released before any callback
    // runs; holding it across a callback would deadlock reentrant use.
    fn entry(&self, id: CommandId) -> Result<Arc<CommandEntry>> {
        self.entries
            .lock()
            .get(&id)
            .cloned()
            .ok_or_else(|| CommandError::NotRegistered(id.id()).into())
    }

    /// The current label of the command.
    pub fn label(&self, id: CommandId) -> Result<String> {
        Ok((self.entry(id)?.label)())
    }

    /// Whether the command is currently enabled.
    pub fn is_enabled(&self, id: CommandId) -> Result<bool> {
        Ok((self.entry(id)?.is_enabled)())
    }

    /// Whether the command is currently toggled.
    pub fn is_toggled(&self, id: CommandId) -> Result<bool> {
        Ok((self.entry(id)?.is_toggled)())
    }

    /// Execute the command, returning its completion.
    ///
    /// The entry's execute callback is invoked synchronously to obtain the
    /// future; the future itself completes cooperatively.
    pub fn execute(&self, id: CommandId) -> Result<ExecuteResult> {
        let entry = self.entry(id)?;
        tracing::debug!(target: targets::COMMANDS, command = %id, "executing command");
        Ok((entry.execute)())
    }
}
