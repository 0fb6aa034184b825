//! The extensible Run menu.

use std::sync::Arc;

use quantlab_shell::{ExecuteResult, WidgetHandle, WidgetTracker};

use crate::extension::{ExtensionPoint, MenuExtender, OperationFn, async_operation};
use crate::menu::RankedMenu;

/// An activity that runs code.
///
/// The noun fields populate the Run menu labels: a notebook registers
/// `noun: "Cells"` / `plural_noun: "Cells"` so the commands read
/// "Run Cells" and "Run All Cells".
pub struct CodeRunner {
    tracker: Arc<WidgetTracker>,
    noun: String,
    plural_noun: String,
    run: Option<OperationFn>,
    run_all: Option<OperationFn>,
    run_above: Option<OperationFn>,
    run_below: Option<OperationFn>,
}

impl CodeRunner {
    /// Create a code runner labeled with the thing being run.
    pub fn new(
        tracker: Arc<WidgetTracker>,
        noun: impl Into<String>,
        plural_noun: impl Into<String>,
    ) -> Self {
        Self {
            tracker,
            noun: noun.into(),
            plural_noun: plural_noun.into(),
            run: None,
            run_all: None,
            run_above: None,
            run_below: None,
        }
    }

    /// Define the run operation.
    pub fn with_run<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.run = Some(async_operation(f));
        self
    }

    /// Define the run-all operation.
    pub fn with_run_all<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.run_all = Some(async_operation(f));
        self
    }

    /// Define the run-above operation (everything before the selection,
    /// exclusive).
    pub fn with_run_above<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.run_above = Some(async_operation(f));
        self
    }

    /// Define the run-below operation (everything from the selection on,
    /// inclusive).
    pub fn with_run_below<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.run_below = Some(async_operation(f));
        self
    }

    /// A label for the thing being run.
    pub fn noun(&self) -> &str {
        &self.noun
    }

    /// A label for the plural of things being run.
    pub fn plural_noun(&self) -> &str {
        &self.plural_noun
    }

    /// The run operation, if defined.
    pub fn run(&self) -> Option<OperationFn> {
        self.run.clone()
    }

    /// The run-all operation, if defined.
    pub fn run_all(&self) -> Option<OperationFn> {
        self.run_all.clone()
    }

    /// The run-above operation, if defined.
    pub fn run_above(&self) -> Option<OperationFn> {
        self.run_above.clone()
    }

    /// The run-below operation, if defined.
    pub fn run_below(&self) -> Option<OperationFn> {
        self.run_below.clone()
    }
}

impl MenuExtender for CodeRunner {
    fn tracker(&self) -> &Arc<WidgetTracker> {
        &self.tracker
    }
}

/// An extensible Run menu for the application.
pub struct RunMenu {
    menu: Arc<RankedMenu>,
    /// Code-running providers.
    pub code_runners: ExtensionPoint<CodeRunner>,
}

impl Default for RunMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl RunMenu {
    /// Construct the run menu.
    pub fn new() -> Self {
        Self {
            menu: Arc::new(RankedMenu::new("Run")),
            code_runners: ExtensionPoint::new(),
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

    /// Dispose of the resources held by the run menu.
    pub fn dispose(&self) {
        self.code_runners.clear();
        self.menu.dispose();
    }
}
