//! The extensible Kernel menu.

use std::sync::Arc;

use quantlab_shell::{ExecuteResult, WidgetHandle, WidgetTracker};

use crate::extension::{ExtensionPoint, MenuExtender, OperationFn, async_operation};
use crate::menu::RankedMenu;

/// An activity backed by a kernel session.
pub struct KernelUser {
    tracker: Arc<WidgetTracker>,
    interrupt_kernel: Option<OperationFn>,
    restart_kernel: Option<OperationFn>,
    change_kernel: Option<OperationFn>,
    shutdown_kernel: Option<OperationFn>,
}

impl KernelUser {
    /// Create a kernel user with no operations defined.
    pub fn new(tracker: Arc<WidgetTracker>) -> Self {
        Self {
            tracker,
            interrupt_kernel: None,
            restart_kernel: None,
            change_kernel: None,
            shutdown_kernel: None,
        }
    }

    /// Define the interrupt operation.
    pub fn with_interrupt_kernel<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.interrupt_kernel = Some(async_operation(f));
        self
    }

    /// Define the restart operation.
    pub fn with_restart_kernel<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.restart_kernel = Some(async_operation(f));
        self
    }

    /// Define the change-kernel operation.
    pub fn with_change_kernel<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.change_kernel = Some(async_operation(f));
        self
    }

    /// Define the shutdown operation.
    pub fn with_shutdown_kernel<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.shutdown_kernel = Some(async_operation(f));
        self
    }

    /// The interrupt operation, if defined.
    pub fn interrupt_kernel(&self) -> Option<OperationFn> {
        self.interrupt_kernel.clone()
    }

    /// The restart operation, if defined.
    pub fn restart_kernel(&self) -> Option<OperationFn> {
        self.restart_kernel.clone()
    }

    /// The change-kernel operation, if defined.
    pub fn change_kernel(&self) -> Option<OperationFn> {
        self.change_kernel.clone()
    }

    /// The shutdown operation, if defined.
    pub fn shutdown_kernel(&self) -> Option<OperationFn> {
        self.shutdown_kernel.clone()
    }
}

impl MenuExtender for KernelUser {
    fn tracker(&self) -> &Arc<WidgetTracker> {
        &self.tracker
    }
}

/// An activity that can spawn a console attached to its kernel session.
pub struct ConsoleCreator {
    tracker: Arc<WidgetTracker>,
    create_console: Option<OperationFn>,
}

impl ConsoleCreator {
    /// Create a console creator with no operation defined.
    pub fn new(tracker: Arc<WidgetTracker>) -> Self {
        Self {
            tracker,
            create_console: None,
        }
    }

    /// Define the create-console operation.
    pub fn with_create_console<F>(mut self, f: F) -> Self
    where
        F: Fn(&WidgetHandle) -> ExecuteResult + Send + Sync + 'static,
    {
        self.create_console = Some(async_operation(f));
        self
    }

    /// The create-console operation, if defined.
    pub fn create_console(&self) -> Option<OperationFn> {
        self.create_console.clone()
    }
}

impl MenuExtender for ConsoleCreator {
    fn tracker(&self) -> &Arc<WidgetTracker> {
        &self.tracker
    }
}

/// An extensible Kernel menu for the application.
pub struct KernelMenu {
    menu: Arc<RankedMenu>,
    /// Kernel lifecycle providers.
    pub kernel_users: ExtensionPoint<KernelUser>,
    /// Console-creation providers.
    pub console_creators: ExtensionPoint<ConsoleCreator>,
}

impl Default for KernelMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelMenu {
    /// Construct the kernel menu.
    pub fn new() -> Self {
        Self {
            menu: Arc::new(RankedMenu::new("Kernel")),
            kernel_users: ExtensionPoint::new(),
            console_creators: ExtensionPoint::new(),
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

    /// Dispose of the resources held by the kernel menu.
    pub fn dispose(&self) {
        self.kernel_users.clear();
        self.console_creators.clear();
        self.menu.dispose();
    }
}
