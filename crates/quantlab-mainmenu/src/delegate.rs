//! Delegation of semantic commands to the owning extender.
//!
//! The functions here produce the callbacks registered in the command table
//! for each semantic menu command. At execution time (never earlier) they
//! read the active widget from the [`Shell`] capability, resolve the
//! extender whose tracker owns it, and forward to the extender's operation.
//!
//! A resolution miss is not an error: the command reports disabled, executes
//! as a completed no-op, and contributes an empty label fragment.
//!
//! The selector closures replace the original string-keyed property lookup
//! with typed field access, e.g. `|e: &Undoer| e.undo()`.

use std::sync::Arc;

use quantlab_core::logging::targets;
use quantlab_shell::{ExecuteResult, Shell, WidgetHandle, done};

use crate::extension::{ExtensionPoint, MenuExtender, OperationFn, ToggleFn};

/// Resolve the extender owning the given widget, if any.
///
/// Iterates the point in registration order and returns the first extender
/// whose tracker has the widget (first-match-wins), or `None` when there is
/// no active widget or no extender claims it.
pub fn resolve_extender<E: MenuExtender>(
    widget: Option<&WidgetHandle>,
    point: &ExtensionPoint<E>,
) -> Option<Arc<E>> {
    let widget = widget?;
    let resolved = point.first_owner(widget);
    if resolved.is_none() {
        tracing::trace!(
            target: targets::DELEGATE,
            widget = %widget.title(),
            "no extender claims the active widget"
        );
    }
    resolved
}

/// Produce an execute callback that forwards to the resolved extender's
/// selected operation.
///
/// The returned closure resolves to a completed no-op when no widget is
/// active, no extender owns it, or the extender does not define the
/// operation. A failing operation propagates its error unwrapped.
pub fn delegate_execute<E, S>(
    shell: &Arc<Shell>,
    point: &ExtensionPoint<E>,
    select: S,
) -> impl Fn() -> ExecuteResult + Send + Sync + 'static
where
    E: MenuExtender + 'static,
    S: Fn(&E) -> Option<OperationFn> + Send + Sync + 'static,
{
    let shell = shell.clone();
    let point = point.clone();
    move || {
        let Some(widget) = shell.current_widget() else {
            return done();
        };
        let Some(extender) = resolve_extender(Some(&widget), &point) else {
            return done();
        };
        match select(&extender) {
            Some(op) => op(&widget),
            None => done(),
        }
    }
}

/// Produce an enablement predicate for the selected operation.
///
/// The command is enabled iff an extender resolves for the active widget and
/// it defines the operation: the presence of the handler is the enablement
/// signal, there is no separate "enabled" check.
pub fn delegate_enabled<E, S>(
    shell: &Arc<Shell>,
    point: &ExtensionPoint<E>,
    select: S,
) -> impl Fn() -> bool + Send + Sync + 'static
where
    E: MenuExtender + 'static,
    S: Fn(&E) -> Option<OperationFn> + Send + Sync + 'static,
{
    let shell = shell.clone();
    let point = point.clone();
    move || {
        let widget = shell.current_widget();
        resolve_extender(widget.as_ref(), &point)
            .is_some_and(|extender| select(&extender).is_some())
    }
}

/// Produce a toggled predicate for the selected toggle function.
///
/// The command is toggled iff an extender resolves, it defines the toggle
/// predicate, and the predicate returns true for the active widget.
pub fn delegate_toggled<E, S>(
    shell: &Arc<Shell>,
    point: &ExtensionPoint<E>,
    select: S,
) -> impl Fn() -> bool + Send + Sync + 'static
where
    E: MenuExtender + 'static,
    S: Fn(&E) -> Option<ToggleFn> + Send + Sync + 'static,
{
    let shell = shell.clone();
    let point = point.clone();
    move || {
        let Some(widget) = shell.current_widget() else {
            return false;
        };
        resolve_extender(Some(&widget), &point)
            .and_then(|extender| select(&extender))
            .is_some_and(|toggled| toggled(&widget))
    }
}

/// Produce a label-fragment accessor for the selected data field.
///
/// Returns the field value of the resolved extender, or the empty string
/// when nothing resolves. Used to build dynamic command labels such as
/// "Clear Cells" vs "Clear…".
pub fn delegate_label<E, S>(
    shell: &Arc<Shell>,
    point: &ExtensionPoint<E>,
    select: S,
) -> impl Fn() -> String + Clone + Send + Sync + 'static
where
    E: MenuExtender + 'static,
    S: Fn(&E) -> String + Clone + Send + Sync + 'static,
{
    let shell = shell.clone();
    let point = point.clone();
    move || {
        let widget = shell.current_widget();
        resolve_extender(widget.as_ref(), &point)
            .map(|extender| select(&extender))
            .unwrap_or_default()
    }
}
