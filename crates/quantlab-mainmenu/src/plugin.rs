//! The main-menu plugin.
//!
//! This module is the activation entry point the plugin host calls once per
//! application session. It constructs the [`MainMenu`], registers every
//! semantic command in the command table with callbacks produced by the
//! delegate resolver, and populates the default ranked groups.
//!
//! Commands delegate lazily: nothing is resolved at registration time, and
//! each execution re-reads the active widget from the shell capability.

use std::sync::Arc;

use quantlab_core::Result;
use quantlab_shell::{CommandEntry, CommandId, CommandTable, Shell};

use crate::delegate::{delegate_enabled, delegate_execute, delegate_label, delegate_toggled};
use crate::edit::{Clearer, EditMenu, FindReplacer, Undoer};
use crate::file::{CloseAndCleaner, FileMenu};
use crate::kernel::{ConsoleCreator, KernelMenu, KernelUser};
use crate::mainmenu::MainMenu;
use crate::menu::MenuItem;
use crate::run::{CodeRunner, RunMenu};
use crate::view::{EditorViewer, ViewMenu};

/// Build the main menu and register its semantic commands.
///
/// Called once by the plugin host during activation; the returned menu is
/// exposed to downstream plugins as the main-menu service.
pub fn activate(shell: &Arc<Shell>, commands: &Arc<CommandTable>) -> Result<Arc<MainMenu>> {
    let menu = Arc::new(MainMenu::new());

    create_edit_menu(shell, commands, &menu.edit_menu)?;
    create_file_menu(shell, commands, &menu.file_menu)?;
    create_kernel_menu(shell, commands, &menu.kernel_menu)?;
    create_run_menu(shell, commands, &menu.run_menu)?;
    create_view_menu(shell, commands, &menu.view_menu)?;

    Ok(menu)
}

/// Register the basic Edit menu commands and groups.
fn create_edit_menu(
    shell: &Arc<Shell>,
    commands: &Arc<CommandTable>,
    menu: &EditMenu,
) -> Result<()> {
    // Undo/redo delegate to the undoer owning the active widget.
    commands.add_command(
        CommandId::Undo,
        CommandEntry::new("Undo")
            .with_is_enabled(delegate_enabled(shell, &menu.undoers, Undoer::undo))
            .with_execute(delegate_execute(shell, &menu.undoers, Undoer::undo)),
    )?;
    commands.add_command(
        CommandId::Redo,
        CommandEntry::new("Redo")
            .with_is_enabled(delegate_enabled(shell, &menu.undoers, Undoer::redo))
            .with_execute(delegate_execute(shell, &menu.undoers, Undoer::redo)),
    )?;
    menu.add_group(
        vec![
            MenuItem::command(CommandId::Undo),
            MenuItem::command(CommandId::Redo),
        ],
        0,
    );

    // The clear command borrows its label from the owning clearer's noun,
    // e.g. "Clear Cells" for a notebook or "Clear Console" for a console.
    let clear_noun = delegate_label(shell, &menu.clearers, |c: &Clearer| c.noun().to_string());
    commands.add_command(
        CommandId::Clear,
        CommandEntry::new("Clear")
            .with_label_fn(move || {
                let noun = clear_noun();
                if noun.is_empty() {
                    "Clear…".to_string()
                } else {
                    format!("Clear {noun}")
                }
            })
            .with_is_enabled(delegate_enabled(shell, &menu.clearers, Clearer::clear))
            .with_execute(delegate_execute(shell, &menu.clearers, Clearer::clear)),
    )?;
    menu.add_group(vec![MenuItem::command(CommandId::Clear)], 10);

    commands.add_command(
        CommandId::Find,
        CommandEntry::new("Find…")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.find_replacers,
                FindReplacer::find,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.find_replacers,
                FindReplacer::find,
            )),
    )?;
    commands.add_command(
        CommandId::FindAndReplace,
        CommandEntry::new("Find and Replace…")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.find_replacers,
                FindReplacer::find_and_replace,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.find_replacers,
                FindReplacer::find_and_replace,
            )),
    )?;
    menu.add_group(
        vec![
            MenuItem::command(CommandId::Find),
            MenuItem::command(CommandId::FindAndReplace),
        ],
        200,
    );

    Ok(())
}

/// Register the basic File menu commands and groups.
fn create_file_menu(
    shell: &Arc<Shell>,
    commands: &Arc<CommandTable>,
    menu: &FileMenu,
) -> Result<()> {
    // The close command names both the cleanup action and the widget,
    // e.g. `Close and Shutdown "Untitled.ipynb"`.
    let close_action = delegate_label(shell, &menu.close_and_cleaners, |c: &CloseAndCleaner| {
        c.action().to_string()
    });
    let label_shell = shell.clone();
    commands.add_command(
        CommandId::CloseAndCleanup,
        CommandEntry::new("Close and Shutdown")
            .with_label_fn(move || {
                let action = close_action();
                if action.is_empty() {
                    return "Close and Shutdown…".to_string();
                }
                let name = label_shell
                    .current_widget()
                    .map(|w| w.title())
                    .unwrap_or_else(|| "…".to_string());
                format!("Close and {action} \"{name}\"")
            })
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.close_and_cleaners,
                CloseAndCleaner::close_and_cleanup,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.close_and_cleaners,
                CloseAndCleaner::close_and_cleanup,
            )),
    )?;

    let file_operation_group = [
        CommandId::Save,
        CommandId::SaveAs,
        CommandId::Rename,
        CommandId::RestoreCheckpoint,
        CommandId::CloneDocument,
    ]
    .map(MenuItem::command)
    .to_vec();

    let close_group = [
        CommandId::Close,
        CommandId::CloseAndCleanup,
        CommandId::CloseAllFiles,
    ]
    .map(MenuItem::command)
    .to_vec();

    menu.add_group(file_operation_group, 1);
    menu.add_group(close_group, 2);
    menu.add_group(vec![MenuItem::command(CommandId::OpenSettings)], 1000);

    Ok(())
}

/// Register the basic Kernel menu commands and groups.
fn create_kernel_menu(
    shell: &Arc<Shell>,
    commands: &Arc<CommandTable>,
    menu: &KernelMenu,
) -> Result<()> {
    commands.add_command(
        CommandId::InterruptKernel,
        CommandEntry::new("Interrupt Kernel")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.kernel_users,
                KernelUser::interrupt_kernel,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.kernel_users,
                KernelUser::interrupt_kernel,
            )),
    )?;
    commands.add_command(
        CommandId::RestartKernel,
        CommandEntry::new("Restart Kernel")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.kernel_users,
                KernelUser::restart_kernel,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.kernel_users,
                KernelUser::restart_kernel,
            )),
    )?;
    commands.add_command(
        CommandId::ChangeKernel,
        CommandEntry::new("Change Kernel")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.kernel_users,
                KernelUser::change_kernel,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.kernel_users,
                KernelUser::change_kernel,
            )),
    )?;
    commands.add_command(
        CommandId::ShutdownKernel,
        CommandEntry::new("Shutdown Kernel")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.kernel_users,
                KernelUser::shutdown_kernel,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.kernel_users,
                KernelUser::shutdown_kernel,
            )),
    )?;

    let label_shell = shell.clone();
    commands.add_command(
        CommandId::CreateConsole,
        CommandEntry::new("Create Console")
            .with_label_fn(move || match label_shell.current_widget() {
                Some(widget) => format!("Create Console for \"{}\"", widget.title()),
                None => "Create Console for …".to_string(),
            })
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.console_creators,
                ConsoleCreator::create_console,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.console_creators,
                ConsoleCreator::create_console,
            )),
    )?;

    let kernel_user_group = [
        CommandId::InterruptKernel,
        CommandId::RestartKernel,
        CommandId::ChangeKernel,
        CommandId::ShutdownKernel,
    ]
    .map(MenuItem::command)
    .to_vec();
    menu.add_group(kernel_user_group, 0);

    menu.add_group(vec![MenuItem::command(CommandId::CreateConsole)], 1);

    Ok(())
}

/// Register the basic Run menu commands and groups.
fn create_run_menu(
    shell: &Arc<Shell>,
    commands: &Arc<CommandTable>,
    menu: &RunMenu,
) -> Result<()> {
    let noun = delegate_label(shell, &menu.code_runners, |r: &CodeRunner| {
        r.noun().to_string()
    });
    let plural_noun = delegate_label(shell, &menu.code_runners, |r: &CodeRunner| {
        r.plural_noun().to_string()
    });

    // Labels compose the owning runner's noun: "Run Cells", "Run All Cells",
    // or plain "Run" when nothing resolves.
    let run_noun = noun.clone();
    commands.add_command(
        CommandId::Run,
        CommandEntry::new("Run")
            .with_label_fn(move || {
                let noun = run_noun();
                if noun.is_empty() {
                    "Run".to_string()
                } else {
                    format!("Run {noun}")
                }
            })
            .with_is_enabled(delegate_enabled(shell, &menu.code_runners, CodeRunner::run))
            .with_execute(delegate_execute(shell, &menu.code_runners, CodeRunner::run)),
    )?;

    commands.add_command(
        CommandId::RunAll,
        CommandEntry::new("Run All")
            .with_label_fn(move || {
                let noun = plural_noun();
                if noun.is_empty() {
                    "Run All".to_string()
                } else {
                    format!("Run All {noun}")
                }
            })
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.code_runners,
                CodeRunner::run_all,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.code_runners,
                CodeRunner::run_all,
            )),
    )?;

    let above_noun = noun.clone();
    commands.add_command(
        CommandId::RunAbove,
        CommandEntry::new("Run Above")
            .with_label_fn(move || {
                let noun = above_noun();
                if noun.is_empty() {
                    "Run Above".to_string()
                } else {
                    format!("Run {noun} Above")
                }
            })
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.code_runners,
                CodeRunner::run_above,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.code_runners,
                CodeRunner::run_above,
            )),
    )?;

    let below_noun = noun;
    commands.add_command(
        CommandId::RunBelow,
        CommandEntry::new("Run Below")
            .with_label_fn(move || {
                let noun = below_noun();
                if noun.is_empty() {
                    "Run Below".to_string()
                } else {
                    format!("Run {noun} Below")
                }
            })
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.code_runners,
                CodeRunner::run_below,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.code_runners,
                CodeRunner::run_below,
            )),
    )?;

    let code_runner_group = [
        CommandId::Run,
        CommandId::RunAll,
        CommandId::RunAbove,
        CommandId::RunBelow,
    ]
    .map(MenuItem::command)
    .to_vec();
    menu.add_group(code_runner_group, 0);

    Ok(())
}

/// Register the basic View menu commands and groups.
fn create_view_menu(
    shell: &Arc<Shell>,
    commands: &Arc<CommandTable>,
    menu: &ViewMenu,
) -> Result<()> {
    commands.add_command(
        CommandId::LineNumbers,
        CommandEntry::new("Line Numbers")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.editor_viewers,
                EditorViewer::toggle_line_numbers,
            ))
            .with_is_toggled(delegate_toggled(
                shell,
                &menu.editor_viewers,
                EditorViewer::line_numbers_toggled,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.editor_viewers,
                EditorViewer::toggle_line_numbers,
            )),
    )?;

    commands.add_command(
        CommandId::MatchBrackets,
        CommandEntry::new("Match Brackets")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.editor_viewers,
                EditorViewer::toggle_match_brackets,
            ))
            .with_is_toggled(delegate_toggled(
                shell,
                &menu.editor_viewers,
                EditorViewer::match_brackets_toggled,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.editor_viewers,
                EditorViewer::toggle_match_brackets,
            )),
    )?;

    commands.add_command(
        CommandId::WordWrap,
        CommandEntry::new("Word Wrap")
            .with_is_enabled(delegate_enabled(
                shell,
                &menu.editor_viewers,
                EditorViewer::toggle_word_wrap,
            ))
            .with_is_toggled(delegate_toggled(
                shell,
                &menu.editor_viewers,
                EditorViewer::word_wrap_toggled,
            ))
            .with_execute(delegate_execute(
                shell,
                &menu.editor_viewers,
                EditorViewer::toggle_word_wrap,
            )),
    )?;

    let editor_viewer_group = [
        CommandId::LineNumbers,
        CommandId::MatchBrackets,
        CommandId::WordWrap,
    ]
    .map(MenuItem::command)
    .to_vec();
    menu.add_group(editor_viewer_group, 10);

    // Cycling the active tabs.
    menu.add_group(
        vec![
            MenuItem::command(CommandId::ActivateNextTab),
            MenuItem::command(CommandId::ActivatePreviousTab),
        ],
        0,
    );

    // Toggling single-document mode.
    menu.add_group(vec![MenuItem::command(CommandId::ToggleMode)], 1000);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use parking_lot::Mutex;
    use quantlab_core::LabError;
    use quantlab_shell::{WidgetHandle, WidgetTracker, done};

    fn activate_plugin() -> (Arc<Shell>, Arc<CommandTable>, Arc<MainMenu>) {
        let shell = Arc::new(Shell::new());
        let commands = Arc::new(CommandTable::new());
        let menu = activate(&shell, &commands).unwrap();
        (shell, commands, menu)
    }

    #[test]
    fn test_all_semantic_commands_registered() {
        let (_shell, commands, _menu) = activate_plugin();
        for id in [
            CommandId::Undo,
            CommandId::Redo,
            CommandId::Clear,
            CommandId::Find,
            CommandId::FindAndReplace,
            CommandId::CloseAndCleanup,
            CommandId::InterruptKernel,
            CommandId::RestartKernel,
            CommandId::ChangeKernel,
            CommandId::ShutdownKernel,
            CommandId::CreateConsole,
            CommandId::Run,
            CommandId::RunAll,
            CommandId::RunAbove,
            CommandId::RunBelow,
            CommandId::LineNumbers,
            CommandId::MatchBrackets,
            CommandId::WordWrap,
        ] {
            assert!(commands.has_command(id), "missing {id}");
        }
    }

    #[test]
    fn test_edit_menu_group_layout() {
        let (_shell, _commands, menu) = activate_plugin();
        let items = menu.edit_menu.menu().visible_items();

        let flattened: Vec<String> = items
            .iter()
            .map(|item| match item {
                MenuItem::Command { command, .. } => command.id().to_string(),
                MenuItem::Separator => "|".to_string(),
                MenuItem::Submenu { title, .. } => title.clone(),
            })
            .collect();
        assert_eq!(
            flattened,
            vec![
                "editmenu:undo",
                "editmenu:redo",
                "|",
                "editmenu:clear",
                "|",
                "editmenu:find",
                "editmenu:find-and-replace",
            ]
        );
    }

    #[test]
    fn test_commands_disabled_without_extenders() {
        let (shell, commands, _menu) = activate_plugin();

        assert!(!commands.is_enabled(CommandId::Undo).unwrap());
        assert!(!commands.is_enabled(CommandId::Run).unwrap());

        // An active widget nobody claims changes nothing.
        shell.activate(Some(WidgetHandle::new("terminal", "Terminal 1")));
        assert!(!commands.is_enabled(CommandId::Undo).unwrap());
        assert_eq!(commands.label(CommandId::Clear).unwrap(), "Clear…");
        assert_eq!(commands.label(CommandId::Run).unwrap(), "Run");
    }

    #[tokio::test]
    async fn test_run_menu_end_to_end_with_disjoint_runners() {
        let (shell, commands, menu) = activate_plugin();

        let tracker_a = Arc::new(WidgetTracker::new("notebook"));
        let tracker_b = Arc::new(WidgetTracker::new("console"));
        let widget_a = WidgetHandle::new("notebook", "a.ipynb");
        let widget_b = WidgetHandle::new("console", "Console 1");
        tracker_a.add(widget_a.clone());
        tracker_b.add(widget_b.clone());

        let runs_a = Arc::new(Mutex::new(0));
        let runs_b = Arc::new(Mutex::new(0));

        let runs_a_clone = runs_a.clone();
        menu.run_menu.code_runners.add(Arc::new(
            CodeRunner::new(tracker_a, "Cells", "Cells").with_run(move |_| {
                *runs_a_clone.lock() += 1;
                done()
            }),
        ));
        let runs_b_clone = runs_b.clone();
        menu.run_menu.code_runners.add(Arc::new(
            CodeRunner::new(tracker_b, "Console", "Consoles").with_run(move |_| {
                *runs_b_clone.lock() += 1;
                done()
            }),
        ));

        // Activating a widget from tracker A reflects A's noun and runs
        // only A's operation.
        shell.activate(Some(widget_a));
        assert_eq!(commands.label(CommandId::Run).unwrap(), "Run Cells");
        assert!(commands.is_enabled(CommandId::Run).unwrap());
        commands.execute(CommandId::Run).unwrap().await.unwrap();
        assert_eq!(*runs_a.lock(), 1);
        assert_eq!(*runs_b.lock(), 0);

        // Switching to B's widget switches the delegation target.
        shell.activate(Some(widget_b));
        assert_eq!(commands.label(CommandId::Run).unwrap(), "Run Console");
        assert_eq!(commands.label(CommandId::RunAll).unwrap(), "Run All Consoles");
        commands.execute(CommandId::Run).unwrap().await.unwrap();
        assert_eq!(*runs_a.lock(), 1);
        assert_eq!(*runs_b.lock(), 1);
    }

    #[tokio::test]
    async fn test_failing_operation_reaches_the_caller() {
        let (shell, commands, menu) = activate_plugin();

        let tracker = Arc::new(WidgetTracker::new("notebook"));
        let widget = WidgetHandle::new("notebook", "a.ipynb");
        tracker.add(widget.clone());
        menu.run_menu.code_runners.add(Arc::new(
            CodeRunner::new(tracker, "Cells", "Cells").with_run(|_| {
                futures_util::future::ready(Err(LabError::Execution(
                    "cell execution failed".to_string(),
                )))
                .boxed()
            }),
        ));

        // The operation's error propagates unwrapped to the awaiter.
        shell.activate(Some(widget));
        let err = commands.execute(CommandId::Run).unwrap().await.unwrap_err();
        assert!(matches!(err, LabError::Execution(msg) if msg == "cell execution failed"));
    }

    #[tokio::test]
    async fn test_edit_menu_undo_delegation() {
        let (shell, commands, menu) = activate_plugin();

        let tracker = Arc::new(WidgetTracker::new("editor"));
        let widget = WidgetHandle::new("editor", "main.rs");
        tracker.add(widget.clone());

        let undos = Arc::new(Mutex::new(Vec::new()));
        let undos_clone = undos.clone();
        menu.edit_menu.undoers.add(Arc::new(
            Undoer::new(tracker).with_undo(move |w| {
                undos_clone.lock().push(w.title());
            }),
        ));

        shell.activate(Some(widget));
        assert!(commands.is_enabled(CommandId::Undo).unwrap());
        // Redo was not defined, so its command stays disabled.
        assert!(!commands.is_enabled(CommandId::Redo).unwrap());

        commands.execute(CommandId::Undo).unwrap().await.unwrap();
        assert_eq!(*undos.lock(), vec!["main.rs"]);
    }

    #[test]
    fn test_clear_label_reflects_owner_noun() {
        let (shell, commands, menu) = activate_plugin();

        let tracker = Arc::new(WidgetTracker::new("console"));
        let widget = WidgetHandle::new("console", "Console 1");
        tracker.add(widget.clone());
        menu.edit_menu.clearers.add(Arc::new(
            Clearer::new(tracker, "Console").with_clear(|_| {}),
        ));

        assert_eq!(commands.label(CommandId::Clear).unwrap(), "Clear…");
        shell.activate(Some(widget));
        assert_eq!(commands.label(CommandId::Clear).unwrap(), "Clear Console");
        assert!(commands.is_enabled(CommandId::Clear).unwrap());
    }

    #[test]
    fn test_close_and_cleanup_label_names_widget() {
        let (shell, commands, menu) = activate_plugin();

        let tracker = Arc::new(WidgetTracker::new("notebook"));
        let widget = WidgetHandle::new("notebook", "Untitled.ipynb");
        tracker.add(widget.clone());
        menu.file_menu.close_and_cleaners.add(Arc::new(
            CloseAndCleaner::new(tracker, "Shutdown")
                .with_close_and_cleanup(|_| done()),
        ));

        assert_eq!(
            commands.label(CommandId::CloseAndCleanup).unwrap(),
            "Close and Shutdown…"
        );
        shell.activate(Some(widget));
        assert_eq!(
            commands.label(CommandId::CloseAndCleanup).unwrap(),
            "Close and Shutdown \"Untitled.ipynb\""
        );
    }

    #[test]
    fn test_create_console_label_names_widget() {
        let (shell, commands, _menu) = activate_plugin();
        assert_eq!(
            commands.label(CommandId::CreateConsole).unwrap(),
            "Create Console for …"
        );

        shell.activate(Some(WidgetHandle::new("editor", "script.py")));
        assert_eq!(
            commands.label(CommandId::CreateConsole).unwrap(),
            "Create Console for \"script.py\""
        );
    }

    #[tokio::test]
    async fn test_view_menu_toggles() {
        let (shell, commands, menu) = activate_plugin();

        let tracker = Arc::new(WidgetTracker::new("editor"));
        let widget = WidgetHandle::new("editor", "notes.md");
        tracker.add(widget.clone());

        menu.view_menu.editor_viewers.add(Arc::new(
            EditorViewer::new(tracker).with_word_wrap(
                |w| {
                    let wrapped = w.option("wordWrap") == Some(serde_json::json!(true));
                    w.set_option("wordWrap", serde_json::json!(!wrapped));
                },
                |w| w.option("wordWrap") == Some(serde_json::json!(true)),
            ),
        ));

        shell.activate(Some(widget));
        assert!(commands.is_enabled(CommandId::WordWrap).unwrap());
        // Line numbers were not defined by this viewer.
        assert!(!commands.is_enabled(CommandId::LineNumbers).unwrap());
        assert!(!commands.is_toggled(CommandId::WordWrap).unwrap());

        commands.execute(CommandId::WordWrap).unwrap().await.unwrap();
        assert!(commands.is_toggled(CommandId::WordWrap).unwrap());

        commands.execute(CommandId::WordWrap).unwrap().await.unwrap();
        assert!(!commands.is_toggled(CommandId::WordWrap).unwrap());
    }

    #[tokio::test]
    async fn test_kernel_menu_delegation() {
        let (shell, commands, menu) = activate_plugin();

        let tracker = Arc::new(WidgetTracker::new("notebook"));
        let widget = WidgetHandle::new("notebook", "a.ipynb");
        tracker.add(widget.clone());

        let interrupts = Arc::new(Mutex::new(0));
        let interrupts_clone = interrupts.clone();
        menu.kernel_menu.kernel_users.add(Arc::new(
            KernelUser::new(tracker.clone()).with_interrupt_kernel(move |_| {
                *interrupts_clone.lock() += 1;
                done()
            }),
        ));

        shell.activate(Some(widget));
        assert!(commands.is_enabled(CommandId::InterruptKernel).unwrap());
        assert!(!commands.is_enabled(CommandId::RestartKernel).unwrap());

        commands
            .execute(CommandId::InterruptKernel)
            .unwrap()
            .await
            .unwrap();
        assert_eq!(*interrupts.lock(), 1);
    }
}
