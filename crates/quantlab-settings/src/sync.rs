//! The settings synchronization flow.
//!
//! Activity plugins keep local caches of setting values and push them onto
//! their tracked widgets. [`synchronize`] consolidates the flow every such
//! plugin needs:
//!
//! 1. Load the plugin's settings, joined with the application restored
//!    barrier. Whichever resolves last triggers the continuation, and the
//!    initial apply pass runs exactly once with the loaded values.
//! 2. Subscribe to the settings `changed` signal; every notification
//!    refreshes the caches and re-applies them to all tracked widgets.
//! 3. Subscribe to the tracker's `widget_added` signal so widgets created
//!    later receive the last-known cached values.
//!
//! A load failure is logged and the widgets are updated with whatever the
//! caches already hold; it is never surfaced as a blocking error.
//!
//! Apply passes are guarded by an epoch counter: starting a pass invalidates
//! any pass still in flight, so when a change notification interrupts an
//! ongoing pass the stale pass stops and the newer values win.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use quantlab_core::logging::targets;
use quantlab_core::{ConnectionId, RestoredBarrier};
use quantlab_shell::{WidgetHandle, WidgetTracker};

use crate::registry::SettingRegistry;
use crate::settings::Settings;

type UpdateSettingsFn = Arc<dyn Fn(&Settings) + Send + Sync>;
type UpdateWidgetFn = Arc<dyn Fn(&WidgetHandle) + Send + Sync>;

/// A live synchronization between one plugin's settings and its tracker.
///
/// Dropping the handle disconnects the change and widget-added
/// subscriptions, ending the synchronization.
pub struct SettingsSync {
    settings: Option<Arc<Settings>>,
    changed_conn: Option<ConnectionId>,
    tracker: Arc<WidgetTracker>,
    widget_conn: ConnectionId,
}

impl SettingsSync {
    /// The synchronized settings object, or `None` if the load failed.
    pub fn settings(&self) -> Option<&Arc<Settings>> {
        self.settings.as_ref()
    }
}

impl Drop for SettingsSync {
    fn drop(&mut self) {
        if let (Some(settings), Some(conn)) = (&self.settings, self.changed_conn) {
            settings.changed.disconnect(conn);
        }
        self.tracker.widget_added.disconnect(self.widget_conn);
    }
}

/// Run one apply pass over the tracked widgets.
///
/// Starting a pass bumps the epoch, invalidating any pass still in flight;
/// between widgets the pass checks it is still the newest and stops if a
/// newer one has started.
fn apply_pass(
    plugin_id: &str,
    tracker: &WidgetTracker,
    epoch: &AtomicU64,
    update_widget: &UpdateWidgetFn,
) {
    let pass = epoch.fetch_add(1, Ordering::SeqCst) + 1;
    for widget in tracker.widgets() {
        if epoch.load(Ordering::SeqCst) != pass {
            tracing::trace!(
                target: targets::SYNC,
                plugin = %plugin_id,
                pass,
                "discarding stale apply pass"
            );
            return;
        }
        update_widget(&widget);
    }
}

/// Synchronize a plugin's settings with its tracked widgets.
///
/// `update_settings` refreshes the plugin's local caches from the settings
/// object; `update_widget` pushes the cached values onto one widget. See the
/// module docs for the full flow.
pub async fn synchronize<S, W>(
    registry: &SettingRegistry,
    restored: &RestoredBarrier,
    plugin_id: &str,
    tracker: &Arc<WidgetTracker>,
    update_settings: S,
    update_widget: W,
) -> SettingsSync
where
    S: Fn(&Settings) + Send + Sync + 'static,
    W: Fn(&WidgetHandle) + Send + Sync + 'static,
{
    let (loaded, ()) = tokio::join!(registry.load(plugin_id), restored.wait());

    let update_settings: UpdateSettingsFn = Arc::new(update_settings);
    let update_widget: UpdateWidgetFn = Arc::new(update_widget);
    let epoch = Arc::new(AtomicU64::new(0));

    let settings = match loaded {
        Ok(settings) => {
            update_settings(&settings);
            Some(settings)
        }
        Err(err) => {
            tracing::error!(
                target: targets::SYNC,
                plugin = %plugin_id,
                error = %err,
                "settings load failed, continuing with cached defaults"
            );
            None
        }
    };

    // The one initial apply pass, strictly after both load and restoration.
    apply_pass(plugin_id, tracker, &epoch, &update_widget);
    tracing::debug!(target: targets::SYNC, plugin = %plugin_id, "settings synchronized");

    let changed_conn = settings.as_ref().map(|settings| {
        // Weak: the slot lives inside the settings object's own signal.
        let weak = Arc::downgrade(settings);
        let plugin_id = plugin_id.to_string();
        let tracker = tracker.clone();
        let epoch = epoch.clone();
        let update_settings = update_settings.clone();
        let update_widget = update_widget.clone();
        settings.changed.connect(move |()| {
            if let Some(settings) = weak.upgrade() {
                update_settings(&settings);
                apply_pass(&plugin_id, &tracker, &epoch, &update_widget);
            }
        })
    });

    let widget_conn = {
        let update_widget = update_widget.clone();
        tracker
            .widget_added
            .connect(move |widget| update_widget(widget))
    };

    SettingsSync {
        settings,
        changed_conn,
        tracker: tracker.clone(),
        widget_conn,
    }
}
