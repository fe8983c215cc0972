mod dialogs;
mod feature_panel;
mod help;
mod stage_panel;
mod toolbar;

pub use dialogs::SettingsDialogState;
pub use help::HelpWindowState;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::conditions::is_revealed;
use crate::config::ConfigResetNotification;
use crate::overlay::OverlaySurface;

/// All panel and dialog systems. Diagram labels and the overlay paint after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct UiSet;

/// Resource that tracks whether any modal dialog is currently open.
/// Presentation input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block presentation input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    help: Res<HelpWindowState>,
    settings: Res<SettingsDialogState>,
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = help.is_open || settings.is_open || config_reset.show;
}

/// Record the region left free once all panels are laid out
fn update_overlay_surface(mut contexts: EguiContexts, mut surface: ResMut<OverlaySurface>) -> Result {
    let rect = contexts.ctx_mut()?.available_rect();
    surface.update_from_egui(rect);
    Ok(())
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<HelpWindowState>()
            .init_resource::<SettingsDialogState>()
            // Side panel must render first so top panels fit beside it
            // Use chain() to enforce ordering
            .add_systems(
                EguiPrimaryContextPass,
                (
                    stage_panel::stage_panel_ui,
                    toolbar::toolbar_ui,
                    toolbar::annotation_toolbar_ui,
                    update_overlay_surface,
                )
                    .chain()
                    .in_set(UiSet)
                    .run_if(is_revealed),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Last: floating windows and dialogs
                    feature_panel::feature_panel_ui,
                    help::help_popup_ui,
                    dialogs::settings_dialog_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .after(update_overlay_surface)
                    .in_set(UiSet)
                    .run_if(is_revealed),
            )
            .add_systems(Update, help::handle_help_shortcut.run_if(is_revealed))
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
