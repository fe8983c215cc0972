//! Migration stages and the diagram drawn for each.
//!
//! ## Module Structure
//!
//! - [`catalog`] - Stage enum and the static text shown per stage
//! - [`diagram`] - Node and edge layout in world space
//! - [`features`] - Feature panel state and node click handling
//! - [`rendering`] - Gizmo edges and egui node boxes

mod catalog;
mod diagram;
mod features;
mod rendering;

pub use catalog::{security, Outlook, Stage, StageInfo, OBJECTIVES};
pub use diagram::{build_diagram, Diagram, EdgeKind, NodeId};
pub use features::{FeaturePanelState, PROXY_FEATURES, PROXY_FEATURES_TITLE};

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::conditions::{is_revealed, no_dialog_open};
use crate::config::{AppConfig, ConfigLoaded};
use crate::overlay::OverlaySurface;
use crate::params::wants_keyboard_input;
use crate::theme;

#[derive(Component)]
pub struct DiagramCamera;

/// The stage on screen and its laid-out diagram
#[derive(Resource, Debug)]
pub struct CurrentStage {
    stage: Stage,
    diagram: Diagram,
}

impl Default for CurrentStage {
    fn default() -> Self {
        Self::new(Stage::default())
    }
}

impl CurrentStage {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            diagram: build_diagram(stage),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Switch stage, rebuilding the diagram. Returns false if already there.
    pub fn set(&mut self, stage: Stage) -> bool {
        if self.stage == stage {
            return false;
        }
        *self = Self::new(stage);
        true
    }
}

/// Message to switch the displayed stage
#[derive(Message)]
pub struct SetStageRequest {
    pub stage: Stage,
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        DiagramCamera,
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

fn apply_start_stage(config: Res<AppConfig>, mut current: ResMut<CurrentStage>) {
    current.set(config.data.start_stage);
    info!("Starting at stage {:?}", current.stage());
}

/// Keep the world origin at the centre of the overlay surface
fn recenter_camera(
    surface: Res<OverlaySurface>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<&mut Transform, With<DiagramCamera>>,
) {
    let Some(center) = surface.center() else {
        return;
    };
    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let x = window.width() / 2.0 - center.x;
    let y = center.y - window.height() / 2.0;
    if transform.translation.x != x || transform.translation.y != y {
        transform.translation.x = x;
        transform.translation.y = y;
    }
}

fn handle_stage_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    current: Res<CurrentStage>,
    mut contexts: EguiContexts,
    mut requests: MessageWriter<SetStageRequest>,
) {
    if wants_keyboard_input(&mut contexts) {
        return;
    }

    let target = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(Stage::Before)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(Stage::DnsOnly)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(Stage::Proxy)
    } else if keyboard.just_pressed(KeyCode::ArrowRight) {
        Some(current.stage().next())
    } else if keyboard.just_pressed(KeyCode::ArrowLeft) {
        Some(current.stage().previous())
    } else {
        None
    };

    if let Some(stage) = target {
        requests.write(SetStageRequest { stage });
    }
}

fn apply_stage_requests(
    mut requests: MessageReader<SetStageRequest>,
    mut current: ResMut<CurrentStage>,
    mut panel: ResMut<FeaturePanelState>,
) {
    for request in requests.read() {
        if current.set(request.stage) {
            panel.close();
            info!("Switched to stage {:?}", request.stage);
        }
    }
}

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(theme::BACKGROUND))
            .init_resource::<CurrentStage>()
            .init_resource::<FeaturePanelState>()
            .add_message::<SetStageRequest>()
            .add_systems(Startup, (spawn_camera, apply_start_stage.after(ConfigLoaded)))
            .add_systems(
                Update,
                (
                    handle_stage_shortcuts.run_if(no_dialog_open),
                    apply_stage_requests.run_if(on_message::<SetStageRequest>),
                    features::handle_node_click.run_if(no_dialog_open),
                    recenter_camera,
                )
                    .chain()
                    .run_if(is_revealed),
            )
            .add_systems(Update, rendering::draw_edges.run_if(is_revealed))
            .add_systems(
                EguiPrimaryContextPass,
                rendering::draw_diagram_labels
                    .after(crate::ui::UiSet)
                    .run_if(is_revealed),
            );
    }
}
