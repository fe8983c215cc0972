//! Diagram rendering: edges via gizmos, node boxes and labels via egui.

use bevy::gizmos::prelude::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::{EDGE_DASH_LENGTH, EDGE_DASH_SPEED, EDGE_GAP_LENGTH, NODE_HEIGHT, NODE_WIDTH};
use crate::params::CameraParams;
use crate::theme;

use super::diagram::{dash_segments, DiagramNode};
use super::features::FeaturePanelState;
use super::CurrentStage;

/// Radius of the packet marker travelling along solid animated edges
const PACKET_RADIUS: f32 = 4.0;

pub fn draw_edges(mut gizmos: Gizmos, current: Res<CurrentStage>, time: Res<Time>) {
    let diagram = current.diagram();
    let travelled = time.elapsed_secs() * EDGE_DASH_SPEED;

    for edge in &diagram.edges {
        let Some((start, end)) = diagram.edge_endpoints(edge) else {
            continue;
        };
        let color = edge.kind.color();

        if edge.kind.is_dashed() {
            let phase = if edge.animated { travelled } else { 0.0 };
            for (from, to) in dash_segments(start, end, EDGE_DASH_LENGTH, EDGE_GAP_LENGTH, phase) {
                gizmos.line_2d(from, to, color);
            }
            continue;
        }

        gizmos.line_2d(start, end, color);

        if edge.animated {
            let length = start.distance(end);
            if length > f32::EPSILON {
                let t = travelled.rem_euclid(length) / length;
                gizmos.circle_2d(
                    Isometry2d::from_translation(start.lerp(end, t)),
                    PACKET_RADIUS,
                    color,
                );
            }
        }
    }
}

/// Node boxes and edge labels, projected from world space onto the window
pub fn draw_diagram_labels(
    mut contexts: EguiContexts,
    camera: CameraParams,
    current: Res<CurrentStage>,
    panel: Res<FeaturePanelState>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let diagram = current.diagram();

    for edge in &diagram.edges {
        if edge.label.is_empty() {
            continue;
        }
        let Some((start, end)) = diagram.edge_endpoints(edge) else {
            continue;
        };
        let Some(screen) = camera.world_to_screen(start.lerp(end, 0.5)) else {
            continue;
        };

        egui::Area::new(egui::Id::new(("edge_label", edge.source, edge.target)))
            .order(egui::Order::Background)
            .fixed_pos(egui::pos2(screen.x, screen.y))
            .pivot(egui::Align2::CENTER_CENTER)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_white_alpha(230))
                    .corner_radius(4.0)
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(edge.label)
                                .size(11.0)
                                .color(theme::bevy_to_egui(edge.kind.color())),
                        );
                    });
            });
    }

    for node in &diagram.nodes {
        let Some(screen) = camera.world_to_screen(node.position) else {
            continue;
        };
        let selected = panel.selected == Some(node.id);
        node_box(ctx, node, screen, selected);
    }

    Ok(())
}

fn node_box(ctx: &egui::Context, node: &DiagramNode, screen: Vec2, selected: bool) {
    let outline = if selected {
        theme::NODE_SELECTED_OUTLINE
    } else if node.has_features {
        theme::NODE_FEATURE_OUTLINE
    } else {
        theme::NODE_OUTLINE
    };

    egui::Area::new(egui::Id::new(("diagram_node", node.id)))
        .order(egui::Order::Background)
        .fixed_pos(egui::pos2(screen.x, screen.y))
        .pivot(egui::Align2::CENTER_CENTER)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(2.0, theme::bevy_to_egui(outline)))
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(8, 6))
                .show(ui, |ui| {
                    // Frame margins and stroke sit outside the content rect
                    ui.set_width(NODE_WIDTH - 20.0);
                    ui.set_height(NODE_HEIGHT - 16.0);
                    ui.vertical_centered(|ui| {
                        ui.spacing_mut().item_spacing.y = 1.0;
                        ui.label(egui::RichText::new(node.icon).size(18.0));
                        ui.label(
                            egui::RichText::new(node.title)
                                .strong()
                                .size(13.0)
                                .color(theme::ui::NODE_TITLE),
                        );
                        ui.label(
                            egui::RichText::new(node.subtitle)
                                .size(11.0)
                                .color(theme::ui::NODE_SUBTITLE),
                        );
                        if node.has_features {
                            ui.label(
                                egui::RichText::new("Click for details →")
                                    .size(11.0)
                                    .color(theme::ui::NODE_FEATURE_HINT),
                            );
                        }
                    });
                });
        });
}
