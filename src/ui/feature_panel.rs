use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::stage::{FeaturePanelState, NodeId, PROXY_FEATURES, PROXY_FEATURES_TITLE};

/// Floating card listing the clicked node's features
pub fn feature_panel_ui(mut contexts: EguiContexts, mut panel: ResMut<FeaturePanelState>) -> Result {
    let Some(NodeId::CloudflareProxy) = panel.selected else {
        return Ok(());
    };

    let mut open = true;
    egui::Window::new(PROXY_FEATURES_TITLE)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(260.0)
        .anchor(egui::Align2::LEFT_TOP, [16.0, 110.0])
        .show(contexts.ctx_mut()?, |ui| {
            for section in &PROXY_FEATURES {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("{} {}", section.icon, section.title)).strong());
                for item in section.items {
                    ui.label(format!("• {}", item));
                }
            }
        });

    if !open {
        panel.close();
    }

    Ok(())
}
