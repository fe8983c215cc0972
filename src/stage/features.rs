//! Feature panel for diagram nodes that carry extra detail.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::overlay::{OverlayPhase, OverlayState};
use crate::params::{is_cursor_over_ui, CameraParams};

use super::diagram::NodeId;
use super::CurrentStage;

pub struct FeatureSection {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const PROXY_FEATURES_TITLE: &str = "Cloudflare Features";

pub const PROXY_FEATURES: [FeatureSection; 3] = [
    FeatureSection {
        icon: "🔒",
        title: "SSL/TLS Termination",
        items: &[
            "TLS 1.2/1.3 at edge",
            "SSL certificate management",
            "Origin Certificate Support",
            "40% origin CPU reduction",
        ],
    },
    FeatureSection {
        icon: "🚫",
        title: "WAF Protection",
        items: &[
            "OWASP Ruleset (179+ rules)",
            "Managed Rules (420+ rules)",
            "Custom rule capability",
            "Log-only safe deployment",
        ],
    },
    FeatureSection {
        icon: "⚡",
        title: "Performance & Security",
        items: &["DDoS protection", "Global CDN caching", "HTTP/2 & HTTP/3"],
    },
];

/// Which node's feature panel is showing, if any
#[derive(Resource, Default, Debug)]
pub struct FeaturePanelState {
    pub selected: Option<NodeId>,
}

impl FeaturePanelState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

/// Open the feature panel when a node with features is clicked while
/// drawing is off.
pub fn handle_node_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    current: Res<CurrentStage>,
    overlay: Res<OverlayState>,
    mut panel: ResMut<FeaturePanelState>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if overlay.phase() != OverlayPhase::Idle || is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    let Some(node) = current.diagram().node_at(world_pos) else {
        return;
    };

    if node.has_features {
        debug!("Opened feature panel for {:?}", node.id);
        panel.selected = Some(node.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_closed() {
        let panel = FeaturePanelState::default();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_close_clears_selection() {
        let mut panel = FeaturePanelState {
            selected: Some(NodeId::CloudflareProxy),
        };
        assert!(panel.is_open());
        panel.close();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_every_section_lists_features() {
        for section in &PROXY_FEATURES {
            assert!(!section.items.is_empty(), "{}", section.title);
        }
    }
}
