//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the presenter UI and rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Scene Colors
// ============================================================================

/// Light indigo backdrop behind the diagram
pub const BACKGROUND: Color = Color::srgb(0.933, 0.949, 1.0);

/// Outline of a regular diagram node
pub const NODE_OUTLINE: Color = Color::srgb(0.82, 0.835, 0.86);

/// Outline of a node that opens a detail panel when clicked
pub const NODE_FEATURE_OUTLINE: Color = Color::srgb(0.231, 0.51, 0.965);

/// Outline of the node whose feature panel is currently open
pub const NODE_SELECTED_OUTLINE: Color = Color::srgb(0.145, 0.388, 0.922);

// ============================================================================
// Edge Colors
// ============================================================================

/// Blue, dashed: DNS resolution traffic
pub const EDGE_DNS: Color = Color::srgb(0.231, 0.51, 0.965);

/// Red: client talking straight to the origin
pub const EDGE_DIRECT: Color = Color::srgb(0.937, 0.267, 0.267);

/// Green: client to edge proxy
pub const EDGE_PROXY_CLIENT: Color = Color::srgb(0.063, 0.725, 0.506);

/// Purple: edge proxy to origin
pub const EDGE_PROXY_ORIGIN: Color = Color::srgb(0.545, 0.361, 0.965);

// ============================================================================
// Annotation Colors
// ============================================================================

/// Default annotation stroke color (#ef4444)
pub const ANNOTATION_DEFAULT: Color = Color::srgb(0.937_255, 0.266_667, 0.266_667);

/// Annotation color palette for the toolbar swatches
pub const ANNOTATION_PALETTE: [(egui::Color32, &str); 6] = [
    (egui::Color32::from_rgb(0xef, 0x44, 0x44), "Red"),
    (egui::Color32::from_rgb(0x3b, 0x82, 0xf6), "Blue"),
    (egui::Color32::from_rgb(0x10, 0xb9, 0x81), "Green"),
    (egui::Color32::from_rgb(0xf5, 0x9e, 0x0b), "Amber"),
    (egui::Color32::from_rgb(0x00, 0x00, 0x00), "Black"),
    (egui::Color32::from_rgb(0xff, 0xff, 0xff), "White"),
];

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark grey panel background (toolbars)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// White for selected button borders
    pub const SELECTED_BORDER: egui::Color32 = egui::Color32::WHITE;

    /// Dark grey for unselected button borders
    pub const UNSELECTED_BORDER: egui::Color32 = egui::Color32::DARK_GRAY;

    /// Blue border around the text entry box
    pub const TEXT_INPUT_BORDER: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

    /// Node title and subtitle text
    pub const NODE_TITLE: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
    pub const NODE_SUBTITLE: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);

    /// "Click for details" hint on feature nodes
    pub const NODE_FEATURE_HINT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

    /// Marks in the risk and benefit lists
    pub const RISK_MARK: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
    pub const BENEFIT_MARK: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);

    /// Timeline step that is not the current stage
    pub const TIMELINE_INACTIVE: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);

    /// Curtain gradient stops (dark blue into purple)
    pub const CURTAIN_DARK: egui::Color32 = egui::Color32::from_rgb(30, 58, 138);
    pub const CURTAIN_LIGHT: egui::Color32 = egui::Color32::from_rgb(88, 28, 135);

    /// Pale text on the curtain
    pub const CURTAIN_TEXT: egui::Color32 = egui::Color32::from_rgb(191, 219, 254);

    /// Amber for warnings
    pub const WARNING_TEXT: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (preserving alpha)
pub fn bevy_to_egui(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        channel_to_u8(srgba.red),
        channel_to_u8(srgba.green),
        channel_to_u8(srgba.blue),
        channel_to_u8(srgba.alpha),
    )
}

/// Convert an egui Color32 to Bevy Color
pub fn egui_to_bevy(color: egui::Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::srgba_u8(r, g, b, a)
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
    Some(Color::srgba_u8(channel(0)?, channel(2)?, channel(4)?, alpha))
}

/// Format as lowercase `#rrggbb`, ignoring alpha
pub fn color_to_hex(color: Color) -> String {
    let [r, g, b, _] = bevy_to_egui(color).to_srgba_unmultiplied();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
