//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;

// ============================================================================
// Annotation Colors
// ============================================================================

/// Red (#ef4444) for fences
pub const FENCE_COLOR: Color = Color::srgb(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0);

/// Green (#22c55e) for paths
pub const PATH_COLOR: Color = Color::srgb(34.0 / 255.0, 197.0 / 255.0, 94.0 / 255.0);

/// Blue (#3b82f6) for waypoints
pub const WAYPOINT_COLOR: Color = Color::srgb(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0);

// ============================================================================
// Scene Colors
// ============================================================================

/// Dark slate ground plane
pub const GROUND_COLOR: Color = Color::srgba(0.118, 0.161, 0.231, 0.8);

/// Grid lines drawn just above the ground
pub const GRID_COLOR: Color = Color::srgb(0.2, 0.255, 0.333);

/// Window clear color
pub const BACKGROUND_COLOR: Color = Color::srgb(0.106, 0.118, 0.137);

/// Static props scattered on the map
pub const PROP_COLORS: [Color; 5] = [
    Color::srgb(0.906, 0.298, 0.235),
    Color::srgb(0.204, 0.596, 0.859),
    Color::srgb(0.953, 0.612, 0.071),
    Color::srgb(0.608, 0.349, 0.714),
    Color::srgb(0.584, 0.647, 0.651),
];

// ============================================================================
// Agent Colors
// ============================================================================

/// Orange agent body
pub const AGENT_BODY: Color = Color::srgb(0.902, 0.494, 0.133);

/// Lighter orange agent head
pub const AGENT_HEAD: Color = Color::srgb(0.953, 0.612, 0.071);

/// Translucent blue ring marking the click-to-move target
pub const SEEK_TARGET: Color = Color::srgba(0.204, 0.596, 0.859, 0.6);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy::prelude::Color;
    use bevy_egui::egui;

    /// Green while a drawing session is active
    pub const DRAWING_ACTIVE: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Toast accents by severity
    pub const TOAST_SUCCESS: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
    pub const TOAST_INFO: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
    pub const TOAST_WARNING: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);

    /// Convert a Bevy color into an opaque egui color
    pub fn to_egui(color: Color) -> egui::Color32 {
        let srgba = color.to_srgba();
        egui::Color32::from_rgb(
            (srgba.red * 255.0) as u8,
            (srgba.green * 255.0) as u8,
            (srgba.blue * 255.0) as u8,
        )
    }
}
