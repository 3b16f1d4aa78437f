//! Shared colors and visual tweaks for the renderer.

use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::StatusTone;

/// Color set shared across the renderer.
#[derive(Clone, Copy)]
pub struct Palette {
    /// Darkest background, used for chrome panels.
    pub bg_primary: Color32,
    /// Default panel background.
    pub bg_secondary: Color32,
    /// Raised surfaces such as the detail panel.
    pub bg_tertiary: Color32,
    /// Panel and widget outlines.
    pub panel_outline: Color32,
    /// Default text color.
    pub text_primary: Color32,
    /// De-emphasized text color.
    pub text_muted: Color32,
    /// Emphasis for ham-leaning predictions and ham actions.
    pub accent_ham: Color32,
    /// Emphasis for spam actions.
    pub accent_spam: Color32,
    /// Informational status badge.
    pub badge_info: Color32,
    /// Idle status badge.
    pub badge_idle: Color32,
}

/// The application palette.
pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 16, 20),
        bg_secondary: Color32::from_rgb(24, 27, 33),
        bg_tertiary: Color32::from_rgb(36, 40, 48),
        panel_outline: Color32::from_rgb(48, 54, 63),
        text_primary: Color32::from_rgb(198, 204, 213),
        text_muted: Color32::from_rgb(136, 143, 153),
        accent_ham: Color32::from_rgb(120, 178, 255),
        accent_spam: Color32::from_rgb(226, 140, 120),
        badge_info: Color32::from_rgb(102, 176, 136),
        badge_idle: Color32::from_rgb(90, 96, 105),
    }
}

/// Badge color for a status tone.
pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.badge_idle,
        StatusTone::Info => palette.badge_info,
    }
}

/// Apply the palette to egui's dark visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_secondary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_tertiary;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ham);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.window_stroke = Stroke::new(1.0, palette.panel_outline);
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Thin outline used around the status badge.
pub fn badge_border() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}
