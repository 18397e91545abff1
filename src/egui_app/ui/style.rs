//! Palette and shared widget styling for the portal screens.

use eframe::egui::{
    self, Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::Severity;

/// Named colors used across the screens.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    /// Portal teal used for headings and accents.
    pub accent: Color32,
    /// Unfilled part of a probability bar.
    pub bar_track: Color32,
    /// Filled part of a probability bar.
    pub bar_fill: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 17, 17),
        bg_secondary: Color32::from_rgb(24, 30, 30),
        bg_tertiary: Color32::from_rgb(36, 44, 44),
        panel_outline: Color32::from_rgb(48, 58, 58),
        text_primary: Color32::from_rgb(196, 205, 205),
        text_muted: Color32::from_rgb(138, 150, 150),
        accent: Color32::from_rgb(77, 182, 172),
        bar_track: Color32::from_rgb(52, 60, 60),
        bar_fill: Color32::from_rgb(0, 121, 107),
    }
}

/// Banner color for a notice severity.
///
/// The portal palette: red for errors, green for success, teal otherwise.
pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Error => Color32::from_rgb(211, 47, 47),
        Severity::Success => Color32::from_rgb(56, 142, 60),
        Severity::Info => Color32::from_rgb(0, 77, 64),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    soften(&mut visuals.widgets.inactive, palette);
    soften(&mut visuals.widgets.hovered, palette);
    soften(&mut visuals.widgets.active, palette);
    soften(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
}

fn soften(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Animated accent underline while a field has focus.
///
/// Mirrors the portal's focus transition: the highlight eases in over
/// 0.3 s rather than snapping.
pub fn paint_focus_transition(ui: &egui::Ui, response: &egui::Response) {
    let t = ui.ctx().animate_bool_with_time(
        response.id.with("focus_ring"),
        response.has_focus(),
        0.3,
    );
    if t <= 0.0 {
        return;
    }
    let rect = response.rect;
    let color = palette().accent.gamma_multiply(t);
    ui.painter().line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0 + t, color),
    );
}
