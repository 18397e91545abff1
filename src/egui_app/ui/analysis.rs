//! MRI upload form and the rendered analysis breakdown.

use eframe::egui::{self, Button, Frame, Margin, RichText, Sense};

use crate::egui_app::view_model::PredictionView;

use super::{PortalApp, labeled_text_field, style};

const BAR_HEIGHT: f32 = 8.0;

impl PortalApp {
    /// Upload form plus the result panel once an analysis has run.
    pub(super) fn render_analysis_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(egui::Stroke::new(1.0, palette.panel_outline))
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("MRI Analysis")
                        .strong()
                        .color(palette.accent),
                );
                ui.add_space(8.0);

                labeled_text_field(
                    ui,
                    "Patient email",
                    &mut self.controller.ui.doctor_dashboard.upload.patient_email,
                    "patient@example.com",
                    false,
                );

                ui.horizontal(|ui| {
                    if ui.button("Choose scan...").clicked() {
                        self.controller.pick_mri_file();
                    }
                    match &self.controller.ui.doctor_dashboard.upload.file {
                        Some(path) => {
                            let name = path
                                .file_name()
                                .map(|name| name.to_string_lossy().into_owned())
                                .unwrap_or_else(|| path.display().to_string());
                            ui.label(name);
                        }
                        None => {
                            ui.label(RichText::new("No file selected").color(palette.text_muted));
                        }
                    }
                });
                ui.add_space(10.0);

                let busy = self.controller.upload_in_flight();
                let label = if busy {
                    "Analyzing..."
                } else {
                    "Upload & Analyze"
                };
                if ui.add_enabled(!busy, Button::new(label)).clicked() {
                    self.controller.submit_mri_upload();
                }

                if let Some(view) = &self.controller.ui.doctor_dashboard.analysis {
                    render_prediction(ui, view);
                }
            });
    }
}

fn render_prediction(ui: &mut egui::Ui, view: &PredictionView) {
    let palette = style::palette();
    ui.add_space(12.0);
    ui.separator();
    ui.add_space(8.0);
    ui.heading("Analysis Result");
    ui.horizontal(|ui| {
        ui.label("Prediction:");
        ui.label(RichText::new(&view.prediction).strong().color(palette.accent));
    });
    ui.horizontal(|ui| {
        ui.label("Confidence:");
        ui.label(RichText::new(&view.confidence_text).strong());
    });
    ui.add_space(8.0);

    for row in &view.rows {
        ui.horizontal(|ui| {
            ui.label(&row.label);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&row.percent_text).strong());
            });
        });
        probability_bar(ui, row.fill, &palette);
        ui.add_space(6.0);
    }

    ui.add_space(8.0);
    ui.label(RichText::new("Suggestions").strong());
    ui.label(&view.suggestions);
}

/// Horizontal track with a fill proportional to the probability.
fn probability_bar(ui: &mut egui::Ui, fill: f32, palette: &style::Palette) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), Sense::hover());
    ui.painter().rect_filled(rect, 4.0, palette.bar_track);
    let fill_rect = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width() * fill, rect.height()),
    );
    ui.painter().rect_filled(fill_rect, 4.0, palette.bar_fill);
}
