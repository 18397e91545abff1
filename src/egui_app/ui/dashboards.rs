//! Doctor and patient dashboards.

use eframe::egui::{self, Frame, Margin, RichText};

use crate::portal_api::ScanRecord;

use super::{PortalApp, style};

impl PortalApp {
    pub(super) fn render_doctor_dashboard(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        egui::ScrollArea::vertical()
            .id_salt("doctor_dashboard_scroll")
            .show(ui, |ui| {
                if self.controller.ui.doctor_dashboard.loading {
                    loading_row(ui);
                }
                if let Some(profile) = &self.controller.ui.doctor_dashboard.profile {
                    ui.heading(format!("Dr. {}", profile.fullname));
                    ui.label(
                        RichText::new(format!(
                            "{} — {}",
                            profile.specialization, profile.hospital
                        ))
                        .color(palette.text_muted),
                    );
                    ui.add_space(12.0);
                }

                self.render_analysis_panel(ui);
                ui.add_space(16.0);

                ui.label(RichText::new("Analyzed scans").strong().color(palette.accent));
                ui.add_space(4.0);
                scan_table(ui, "doctor_scans", &self.controller.ui.doctor_dashboard.scans);
            });
    }

    pub(super) fn render_patient_dashboard(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        egui::ScrollArea::vertical()
            .id_salt("patient_dashboard_scroll")
            .show(ui, |ui| {
                if self.controller.ui.patient_dashboard.loading {
                    loading_row(ui);
                }
                if let Some(profile) = &self.controller.ui.patient_dashboard.profile {
                    ui.heading(&profile.fullname);
                    Frame::new()
                        .fill(palette.bg_secondary)
                        .inner_margin(Margin::same(12))
                        .show(ui, |ui| {
                            egui::Grid::new("patient_profile")
                                .num_columns(2)
                                .spacing([24.0, 4.0])
                                .show(ui, |ui| {
                                    ui.label(RichText::new("Email").color(palette.text_muted));
                                    ui.label(&profile.email);
                                    ui.end_row();
                                    ui.label(RichText::new("Age").color(palette.text_muted));
                                    ui.label(profile.age.to_string());
                                    ui.end_row();
                                    ui.label(RichText::new("Gender").color(palette.text_muted));
                                    ui.label(&profile.gender);
                                    ui.end_row();
                                    ui.label(
                                        RichText::new("Registered").color(palette.text_muted),
                                    );
                                    ui.label(&profile.created_at);
                                    ui.end_row();
                                });
                        });
                    ui.add_space(16.0);
                }

                ui.label(RichText::new("Your scans").strong().color(palette.accent));
                ui.add_space(4.0);
                scan_table(ui, "patient_scans", &self.controller.ui.patient_dashboard.scans);
            });
    }
}

fn loading_row(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.add(egui::Spinner::new().size(16.0));
        ui.label("Loading dashboard...");
    });
    ui.add_space(8.0);
}

fn scan_table(ui: &mut egui::Ui, id: &str, scans: &[ScanRecord]) {
    let palette = style::palette();
    if scans.is_empty() {
        ui.label(RichText::new("No scans yet.").color(palette.text_muted));
        return;
    }
    egui::Grid::new(id)
        .num_columns(4)
        .striped(true)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for header in ["File", "Prediction", "Confidence", "Date"] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();
            for scan in scans {
                ui.label(&scan.filename);
                ui.label(&scan.prediction);
                ui.label(format!("{:.2}%", scan.confidence));
                ui.label(&scan.created_at);
                ui.end_row();
            }
        });
}
