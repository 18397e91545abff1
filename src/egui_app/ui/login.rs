//! Login screen with one form per role.

use eframe::egui::{self, Button, Frame, Margin, RichText};

use crate::forms::Role;

use super::{PortalApp, labeled_text_field, style};

impl PortalApp {
    pub(super) fn render_login(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading("Welcome back");
        });
        ui.add_space(16.0);
        ui.columns(2, |columns| {
            self.render_login_form(&mut columns[0], Role::Doctor);
            self.render_login_form(&mut columns[1], Role::Patient);
        });
    }

    fn render_login_form(&mut self, ui: &mut egui::Ui, role: Role) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(egui::Stroke::new(1.0, palette.panel_outline))
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("{} Login", role.label()))
                        .strong()
                        .color(palette.accent),
                );
                ui.add_space(8.0);

                {
                    let login = &mut self.controller.ui.login;
                    let (email, password) = match role {
                        Role::Doctor => (&mut login.doctor_email, &mut login.doctor_password),
                        Role::Patient => (&mut login.patient_email, &mut login.patient_password),
                    };
                    labeled_text_field(ui, "Email", email, "you@example.com", false);
                    labeled_text_field(ui, "Password", password, "", true);
                }

                ui.add_space(8.0);
                let busy = self.controller.login_in_flight();
                let label = if busy { "Signing in..." } else { "Sign in" };
                if ui.add_enabled(!busy, Button::new(label)).clicked() {
                    self.controller.submit_login(role);
                }
            });
    }
}
