//! Combined registration screen with the role toggle.

use eframe::egui::{self, Button, RichText};

use crate::forms::Role;

use super::{PortalApp, labeled_text_field, style};

const FORM_WIDTH: f32 = 440.0;

impl PortalApp {
    pub(super) fn render_register(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        egui::ScrollArea::vertical()
            .id_salt("register_scroll")
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_WIDTH);
                    ui.add_space(12.0);
                    ui.heading("Create your account");
                    ui.add_space(8.0);

                    // The toggle swaps the role-specific group; shared fields
                    // keep their values across the switch.
                    ui.horizontal(|ui| {
                        ui.label("I am a:");
                        ui.radio_value(
                            &mut self.controller.ui.register.role,
                            Role::Doctor,
                            "Doctor",
                        );
                        ui.radio_value(
                            &mut self.controller.ui.register.role,
                            Role::Patient,
                            "Patient",
                        );
                    });
                    ui.add_space(10.0);

                    labeled_text_field(
                        ui,
                        "Full name",
                        &mut self.controller.ui.register.fullname,
                        "Jane Doe",
                        false,
                    );
                    labeled_text_field(
                        ui,
                        "Email",
                        &mut self.controller.ui.register.email,
                        "you@example.com",
                        false,
                    );
                    labeled_text_field(
                        ui,
                        "Password",
                        &mut self.controller.ui.register.password,
                        "At least 8 characters",
                        true,
                    );
                    labeled_text_field(
                        ui,
                        "Confirm password",
                        &mut self.controller.ui.register.confirm_password,
                        "",
                        true,
                    );
                    labeled_text_field(
                        ui,
                        "Phone",
                        &mut self.controller.ui.register.phone,
                        "(123) 456-7890",
                        false,
                    );

                    match self.controller.ui.register.role {
                        Role::Doctor => self.render_doctor_fields(ui),
                        Role::Patient => self.render_patient_fields(ui),
                    }

                    ui.add_space(12.0);
                    let busy = self.controller.registration_in_flight();
                    let label = if busy { "Registering..." } else { "Register" };
                    if ui
                        .add_enabled(!busy, Button::new(RichText::new(label).strong()))
                        .clicked()
                    {
                        self.controller.submit_registration();
                    }
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("Already have an account? Use the Login tab above.")
                            .color(palette.text_muted),
                    );
                });
            });
    }

    fn render_doctor_fields(&mut self, ui: &mut egui::Ui) {
        labeled_text_field(
            ui,
            "Medical license number",
            &mut self.controller.ui.register.license,
            "",
            false,
        );
        labeled_text_field(
            ui,
            "Specialization",
            &mut self.controller.ui.register.specialization,
            "Neurology",
            false,
        );
        labeled_text_field(
            ui,
            "Hospital / clinic",
            &mut self.controller.ui.register.hospital,
            "",
            false,
        );
    }

    fn render_patient_fields(&mut self, ui: &mut egui::Ui) {
        labeled_text_field(ui, "Age", &mut self.controller.ui.register.age, "", false);

        ui.label("Gender");
        let selected = if self.controller.ui.register.gender.is_empty() {
            "Select gender".to_string()
        } else {
            self.controller.ui.register.gender.clone()
        };
        egui::ComboBox::from_id_salt("register_gender")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for option in ["Male", "Female", "Other"] {
                    ui.selectable_value(
                        &mut self.controller.ui.register.gender,
                        option.to_string(),
                        option,
                    );
                }
            });
        ui.add_space(6.0);

        ui.label("Medical history (optional)");
        let response = ui.add(
            egui::TextEdit::multiline(&mut self.controller.ui.register.medical_history)
                .hint_text("Prior conditions, medications, ...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        style::paint_focus_transition(ui, &response);
        ui.add_space(6.0);
    }
}
