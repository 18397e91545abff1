//! egui renderer for the portal screens.

use std::time::{Duration, Instant};

use eframe::egui::{self, Frame, Margin, RichText};

use crate::config::PortalConfig;
use crate::egui_app::controller::PortalController;
use crate::egui_app::state::Screen;

mod analysis;
mod dashboards;
mod home;
mod login;
mod notice;
mod register;
mod style;

/// Smallest window the layout still works at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 560.0);

/// Renders the portal screens using the shared controller state.
pub struct PortalApp {
    controller: PortalController,
    visuals_set: bool,
}

impl PortalApp {
    /// Create the app over a controller talking to the configured backend.
    pub fn new(config: PortalConfig) -> Self {
        Self {
            controller: PortalController::new(config),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("NeuroScan")
                            .strong()
                            .size(18.0)
                            .color(palette.accent),
                    );
                    ui.separator();
                    let current = self.controller.ui.route.current;
                    match current {
                        Screen::Home | Screen::Register | Screen::Login => {
                            for (label, target) in [
                                ("Home", Screen::Home),
                                ("Register", Screen::Register),
                                ("Login", Screen::Login),
                            ] {
                                let selected = current == target;
                                if ui.selectable_label(selected, label).clicked() && !selected {
                                    self.controller.navigate(target);
                                }
                            }
                        }
                        Screen::DoctorDashboard | Screen::PatientDashboard => {
                            if ui.button("Log out").clicked() {
                                self.controller.submit_logout();
                            }
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_current_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.controller.ui.route.current {
                Screen::Home => self.render_home(ui),
                Screen::Register => self.render_register(ui),
                Screen::Login => self.render_login(ui),
                Screen::DoctorDashboard => self.render_doctor_dashboard(ui),
                Screen::PatientDashboard => self.render_patient_dashboard(ui),
            }
        });
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick(Instant::now());
        self.render_top_bar(ctx);
        self.render_current_screen(ctx);
        self.render_notice(ctx);
        // Notice expiry and delayed redirects are deadline-driven; keep
        // frames flowing while any deadline or request is outstanding.
        if self.controller.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/// Label, single-line edit, and an animated focus underline.
fn labeled_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
) -> egui::Response {
    ui.label(label);
    let edit = egui::TextEdit::singleline(value)
        .hint_text(hint)
        .password(password)
        .desired_width(f32::INFINITY);
    let response = ui.add(edit);
    style::paint_focus_transition(ui, &response);
    ui.add_space(6.0);
    response
}
