//! Landing screen: hero, feature cards, and section links.

use std::time::Instant;

use eframe::egui::{self, Align, Frame, Margin, RichText};

use crate::egui_app::state::HomeSection;

use super::{PortalApp, style};

const FEATURE_CARDS: &[(&str, &str)] = &[
    (
        "AI MRI Analysis",
        "Upload a brain MRI and get a staged dementia assessment with per-class confidence in seconds.",
    ),
    (
        "Role-Based Portals",
        "Separate dashboards for doctors and patients, each showing only what that role needs.",
    ),
    (
        "Scan History",
        "Every analyzed scan is stored with its prediction and confidence for later follow-up.",
    ),
    (
        "Care Suggestions",
        "Each result comes with concrete follow-up guidance for the care team.",
    ),
];

/// Delay between consecutive card entrances.
const CARD_STAGGER_SECS: f32 = 0.1;
/// Duration of one card's fade/translate-in.
const CARD_FADE_SECS: f32 = 0.6;

impl PortalApp {
    pub(super) fn render_home(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        let entered = *self.controller.ui.home.entered_at.get_or_insert(now);
        let elapsed = now.duration_since(entered).as_secs_f32();
        let palette = style::palette();

        egui::ScrollArea::vertical()
            .id_salt("home_scroll")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for (label, section) in [
                        ("Overview", HomeSection::Overview),
                        ("Features", HomeSection::Features),
                        ("Get started", HomeSection::GetStarted),
                    ] {
                        if ui.link(label).clicked() {
                            self.controller.ui.home.scroll_target = Some(section);
                        }
                    }
                });
                ui.add_space(16.0);

                self.section_heading(ui, HomeSection::Overview, "Alzheimer screening, assisted");
                ui.label(
                    "NeuroScan connects doctors and patients around server-side MRI \
                     classification. Doctors upload scans and review staged results; \
                     patients follow their own history.",
                );
                ui.add_space(24.0);

                self.section_heading(ui, HomeSection::Features, "What the portal does");
                ui.add_space(8.0);
                let mut animating = false;
                for (index, (title, blurb)) in FEATURE_CARDS.iter().enumerate() {
                    let start = index as f32 * CARD_STAGGER_SECS;
                    let t = ((elapsed - start) / CARD_FADE_SECS).clamp(0.0, 1.0);
                    if t < 1.0 {
                        animating = true;
                    }
                    ui.scope(|ui| {
                        ui.set_opacity(t);
                        // Cards slide up as they fade in.
                        ui.add_space((1.0 - t) * 20.0);
                        Frame::new()
                            .fill(palette.bg_secondary)
                            .stroke(egui::Stroke::new(1.0, palette.panel_outline))
                            .inner_margin(Margin::same(12))
                            .show(ui, |ui| {
                                ui.label(RichText::new(*title).strong().color(palette.accent));
                                ui.label(RichText::new(*blurb).color(palette.text_muted));
                            });
                    });
                    ui.add_space(10.0);
                }
                if animating {
                    ui.ctx().request_repaint();
                }
                ui.add_space(24.0);

                self.section_heading(ui, HomeSection::GetStarted, "Get started");
                ui.horizontal(|ui| {
                    if ui.button("Create an account").clicked() {
                        self.controller
                            .navigate(crate::egui_app::state::Screen::Register);
                    }
                    if ui.button("Sign in").clicked() {
                        self.controller
                            .navigate(crate::egui_app::state::Screen::Login);
                    }
                });
                ui.add_space(32.0);
            });
    }

    /// Heading that doubles as an anchor target for the section links.
    fn section_heading(&mut self, ui: &mut egui::Ui, section: HomeSection, text: &str) {
        let response = ui.heading(text);
        if self.controller.ui.home.scroll_target == Some(section) {
            // egui animates the scroll, giving the smooth jump the links ask for.
            response.scroll_to_me(Some(Align::TOP));
            self.controller.ui.home.scroll_target = None;
        }
    }
}
