//! Fixed-corner banner for the single notice slot.

use eframe::egui::{self, Align2, Color32, Frame, Margin, RichText, epaint::CornerRadius};

use super::{PortalApp, style};

impl PortalApp {
    /// Draw the visible notice, if any, pinned to the top-right corner.
    pub(super) fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.controller.ui.notice.current() else {
            return;
        };
        let fill = style::severity_color(notice.severity);
        egui::Area::new(egui::Id::new("notice_banner"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(fill)
                    .corner_radius(CornerRadius::same(5))
                    .inner_margin(Margin::symmetric(25, 15))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&notice.message)
                                .color(Color32::WHITE)
                                .strong(),
                        );
                    });
            });
    }
}
