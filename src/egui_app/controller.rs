//! Maintains app state and bridges portal calls to the egui UI.
//!
//! Every submission handler validates synchronously, surfaces the first
//! failure through the notice slot, and otherwise starts exactly one
//! background request. Results come back through the job channel and are
//! applied by [`PortalController::tick`], which the renderer calls once per
//! frame.

use std::time::Instant;

use crate::config::PortalConfig;
use crate::egui_app::state::{Screen, Severity, UiState};

mod background_jobs;
mod forms;
mod jobs;
mod navigation;
mod session;
mod upload;

#[cfg(test)]
mod submission_tests;

use jobs::ControllerJobs;

/// Owns the UI state and dispatches portal requests from UI events.
pub struct PortalController {
    /// Screen state rendered by the UI layer.
    pub ui: UiState,
    config: PortalConfig,
    jobs: ControllerJobs,
}

impl PortalController {
    /// Create a controller talking to the configured backend.
    pub fn new(config: PortalConfig) -> Self {
        Self {
            ui: UiState::default(),
            config,
            jobs: ControllerJobs::new(),
        }
    }

    /// Per-frame housekeeping: finished jobs, notice expiry, due redirects.
    pub fn tick(&mut self, now: Instant) {
        self.poll_background_jobs();
        self.ui.notice.tick(now);
        if let Some(target) = self.ui.route.take_due(now) {
            self.arrive(target);
        }
    }

    /// Navigate immediately, e.g. from a header action.
    pub fn navigate(&mut self, target: Screen) {
        self.arrive(target);
    }

    /// True while a timer or request still needs frames to keep flowing.
    pub fn has_pending_work(&self) -> bool {
        self.ui.notice.current().is_some()
            || self.ui.route.pending.is_some()
            || self.jobs.any_in_progress()
    }

    /// Show a notice, evicting the current one.
    pub(crate) fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        match severity {
            Severity::Error => tracing::warn!("{message}"),
            Severity::Info | Severity::Success => tracing::info!("{message}"),
        }
        self.ui.notice.show(message, severity, Instant::now());
    }

    fn arrive(&mut self, target: Screen) {
        self.ui.route.current = target;
        match target {
            // Restart the entrance animation on each visit.
            Screen::Home => self.ui.home.entered_at = None,
            Screen::DoctorDashboard => self.begin_doctor_dashboard_fetch(),
            Screen::PatientDashboard => self.begin_patient_dashboard_fetch(),
            Screen::Register | Screen::Login => {}
        }
    }
}
