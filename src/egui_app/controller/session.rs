//! Dashboard loading and logout.

use crate::egui_app::state::{
    DoctorDashboardState, PatientDashboardState, Screen, Severity,
};
use crate::portal_api::{AckResponse, ApiError, DoctorDashboardResponse, PatientDashboardResponse};

use super::PortalController;

impl PortalController {
    /// Log out on the backend and return to the login screen.
    pub fn submit_logout(&mut self) {
        if self.jobs.logout_in_progress() {
            return;
        }
        tracing::debug!("logging out");
        self.jobs.begin_logout(self.config.clone());
    }

    pub(super) fn begin_doctor_dashboard_fetch(&mut self) {
        self.ui.doctor_dashboard.loading = true;
        self.jobs.begin_doctor_dashboard(self.config.clone());
    }

    pub(super) fn begin_patient_dashboard_fetch(&mut self) {
        self.ui.patient_dashboard.loading = true;
        self.jobs.begin_patient_dashboard(self.config.clone());
    }

    pub(super) fn finish_doctor_dashboard(
        &mut self,
        result: Result<DoctorDashboardResponse, ApiError>,
    ) {
        self.jobs.clear_dashboard();
        self.ui.doctor_dashboard.loading = false;
        match result {
            Ok(response) if response.success => {
                self.ui.doctor_dashboard.profile = response.doctor;
                self.ui.doctor_dashboard.scans = response.scans;
            }
            Ok(response) => {
                // Typically an expired session; the message says so.
                self.notify(response.message, Severity::Error);
                self.navigate(Screen::Login);
            }
            Err(err) => self.notify(format!("Error: {err}"), Severity::Error),
        }
    }

    pub(super) fn finish_patient_dashboard(
        &mut self,
        result: Result<PatientDashboardResponse, ApiError>,
    ) {
        self.jobs.clear_dashboard();
        self.ui.patient_dashboard.loading = false;
        match result {
            Ok(response) if response.success => {
                self.ui.patient_dashboard.profile = response.patient;
                self.ui.patient_dashboard.scans = response.scans;
            }
            Ok(response) => {
                self.notify(response.message, Severity::Error);
                self.navigate(Screen::Login);
            }
            Err(err) => self.notify(format!("Error: {err}"), Severity::Error),
        }
    }

    pub(super) fn finish_logout(&mut self, result: Result<AckResponse, ApiError>) {
        self.jobs.clear_logout();
        match result {
            Ok(ack) if ack.success => {
                self.notify(ack.message, Severity::Success);
                self.ui.doctor_dashboard = DoctorDashboardState::default();
                self.ui.patient_dashboard = PatientDashboardState::default();
                self.navigate(Screen::Login);
            }
            Ok(ack) => self.notify(ack.message, Severity::Error),
            Err(err) => self.notify(format!("Error: {err}"), Severity::Error),
        }
    }
}
