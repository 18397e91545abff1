//! Submission handlers for the registration and login screens.

use crate::egui_app::state::{Screen, Severity};
use crate::forms::Role;
use crate::portal_api::{AckResponse, ApiError};

use super::PortalController;

impl PortalController {
    /// Submit the registration form for the currently selected role.
    ///
    /// Validation runs in the form's fixed order; the first failure is
    /// shown and nothing is sent. A submission while the previous one is
    /// outstanding is dropped before validation.
    pub fn submit_registration(&mut self) {
        if self.jobs.register_in_progress() {
            return;
        }
        match self.ui.register.role {
            Role::Doctor => self.submit_doctor_registration(),
            Role::Patient => self.submit_patient_registration(),
        }
    }

    /// Submit one of the login forms.
    pub fn submit_login(&mut self, role: Role) {
        if self.jobs.login_in_progress() {
            return;
        }
        let request = match self.ui.login.snapshot(role).validate() {
            Ok(request) => request,
            Err(err) => {
                self.notify(err.message, Severity::Error);
                return;
            }
        };
        tracing::debug!(email = %request.email, role = role.label(), "submitting login");
        self.jobs.begin_login(self.config.clone(), role, request);
    }

    /// True while a registration request is outstanding.
    pub fn registration_in_flight(&self) -> bool {
        self.jobs.register_in_progress()
    }

    /// True while a login request is outstanding.
    pub fn login_in_flight(&self) -> bool {
        self.jobs.login_in_progress()
    }

    fn submit_doctor_registration(&mut self) {
        let request = match self.ui.register.doctor_snapshot().validate() {
            Ok(request) => request,
            Err(err) => {
                self.notify(err.message, Severity::Error);
                return;
            }
        };
        tracing::debug!(email = %request.email, "submitting doctor registration");
        self.jobs.begin_doctor_register(self.config.clone(), request);
    }

    fn submit_patient_registration(&mut self) {
        let request = match self.ui.register.patient_snapshot().validate() {
            Ok(request) => request,
            Err(err) => {
                self.notify(err.message, Severity::Error);
                return;
            }
        };
        tracing::debug!(email = %request.email, "submitting patient registration");
        self.jobs.begin_patient_register(self.config.clone(), request);
    }

    pub(super) fn finish_registration(&mut self, role: Role, result: Result<AckResponse, ApiError>) {
        self.jobs.clear_register();
        match result {
            Ok(ack) if ack.success => {
                let message = match role {
                    Role::Doctor => "Doctor registered! Redirecting to login...",
                    Role::Patient => "Patient registered! Redirecting to login...",
                };
                self.notify(message, Severity::Success);
                self.schedule_redirect(Screen::Login);
            }
            Ok(ack) => self.notify(ack.message, Severity::Error),
            Err(err) => self.notify(format!("Error: {err}"), Severity::Error),
        }
    }

    pub(super) fn finish_login(&mut self, role: Role, result: Result<AckResponse, ApiError>) {
        self.jobs.clear_login();
        match result {
            Ok(ack) if ack.success => {
                self.notify("Login successful! Redirecting...", Severity::Success);
                let target = match role {
                    Role::Doctor => Screen::DoctorDashboard,
                    Role::Patient => Screen::PatientDashboard,
                };
                self.schedule_redirect(target);
            }
            Ok(ack) => self.notify(ack.message, Severity::Error),
            Err(err) => self.notify(format!("Error: {err}"), Severity::Error),
        }
    }
}
