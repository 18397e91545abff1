//! Drains finished background jobs into state updates.

use std::sync::mpsc::TryRecvError;

use super::PortalController;
use super::jobs::JobMessage;

impl PortalController {
    pub(super) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };

            match message {
                JobMessage::RegisterFinished { role, result } => {
                    self.finish_registration(role, result);
                }
                JobMessage::LoginFinished { role, result } => {
                    self.finish_login(role, result);
                }
                JobMessage::PredictFinished(result) => self.finish_predict(result),
                JobMessage::DoctorDashboardLoaded(result) => self.finish_doctor_dashboard(result),
                JobMessage::PatientDashboardLoaded(result) => self.finish_patient_dashboard(result),
                JobMessage::LogoutFinished(result) => self.finish_logout(result),
            }
        }
    }
}
