//! Background portal requests with per-family in-flight flags.
//!
//! Each `begin_*` refuses to start while its family's flag is set, spawns a
//! worker thread for one blocking request, and reports the outcome through
//! the shared message channel. The matching `clear_*` runs when the result
//! is applied on the UI thread.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::config::PortalConfig;
use crate::forms::Role;
use crate::portal_api::{
    self, AckResponse, ApiError, DoctorDashboardResponse, DoctorRegisterRequest, LoginRequest,
    PatientDashboardResponse, PatientRegisterRequest, PredictionResponse,
};

/// One finished background request.
pub(crate) enum JobMessage {
    RegisterFinished {
        role: Role,
        result: Result<AckResponse, ApiError>,
    },
    LoginFinished {
        role: Role,
        result: Result<AckResponse, ApiError>,
    },
    PredictFinished(Result<PredictionResponse, ApiError>),
    DoctorDashboardLoaded(Result<DoctorDashboardResponse, ApiError>),
    PatientDashboardLoaded(Result<PatientDashboardResponse, ApiError>),
    LogoutFinished(Result<AckResponse, ApiError>),
}

/// Owns the job channel and one in-flight flag per request family.
pub(super) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    register_in_progress: bool,
    login_in_progress: bool,
    predict_in_progress: bool,
    dashboard_in_progress: bool,
    logout_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            register_in_progress: false,
            login_in_progress: false,
            predict_in_progress: false,
            dashboard_in_progress: false,
            logout_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn register_in_progress(&self) -> bool {
        self.register_in_progress
    }

    pub(super) fn login_in_progress(&self) -> bool {
        self.login_in_progress
    }

    pub(super) fn predict_in_progress(&self) -> bool {
        self.predict_in_progress
    }

    pub(super) fn logout_in_progress(&self) -> bool {
        self.logout_in_progress
    }

    pub(super) fn any_in_progress(&self) -> bool {
        self.register_in_progress
            || self.login_in_progress
            || self.predict_in_progress
            || self.dashboard_in_progress
            || self.logout_in_progress
    }

    pub(super) fn begin_doctor_register(
        &mut self,
        config: PortalConfig,
        request: DoctorRegisterRequest,
    ) {
        if self.register_in_progress {
            return;
        }
        self.register_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = portal_api::register_doctor(&config, &request);
            let _ = tx.send(JobMessage::RegisterFinished {
                role: Role::Doctor,
                result,
            });
        });
    }

    pub(super) fn begin_patient_register(
        &mut self,
        config: PortalConfig,
        request: PatientRegisterRequest,
    ) {
        if self.register_in_progress {
            return;
        }
        self.register_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = portal_api::register_patient(&config, &request);
            let _ = tx.send(JobMessage::RegisterFinished {
                role: Role::Patient,
                result,
            });
        });
    }

    pub(super) fn clear_register(&mut self) {
        self.register_in_progress = false;
    }

    pub(super) fn begin_login(&mut self, config: PortalConfig, role: Role, request: LoginRequest) {
        if self.login_in_progress {
            return;
        }
        self.login_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = match role {
                Role::Doctor => portal_api::login_doctor(&config, &request),
                Role::Patient => portal_api::login_patient(&config, &request),
            };
            let _ = tx.send(JobMessage::LoginFinished { role, result });
        });
    }

    pub(super) fn clear_login(&mut self) {
        self.login_in_progress = false;
    }

    pub(super) fn begin_predict(
        &mut self,
        config: PortalConfig,
        patient_email: String,
        file_path: PathBuf,
    ) {
        if self.predict_in_progress {
            return;
        }
        self.predict_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = portal_api::predict_mri(&config, &patient_email, &file_path);
            let _ = tx.send(JobMessage::PredictFinished(result));
        });
    }

    pub(super) fn clear_predict(&mut self) {
        self.predict_in_progress = false;
    }

    pub(super) fn begin_doctor_dashboard(&mut self, config: PortalConfig) {
        if self.dashboard_in_progress {
            return;
        }
        self.dashboard_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = portal_api::fetch_doctor_dashboard(&config);
            let _ = tx.send(JobMessage::DoctorDashboardLoaded(result));
        });
    }

    pub(super) fn begin_patient_dashboard(&mut self, config: PortalConfig) {
        if self.dashboard_in_progress {
            return;
        }
        self.dashboard_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = portal_api::fetch_patient_dashboard(&config);
            let _ = tx.send(JobMessage::PatientDashboardLoaded(result));
        });
    }

    pub(super) fn clear_dashboard(&mut self) {
        self.dashboard_in_progress = false;
    }

    pub(super) fn begin_logout(&mut self, config: PortalConfig) {
        if self.logout_in_progress {
            return;
        }
        self.logout_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = portal_api::logout(&config);
            let _ = tx.send(JobMessage::LogoutFinished(result));
        });
    }

    pub(super) fn clear_logout(&mut self) {
        self.logout_in_progress = false;
    }

    #[cfg(test)]
    pub(super) fn mark_register_in_progress(&mut self) {
        self.register_in_progress = true;
    }

    #[cfg(test)]
    pub(super) fn mark_login_in_progress(&mut self) {
        self.login_in_progress = true;
    }
}
