//! Authorized dashboard endpoints for both roles.

use serde::Deserialize;

use crate::config::PortalConfig;

use super::{ApiError, get_json};

/// Doctor profile as returned by `/api/doctor-dashboard`.
#[derive(Clone, Debug, Deserialize)]
pub struct DoctorProfile {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub hospital: String,
    pub created_at: String,
}

/// Patient profile as returned by `/api/patient-dashboard`.
#[derive(Clone, Debug, Deserialize)]
pub struct PatientProfile {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub gender: String,
    pub created_at: String,
}

/// One stored MRI scan row.
#[derive(Clone, Debug, Deserialize)]
pub struct ScanRecord {
    pub id: u64,
    pub filename: String,
    pub prediction: String,
    pub confidence: f64,
    #[serde(default)]
    pub stage: String,
    pub created_at: String,
}

/// Body of `/api/doctor-dashboard`.
///
/// Unauthorized replies carry only `success` and `message`, so the payload
/// fields are optional.
#[derive(Clone, Debug, Deserialize)]
pub struct DoctorDashboardResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub doctor: Option<DoctorProfile>,
    #[serde(default)]
    pub scans: Vec<ScanRecord>,
}

/// Body of `/api/patient-dashboard`.
#[derive(Clone, Debug, Deserialize)]
pub struct PatientDashboardResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub patient: Option<PatientProfile>,
    #[serde(default)]
    pub scans: Vec<ScanRecord>,
}

/// GET `/api/doctor-dashboard` using the session cookie from login.
pub fn fetch_doctor_dashboard(config: &PortalConfig) -> Result<DoctorDashboardResponse, ApiError> {
    get_json(config, "/api/doctor-dashboard")
}

/// GET `/api/patient-dashboard` using the session cookie from login.
pub fn fetch_patient_dashboard(
    config: &PortalConfig,
) -> Result<PatientDashboardResponse, ApiError> {
    get_json(config, "/api/patient-dashboard")
}
