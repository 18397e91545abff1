//! Dashboard screen state for both roles.

use std::path::PathBuf;

use crate::egui_app::view_model::PredictionView;
use crate::portal_api::{DoctorProfile, PatientProfile, ScanRecord};

/// Inputs of the MRI upload form on the doctor dashboard.
#[derive(Debug, Default)]
pub struct UploadFormState {
    /// Email of the patient the scan belongs to.
    pub patient_email: String,
    /// Picked scan file, if any.
    pub file: Option<PathBuf>,
}

/// Doctor dashboard data plus the upload form and analysis panel.
#[derive(Debug, Default)]
pub struct DoctorDashboardState {
    /// True while the dashboard fetch is outstanding.
    pub loading: bool,
    pub profile: Option<DoctorProfile>,
    pub scans: Vec<ScanRecord>,
    pub upload: UploadFormState,
    /// Last rendered analysis; hidden until the first successful upload.
    pub analysis: Option<PredictionView>,
}

/// Patient dashboard data.
#[derive(Debug, Default)]
pub struct PatientDashboardState {
    /// True while the dashboard fetch is outstanding.
    pub loading: bool,
    pub profile: Option<PatientProfile>,
    pub scans: Vec<ScanRecord>,
}
