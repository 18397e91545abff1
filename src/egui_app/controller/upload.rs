//! MRI upload handling on the doctor dashboard.

use std::path::Path;

use crate::egui_app::state::{Severity, UploadFormState};
use crate::egui_app::view_model;
use crate::forms::{MAX_MRI_UPLOAD_BYTES, MRI_FILE_EXTENSIONS, MriUploadForm};
use crate::portal_api::{ApiError, PredictionResponse};

use super::PortalController;

impl PortalController {
    /// Open the native picker filtered to the accepted scan types.
    pub fn pick_mri_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("MRI scans", MRI_FILE_EXTENSIONS)
            .pick_file();
        if let Some(path) = picked {
            self.ui.doctor_dashboard.upload.file = Some(path);
        }
    }

    /// Validate the upload form and start the analysis request.
    pub fn submit_mri_upload(&mut self) {
        if self.jobs.predict_in_progress() {
            return;
        }
        let form = MriUploadForm {
            patient_email: self.ui.doctor_dashboard.upload.patient_email.clone(),
            file: self.ui.doctor_dashboard.upload.file.clone(),
        };
        let (patient_email, file_path) = match form.validate() {
            Ok(parts) => parts,
            Err(err) => {
                self.notify(err.message, Severity::Error);
                return;
            }
        };
        if oversized(&file_path) {
            self.notify("MRI file exceeds the 16 MB upload limit", Severity::Error);
            return;
        }
        tracing::debug!(file = %file_path.display(), "submitting MRI scan for analysis");
        self.notify("Analyzing MRI scan...", Severity::Info);
        self.jobs
            .begin_predict(self.config.clone(), patient_email, file_path);
    }

    /// True while an analysis request is outstanding.
    pub fn upload_in_flight(&self) -> bool {
        self.jobs.predict_in_progress()
    }

    pub(super) fn finish_predict(&mut self, result: Result<PredictionResponse, ApiError>) {
        self.jobs.clear_predict();
        match result {
            Ok(response) if response.success => match response.into_result() {
                Some(result) => {
                    self.ui.doctor_dashboard.analysis =
                        Some(view_model::prediction_view(&result));
                    self.notify("Analysis complete!", Severity::Success);
                    // Inputs clear only after a rendered result; failures
                    // leave them untouched.
                    self.ui.doctor_dashboard.upload = UploadFormState::default();
                }
                None => self.notify("Error: malformed prediction response", Severity::Error),
            },
            Ok(response) => self.notify(response.message, Severity::Error),
            Err(err) => self.notify(format!("Error: {err}"), Severity::Error),
        }
    }
}

fn oversized(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.len() > MAX_MRI_UPLOAD_BYTES)
        .unwrap_or(false)
}
