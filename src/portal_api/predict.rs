//! MRI upload and prediction endpoint.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::PortalConfig;
use crate::http_client;

use super::multipart::{MultipartBody, content_type_for_extension};
use super::{ApiError, parse_body};

/// Body of `/api/predict-mri`.
///
/// Failure replies carry only `success` and `message`; the result fields
/// are present only when the analysis ran.
#[derive(Clone, Debug, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub prediction: Option<String>,
    pub confidence: Option<f64>,
    pub classes: Option<IndexMap<String, f64>>,
    pub suggestions: Option<String>,
}

/// Complete analysis payload of a successful prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    /// Predicted class label.
    pub prediction: String,
    /// Confidence on the percent scale, as sent by the backend.
    pub confidence: f64,
    /// Per-class probabilities in [0,1], in wire order.
    pub classes: IndexMap<String, f64>,
    /// Free-text follow-up advice.
    pub suggestions: String,
}

impl PredictionResponse {
    /// Extract the analysis payload; `None` when any result field is absent.
    pub fn into_result(self) -> Option<PredictionResult> {
        Some(PredictionResult {
            prediction: self.prediction?,
            confidence: self.confidence?,
            classes: self.classes?,
            suggestions: self.suggestions?,
        })
    }
}

/// POST a scan to `/api/predict-mri` as `patient_email` + `mri_file`.
pub fn predict_mri(
    config: &PortalConfig,
    patient_email: &str,
    file_path: &Path,
) -> Result<PredictionResponse, ApiError> {
    let bytes = std::fs::read(file_path).map_err(|source| ApiError::File {
        path: PathBuf::from(file_path),
        source,
    })?;
    let filename = file_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("scan");
    let content_type =
        content_type_for_extension(file_path.extension().and_then(|ext| ext.to_str()));

    let mut body = MultipartBody::new();
    body.add_text("patient_email", patient_email);
    body.add_file("mri_file", filename, content_type, &bytes);
    let (header, payload) = body.finish();

    let url = config.endpoint("/api/predict-mri");
    let request = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", &header);
    let response = match request.send_bytes(&payload) {
        Ok(response) => response,
        Err(ureq::Error::Status(_code, response)) => response,
        Err(ureq::Error::Transport(err)) => return Err(ApiError::Transport(err.to_string())),
    };
    parse_body(response)
}
