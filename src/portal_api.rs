//! Typed client for the portal backend's JSON and multipart endpoints.
//!
//! The backend answers every endpoint with a JSON body carrying a `success`
//! flag and a human-readable `message`, including on 4xx/5xx statuses, so
//! error statuses are parsed like any other response and only transport
//! failures or unparseable bodies surface as [`ApiError`]s.

mod auth;
mod dashboard;
mod multipart;
mod predict;

pub use auth::{
    AckResponse, DoctorRegisterRequest, LoginRequest, PatientRegisterRequest, login_doctor,
    login_patient, logout, register_doctor, register_patient,
};
pub use dashboard::{
    DoctorDashboardResponse, DoctorProfile, PatientDashboardResponse, PatientProfile, ScanRecord,
    fetch_doctor_dashboard, fetch_patient_dashboard,
};
pub use multipart::MultipartBody;
pub use predict::{PredictionResponse, PredictionResult, predict_mri};

use serde::de::DeserializeOwned;

use crate::config::PortalConfig;
use crate::http_client;

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// Errors from talking to the portal backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, timeout).
    #[error("{0}")]
    Transport(String),
    /// The response body was not the JSON shape the endpoint documents.
    #[error("Invalid response: {0}")]
    Json(String),
    /// A file to upload could not be read.
    #[error("Failed to read {path}: {source}")]
    File {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

fn post_json<T: DeserializeOwned>(
    config: &PortalConfig,
    path: &str,
    body: &impl serde::Serialize,
) -> Result<T, ApiError> {
    let url = config.endpoint(path);
    let request = http_client::agent()
        .post(&url)
        .set("Accept", "application/json");
    let response = match request.send_json(body) {
        Ok(response) => response,
        // The backend sends structured {success:false, message} bodies with
        // its error statuses; parse them like any other response.
        Err(ureq::Error::Status(_code, response)) => response,
        Err(ureq::Error::Transport(err)) => return Err(ApiError::Transport(err.to_string())),
    };
    parse_body(response)
}

fn post_empty<T: DeserializeOwned>(config: &PortalConfig, path: &str) -> Result<T, ApiError> {
    let url = config.endpoint(path);
    let request = http_client::agent()
        .post(&url)
        .set("Accept", "application/json");
    let response = match request.call() {
        Ok(response) => response,
        Err(ureq::Error::Status(_code, response)) => response,
        Err(ureq::Error::Transport(err)) => return Err(ApiError::Transport(err.to_string())),
    };
    parse_body(response)
}

fn get_json<T: DeserializeOwned>(config: &PortalConfig, path: &str) -> Result<T, ApiError> {
    let url = config.endpoint(path);
    let request = http_client::agent()
        .get(&url)
        .set("Accept", "application/json");
    let response = match request.call() {
        Ok(response) => response,
        Err(ureq::Error::Status(_code, response)) => response,
        Err(ureq::Error::Transport(err)) => return Err(ApiError::Transport(err.to_string())),
    };
    parse_body(response)
}

fn parse_body<T: DeserializeOwned>(response: ureq::Response) -> Result<T, ApiError> {
    let body = http_client::read_body_limited(response, MAX_RESPONSE_BYTES).map_err(ApiError::Json)?;
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| ApiError::Json(err.to_string()))
}
