//! Registration, login, and logout endpoints.

use serde::{Deserialize, Serialize};

use crate::config::PortalConfig;

use super::{ApiError, post_empty, post_json};

/// Wire body for `/api/doctor-register`.
#[derive(Clone, Debug, Serialize)]
pub struct DoctorRegisterRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub license: String,
    pub specialization: String,
    pub hospital: String,
}

/// Wire body for `/api/patient-register`.
#[derive(Clone, Debug, Serialize)]
pub struct PatientRegisterRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub age: u32,
    pub gender: String,
    pub medical_history: String,
}

/// Wire body for both login endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The `success` + `message` pair every JSON endpoint replies with.
#[derive(Clone, Debug, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// POST `/api/doctor-register`.
pub fn register_doctor(
    config: &PortalConfig,
    request: &DoctorRegisterRequest,
) -> Result<AckResponse, ApiError> {
    post_json(config, "/api/doctor-register", request)
}

/// POST `/api/patient-register`.
pub fn register_patient(
    config: &PortalConfig,
    request: &PatientRegisterRequest,
) -> Result<AckResponse, ApiError> {
    post_json(config, "/api/patient-register", request)
}

/// POST `/api/doctor-login`. On success the agent's cookie store picks up
/// the backend session cookie.
pub fn login_doctor(config: &PortalConfig, request: &LoginRequest) -> Result<AckResponse, ApiError> {
    post_json(config, "/api/doctor-login", request)
}

/// POST `/api/patient-login`.
pub fn login_patient(
    config: &PortalConfig,
    request: &LoginRequest,
) -> Result<AckResponse, ApiError> {
    post_json(config, "/api/patient-login", request)
}

/// POST `/api/logout`, clearing the backend session.
pub fn logout(config: &PortalConfig) -> Result<AckResponse, ApiError> {
    post_empty(config, "/api/logout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_serializes_the_documented_fields() {
        let request = DoctorRegisterRequest {
            fullname: "Grace Hoper".to_string(),
            email: "grace@clinic.org".to_string(),
            password: "hunter2hunter2".to_string(),
            phone: "1234567890".to_string(),
            license: "MD-1234".to_string(),
            specialization: "Neurology".to_string(),
            hospital: "General Hospital".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        for field in [
            "fullname",
            "email",
            "password",
            "phone",
            "license",
            "specialization",
            "hospital",
        ] {
            assert!(object.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn patient_request_sends_age_as_a_number() {
        let request = PatientRegisterRequest {
            fullname: "Alan Smith".to_string(),
            email: "alan@example.com".to_string(),
            password: "correct horse".to_string(),
            phone: "1234567890".to_string(),
            age: 42,
            gender: "Male".to_string(),
            medical_history: String::new(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["age"], serde_json::json!(42));
        assert_eq!(value["medical_history"], serde_json::json!(""));
    }

    #[test]
    fn ack_without_message_still_parses() {
        let ack: AckResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ack.success);
        assert!(ack.message.is_empty());
    }
}
