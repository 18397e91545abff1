use std::time::{Duration, Instant};

use indexmap::IndexMap;

use crate::config::PortalConfig;
use crate::egui_app::state::{Screen, Severity};
use crate::forms::Role;
use crate::portal_api::{AckResponse, ApiError, DoctorDashboardResponse, PredictionResponse};

use super::PortalController;

fn controller() -> PortalController {
    PortalController::new(PortalConfig::default())
}

fn ack(success: bool, message: &str) -> AckResponse {
    AckResponse {
        success,
        message: message.to_string(),
    }
}

#[test]
fn invalid_form_shows_first_message_and_starts_no_job() {
    let mut controller = controller();
    controller.submit_registration();

    let notice = controller.ui.notice.current().unwrap();
    assert_eq!(notice.message, "Please enter full name");
    assert_eq!(notice.severity, Severity::Error);
    assert!(!controller.registration_in_flight());
    assert!(controller.ui.route.pending.is_none());
}

#[test]
fn busy_registration_is_rejected_before_validation() {
    let mut controller = controller();
    controller.jobs.mark_register_in_progress();

    // The form is invalid, but the in-flight guard must win: no validation
    // message appears.
    controller.submit_registration();
    assert!(controller.ui.notice.current().is_none());
}

#[test]
fn busy_login_is_rejected_before_validation() {
    let mut controller = controller();
    controller.jobs.mark_login_in_progress();
    controller.submit_login(Role::Doctor);
    assert!(controller.ui.notice.current().is_none());
}

#[test]
fn login_success_notifies_and_schedules_the_dashboard_redirect() {
    let mut controller = controller();
    controller.finish_login(Role::Doctor, Ok(ack(true, "Login successful")));

    let notice = controller.ui.notice.current().unwrap();
    assert_eq!(notice.message, "Login successful! Redirecting...");
    assert_eq!(notice.severity, Severity::Success);
    let pending = controller.ui.route.pending.unwrap();
    assert_eq!(pending.target, Screen::DoctorDashboard);
    assert!(!controller.login_in_flight());
}

#[test]
fn patient_login_redirects_to_the_patient_dashboard() {
    let mut controller = controller();
    controller.finish_login(Role::Patient, Ok(ack(true, "Login successful")));
    let pending = controller.ui.route.pending.unwrap();
    assert_eq!(pending.target, Screen::PatientDashboard);
}

#[test]
fn login_failure_surfaces_the_server_message_without_redirect() {
    let mut controller = controller();
    controller.finish_login(Role::Doctor, Ok(ack(false, "Invalid credentials")));

    let notice = controller.ui.notice.current().unwrap();
    assert_eq!(notice.message, "Invalid credentials");
    assert_eq!(notice.severity, Severity::Error);
    assert!(controller.ui.route.pending.is_none());
}

#[test]
fn transport_failure_is_prefixed() {
    let mut controller = controller();
    controller.finish_login(
        Role::Doctor,
        Err(ApiError::Transport("connection refused".to_string())),
    );
    let notice = controller.ui.notice.current().unwrap();
    assert_eq!(notice.message, "Error: connection refused");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn registration_success_redirects_to_login_after_the_delay() {
    let mut controller = controller();
    controller.finish_registration(Role::Doctor, Ok(ack(true, "Doctor registered")));

    let notice = controller.ui.notice.current().unwrap();
    assert_eq!(notice.message, "Doctor registered! Redirecting to login...");
    let pending = controller.ui.route.pending.unwrap();
    assert_eq!(pending.target, Screen::Login);

    // Before the deadline nothing moves; after it the screen changes.
    controller.tick(pending.at - Duration::from_millis(1));
    assert_eq!(controller.ui.route.current, Screen::Home);
    controller.tick(pending.at);
    assert_eq!(controller.ui.route.current, Screen::Login);
}

#[test]
fn patient_registration_uses_its_own_success_message() {
    let mut controller = controller();
    controller.finish_registration(Role::Patient, Ok(ack(true, "Patient registered")));
    let notice = controller.ui.notice.current().unwrap();
    assert_eq!(notice.message, "Patient registered! Redirecting to login...");
}

fn prediction_response() -> PredictionResponse {
    let mut classes = IndexMap::new();
    classes.insert("Tumor".to_string(), 0.925);
    classes.insert("Normal".to_string(), 0.075);
    PredictionResponse {
        success: true,
        message: String::new(),
        prediction: Some("Tumor".to_string()),
        confidence: Some(92.5),
        classes: Some(classes),
        suggestions: Some("Consult a specialist".to_string()),
    }
}

#[test]
fn prediction_success_renders_and_clears_the_upload_form() {
    let mut controller = controller();
    controller.ui.doctor_dashboard.upload.patient_email = "a@b.com".to_string();
    controller.ui.doctor_dashboard.upload.file = Some("/scans/brain.png".into());

    controller.finish_predict(Ok(prediction_response()));

    let view = controller.ui.doctor_dashboard.analysis.as_ref().unwrap();
    assert_eq!(view.prediction, "Tumor");
    assert_eq!(view.confidence_text, "92.5%");
    assert_eq!(
        controller.ui.notice.current().unwrap().message,
        "Analysis complete!"
    );
    assert!(controller.ui.doctor_dashboard.upload.patient_email.is_empty());
    assert!(controller.ui.doctor_dashboard.upload.file.is_none());
}

#[test]
fn prediction_failure_leaves_the_upload_form_untouched() {
    let mut controller = controller();
    controller.ui.doctor_dashboard.upload.patient_email = "a@b.com".to_string();
    controller.ui.doctor_dashboard.upload.file = Some("/scans/brain.png".into());

    controller.finish_predict(Ok(PredictionResponse {
        success: false,
        message: "Patient not found".to_string(),
        prediction: None,
        confidence: None,
        classes: None,
        suggestions: None,
    }));

    assert_eq!(
        controller.ui.notice.current().unwrap().message,
        "Patient not found"
    );
    assert!(controller.ui.doctor_dashboard.analysis.is_none());
    assert_eq!(
        controller.ui.doctor_dashboard.upload.patient_email,
        "a@b.com"
    );
    assert!(controller.ui.doctor_dashboard.upload.file.is_some());
}

#[test]
fn malformed_success_prediction_surfaces_an_error() {
    let mut controller = controller();
    let mut response = prediction_response();
    response.classes = None;
    controller.finish_predict(Ok(response));
    assert_eq!(
        controller.ui.notice.current().unwrap().message,
        "Error: malformed prediction response"
    );
}

#[test]
fn unauthorized_dashboard_returns_to_login() {
    let mut controller = controller();
    controller.ui.route.current = Screen::DoctorDashboard;
    controller.finish_doctor_dashboard(Ok(DoctorDashboardResponse {
        success: false,
        message: "Unauthorized".to_string(),
        doctor: None,
        scans: Vec::new(),
    }));

    assert_eq!(controller.ui.route.current, Screen::Login);
    assert_eq!(
        controller.ui.notice.current().unwrap().message,
        "Unauthorized"
    );
}

#[test]
fn evicted_notice_leaves_exactly_one_visible() {
    let mut controller = controller();
    controller.notify("first", Severity::Info);
    controller.notify("second", Severity::Success);
    let notice = controller.ui.notice.current().unwrap();
    assert_eq!(notice.message, "second");

    // Well past the first notice's deadline the second is still the one
    // shown; its own deadline is what removes it.
    controller
        .ui
        .notice
        .tick(Instant::now() + Duration::from_secs(60));
    assert!(controller.ui.notice.current().is_none());
}
