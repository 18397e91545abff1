//! Form snapshots and the fixed-order validation behind every submission.
//!
//! Each snapshot is read from the screen state at the moment the user
//! submits. `validate` walks the checks in the order the form presents its
//! fields and stops at the first failure, so the user sees exactly one
//! message and nothing is sent until every check passes.

mod login;
mod register;
mod upload;

pub use login::LoginForm;
pub use register::{DoctorRegisterForm, PatientRegisterForm};
pub use upload::{MriUploadForm, MAX_MRI_UPLOAD_BYTES, MRI_FILE_EXTENSIONS};

/// Which side of the portal a form or session belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// Registering or signed in as a doctor.
    #[default]
    Doctor,
    /// Registering or signed in as a patient.
    Patient,
}

impl Role {
    /// Human-readable label used in screen headings.
    pub fn label(self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
        }
    }
}

/// First failing check of a form, carrying the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    /// Message surfaced verbatim through the notifier.
    pub message: &'static str,
}

impl FieldError {
    pub(crate) fn new(message: &'static str) -> Self {
        Self { message }
    }
}
