//! Input state for the registration and login screens.

use crate::forms::{DoctorRegisterForm, LoginForm, PatientRegisterForm, Role};

/// Inputs of the combined registration screen.
///
/// The shared fields are always visible; the doctor and patient groups are
/// toggled by `role`, with exactly one group shown at a time.
#[derive(Debug, Default)]
pub struct RegisterScreenState {
    /// Which field group is visible and which endpoint a submit targets.
    pub role: Role,
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    // Doctor group.
    pub license: String,
    pub specialization: String,
    pub hospital: String,
    // Patient group.
    pub age: String,
    pub gender: String,
    pub medical_history: String,
}

impl RegisterScreenState {
    /// Snapshot the doctor fields for validation and submission.
    pub fn doctor_snapshot(&self) -> DoctorRegisterForm {
        DoctorRegisterForm {
            fullname: self.fullname.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            phone: self.phone.clone(),
            license: self.license.clone(),
            specialization: self.specialization.clone(),
            hospital: self.hospital.clone(),
        }
    }

    /// Snapshot the patient fields for validation and submission.
    pub fn patient_snapshot(&self) -> PatientRegisterForm {
        PatientRegisterForm {
            fullname: self.fullname.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            phone: self.phone.clone(),
            age: self.age.clone(),
            gender: self.gender.clone(),
            medical_history: self.medical_history.clone(),
        }
    }
}

/// Inputs of the login screen, one form per role.
#[derive(Debug, Default)]
pub struct LoginScreenState {
    pub doctor_email: String,
    pub doctor_password: String,
    pub patient_email: String,
    pub patient_password: String,
}

impl LoginScreenState {
    /// Snapshot one role's login form.
    pub fn snapshot(&self, role: Role) -> LoginForm {
        match role {
            Role::Doctor => LoginForm {
                email: self.doctor_email.clone(),
                password: self.doctor_password.clone(),
            },
            Role::Patient => LoginForm {
                email: self.patient_email.clone(),
                password: self.patient_password.clone(),
            },
        }
    }
}
