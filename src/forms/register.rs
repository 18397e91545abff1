//! Registration snapshots for both roles.

use crate::portal_api::{DoctorRegisterRequest, PatientRegisterRequest};
use crate::validate::{is_valid_email, is_valid_phone};

use super::FieldError;

const MIN_PASSWORD_CHARS: usize = 8;

/// Lowest accepted patient age.
const MIN_AGE: u32 = 1;
/// Highest accepted patient age.
const MAX_AGE: u32 = 120;

/// Snapshot of the doctor registration fields at submit time.
#[derive(Clone, Debug, Default)]
pub struct DoctorRegisterForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub license: String,
    pub specialization: String,
    pub hospital: String,
}

impl DoctorRegisterForm {
    /// Run the fixed-order checks and build the wire request.
    ///
    /// Order: full name, email format, password length, password match,
    /// phone format, license, specialization, hospital. The first failure
    /// wins and later checks never run.
    pub fn validate(&self) -> Result<DoctorRegisterRequest, FieldError> {
        let fullname = require(self.fullname.trim(), "Please enter full name")?;
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(FieldError::new("Invalid email format"));
        }
        check_password(&self.password, &self.confirm_password)?;
        let phone = self.phone.trim();
        if !is_valid_phone(phone) {
            return Err(FieldError::new("Phone must be 10 digits"));
        }
        let license = require(self.license.trim(), "Please enter medical license number")?;
        let specialization = require(self.specialization.trim(), "Please enter specialization")?;
        let hospital = require(self.hospital.trim(), "Please enter hospital/clinic name")?;

        Ok(DoctorRegisterRequest {
            fullname: fullname.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            phone: phone.to_string(),
            license: license.to_string(),
            specialization: specialization.to_string(),
            hospital: hospital.to_string(),
        })
    }
}

/// Snapshot of the patient registration fields at submit time.
///
/// `age` keeps the raw input text; validation parses it so non-numeric
/// entries fail the age check rather than defaulting.
#[derive(Clone, Debug, Default)]
pub struct PatientRegisterForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub medical_history: String,
}

impl PatientRegisterForm {
    /// Run the fixed-order checks and build the wire request.
    ///
    /// Order: full name, email format, password length, password match,
    /// phone format, age range, gender presence.
    pub fn validate(&self) -> Result<PatientRegisterRequest, FieldError> {
        let fullname = require(self.fullname.trim(), "Please enter full name")?;
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(FieldError::new("Invalid email format"));
        }
        check_password(&self.password, &self.confirm_password)?;
        let phone = self.phone.trim();
        if !is_valid_phone(phone) {
            return Err(FieldError::new("Phone must be 10 digits"));
        }
        let age = parse_age(&self.age)?;
        if self.gender.is_empty() {
            return Err(FieldError::new("Please select gender"));
        }

        Ok(PatientRegisterRequest {
            fullname: fullname.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            phone: phone.to_string(),
            age,
            gender: self.gender.clone(),
            medical_history: self.medical_history.trim().to_string(),
        })
    }
}

fn require<'a>(value: &'a str, message: &'static str) -> Result<&'a str, FieldError> {
    if value.is_empty() {
        Err(FieldError::new(message))
    } else {
        Ok(value)
    }
}

fn check_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(FieldError::new("Password must be at least 8 characters"));
    }
    if password != confirm {
        return Err(FieldError::new("Passwords do not match"));
    }
    Ok(())
}

fn parse_age(raw: &str) -> Result<u32, FieldError> {
    let invalid = FieldError::new("Please enter valid age");
    let age: u32 = raw.trim().parse().map_err(|_| invalid)?;
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor_form() -> DoctorRegisterForm {
        DoctorRegisterForm {
            fullname: "Grace Hoper".to_string(),
            email: "grace@clinic.org".to_string(),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
            phone: "(123) 456-7890".to_string(),
            license: "MD-1234".to_string(),
            specialization: "Neurology".to_string(),
            hospital: "General Hospital".to_string(),
        }
    }

    fn patient_form() -> PatientRegisterForm {
        PatientRegisterForm {
            fullname: "Alan Smith".to_string(),
            email: "alan@example.com".to_string(),
            password: "correct horse".to_string(),
            confirm_password: "correct horse".to_string(),
            phone: "123-456-7890".to_string(),
            age: "42".to_string(),
            gender: "Male".to_string(),
            medical_history: "  none  ".to_string(),
        }
    }

    #[test]
    fn doctor_form_builds_trimmed_request() {
        let mut form = doctor_form();
        form.fullname = "  Grace Hoper  ".to_string();
        let request = form.validate().unwrap();
        assert_eq!(request.fullname, "Grace Hoper");
        assert_eq!(request.phone, "(123) 456-7890");
    }

    #[test]
    fn empty_fullname_short_circuits_before_everything_else() {
        let form = DoctorRegisterForm {
            fullname: "   ".to_string(),
            ..DoctorRegisterForm::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.message, "Please enter full name");
    }

    #[test]
    fn short_password_wins_over_missing_doctor_fields() {
        let form = DoctorRegisterForm {
            fullname: "Grace Hoper".to_string(),
            email: "grace@clinic.org".to_string(),
            password: "seven77".to_string(),
            confirm_password: "seven77".to_string(),
            phone: "1234567890".to_string(),
            // License, specialization, and hospital stay empty; their
            // messages must not surface because the password check fires
            // first.
            ..DoctorRegisterForm::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.message, "Password must be at least 8 characters");
    }

    #[test]
    fn mismatched_passwords_are_reported_after_length() {
        let mut form = doctor_form();
        form.confirm_password = "something else".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.message, "Passwords do not match");
    }

    #[test]
    fn doctor_specific_fields_are_checked_in_order() {
        let mut form = doctor_form();
        form.license.clear();
        form.specialization.clear();
        assert_eq!(
            form.validate().unwrap_err().message,
            "Please enter medical license number"
        );

        let mut form = doctor_form();
        form.specialization.clear();
        assert_eq!(
            form.validate().unwrap_err().message,
            "Please enter specialization"
        );

        let mut form = doctor_form();
        form.hospital = "  ".to_string();
        assert_eq!(
            form.validate().unwrap_err().message,
            "Please enter hospital/clinic name"
        );
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for (age, ok) in [("0", false), ("1", true), ("120", true), ("121", false)] {
            let mut form = patient_form();
            form.age = age.to_string();
            assert_eq!(form.validate().is_ok(), ok, "age {age}");
            if !ok {
                assert_eq!(
                    form.validate().unwrap_err().message,
                    "Please enter valid age"
                );
            }
        }
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let mut form = patient_form();
        form.age = "forty".to_string();
        assert_eq!(
            form.validate().unwrap_err().message,
            "Please enter valid age"
        );
    }

    #[test]
    fn missing_gender_is_reported_after_age() {
        let mut form = patient_form();
        form.gender.clear();
        assert_eq!(form.validate().unwrap_err().message, "Please select gender");
    }

    #[test]
    fn patient_request_carries_numeric_age_and_trimmed_history() {
        let request = patient_form().validate().unwrap();
        assert_eq!(request.age, 42);
        assert_eq!(request.medical_history, "none");
    }

    #[test]
    fn invalid_phone_is_reported_before_role_fields() {
        let mut form = patient_form();
        form.phone = "12345".to_string();
        assert_eq!(form.validate().unwrap_err().message, "Phone must be 10 digits");
    }
}
