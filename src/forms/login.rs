//! Login snapshot shared by both roles.

use crate::portal_api::LoginRequest;
use crate::validate::is_valid_email;

use super::FieldError;

/// Snapshot of a login form at submit time.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Check email presence, email format, then password presence.
    pub fn validate(&self) -> Result<LoginRequest, FieldError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FieldError::new("Please enter email"));
        }
        if !is_valid_email(email) {
            return Err(FieldError::new("Invalid email format"));
        }
        if self.password.is_empty() {
            return Err(FieldError::new("Please enter password"));
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_reported_before_format() {
        let form = LoginForm {
            email: "  ".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(form.validate().unwrap_err().message, "Please enter email");
    }

    #[test]
    fn bad_format_is_reported_before_password() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate().unwrap_err().message, "Invalid email format");
    }

    #[test]
    fn missing_password_is_the_last_check() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate().unwrap_err().message, "Please enter password");
    }

    #[test]
    fn valid_credentials_build_a_request() {
        let form = LoginForm {
            email: " a@b.com ".to_string(),
            password: "secret".to_string(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.password, "secret");
    }
}
