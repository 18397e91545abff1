//! MRI upload snapshot: a patient email plus a picked scan file.

use std::path::PathBuf;

use super::FieldError;

/// File extensions the backend accepts for MRI scans.
pub const MRI_FILE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "dcm", "nii"];

/// Upload ceiling enforced client-side; the backend rejects larger bodies.
pub const MAX_MRI_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Snapshot of the MRI upload form at submit time.
#[derive(Clone, Debug, Default)]
pub struct MriUploadForm {
    pub patient_email: String,
    pub file: Option<PathBuf>,
}

impl MriUploadForm {
    /// Check email presence, then file presence.
    pub fn validate(&self) -> Result<(String, PathBuf), FieldError> {
        let email = self.patient_email.trim();
        if email.is_empty() {
            return Err(FieldError::new("Please enter patient email"));
        }
        let Some(file) = self.file.clone() else {
            return Err(FieldError::new("Please select MRI file"));
        };
        Ok((email.to_string(), file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_checked_before_file() {
        let form = MriUploadForm::default();
        assert_eq!(
            form.validate().unwrap_err().message,
            "Please enter patient email"
        );
    }

    #[test]
    fn missing_file_is_reported_second() {
        let form = MriUploadForm {
            patient_email: "a@b.com".to_string(),
            file: None,
        };
        assert_eq!(
            form.validate().unwrap_err().message,
            "Please select MRI file"
        );
    }

    #[test]
    fn complete_form_yields_trimmed_email_and_path() {
        let form = MriUploadForm {
            patient_email: " a@b.com ".to_string(),
            file: Some(PathBuf::from("/scans/brain.png")),
        };
        let (email, path) = form.validate().unwrap();
        assert_eq!(email, "a@b.com");
        assert_eq!(path, PathBuf::from("/scans/brain.png"));
    }
}
