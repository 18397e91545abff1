//! Minimal `multipart/form-data` encoder for the MRI upload endpoint.
//!
//! The backend reads exactly one text field and one file part, so a small
//! hand-built body avoids pulling in a full multipart client. Parts are
//! emitted in insertion order with CRLF line endings per RFC 7578.

use uuid::Uuid;

/// Accumulates multipart parts into a single request body.
#[derive(Debug)]
pub struct MultipartBody {
    boundary: String,
    buffer: Vec<u8>,
}

impl MultipartBody {
    /// Start an empty body with a fresh random boundary.
    pub fn new() -> Self {
        Self {
            boundary: format!("neuroscan-{}", Uuid::new_v4().simple()),
            buffer: Vec::new(),
        }
    }

    /// Append a plain text field.
    pub fn add_text(&mut self, name: &str, value: &str) {
        self.open_part();
        self.write_line(&format!(
            "Content-Disposition: form-data; name=\"{name}\""
        ));
        self.write_line("");
        self.write_line(value);
    }

    /// Append a file part with an explicit content type.
    pub fn add_file(&mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) {
        self.open_part();
        self.write_line(&format!(
            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\""
        ));
        self.write_line(&format!("Content-Type: {content_type}"));
        self.write_line("");
        self.buffer.extend_from_slice(bytes);
        self.write_line("");
    }

    /// Close the body and return the `Content-Type` header value plus bytes.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        let terminator = format!("--{}--\r\n", self.boundary);
        self.buffer.extend_from_slice(terminator.as_bytes());
        let content_type = format!("multipart/form-data; boundary={}", self.boundary);
        (content_type, self.buffer)
    }

    fn open_part(&mut self) {
        let opener = format!("--{}\r\n", self.boundary);
        self.buffer.extend_from_slice(opener.as_bytes());
    }

    fn write_line(&mut self, line: &str) {
        self.buffer.extend_from_slice(line.as_bytes());
        self.buffer.extend_from_slice(b"\r\n");
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick a content type for the upload from the file extension.
pub(super) fn content_type_for_extension(extension: Option<&str>) -> &'static str {
    match extension.map(|ext| ext.to_ascii_lowercase()).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_contains_both_parts_and_terminator() {
        let mut body = MultipartBody::new();
        body.add_text("patient_email", "a@b.com");
        body.add_file("mri_file", "scan.png", "image/png", b"PNG-bytes");
        let (content_type, bytes) = body.finish();

        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap()
            .to_string();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Content-Disposition: form-data; name=\"patient_email\"\r\n\r\na@b.com\r\n"));
        assert!(text.contains(
            "Content-Disposition: form-data; name=\"mri_file\"; filename=\"scan.png\"\r\n"
        ));
        assert!(text.contains("Content-Type: image/png\r\n\r\nPNG-bytes\r\n"));
        assert!(text.ends_with(&format!("--{boundary}--\r\n")));
    }

    #[test]
    fn boundaries_differ_between_bodies() {
        let (a, _) = MultipartBody::new().finish();
        let (b, _) = MultipartBody::new().finish();
        assert_ne!(a, b);
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type_for_extension(Some("png")), "image/png");
        assert_eq!(content_type_for_extension(Some("JPG")), "image/jpeg");
        assert_eq!(
            content_type_for_extension(Some("dcm")),
            "application/octet-stream"
        );
        assert_eq!(content_type_for_extension(None), "application/octet-stream");
    }
}
