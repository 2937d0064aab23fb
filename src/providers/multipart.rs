//! Single-part `multipart/form-data` bodies carrying one JPEG image.

use uuid::Uuid;

use crate::types::ImagePayload;

/// Form field name the recognition service reads the image from.
pub const FIELD_NAME: &str = "image";

/// File name announced for the uploaded image.
pub const FILE_NAME: &str = "image.jpg";

/// A complete request body plus the boundary that delimits it.
///
/// Layout, with `\r\n` line endings:
///
/// ```text
/// --{boundary}
/// Content-Disposition: form-data; name="image"; filename="image.jpg"
/// Content-Type: image/jpeg
///
/// {payload}
/// --{boundary}--
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Build a body with a freshly generated random boundary.
    pub fn new(payload: &ImagePayload) -> Self {
        Self::with_boundary(generate_boundary(), payload)
    }

    /// Build a body with a caller-chosen boundary.
    pub fn with_boundary(boundary: impl Into<String>, payload: &ImagePayload) -> Self {
        let boundary = boundary.into();

        let mut bytes = Vec::with_capacity(payload.len() + 192);
        bytes.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        bytes.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{FIELD_NAME}\"; filename=\"{FILE_NAME}\"\r\n"
            )
            .as_bytes(),
        );
        bytes.extend_from_slice(
            format!("Content-Type: {}\r\n\r\n", payload.content_type()).as_bytes(),
        );
        bytes.extend_from_slice(payload.bytes());
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        Self { boundary, bytes }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Random upper-case UUID, unique per request.
fn generate_boundary() -> String {
    Uuid::new_v4().hyphenated().to_string().to_uppercase()
}
