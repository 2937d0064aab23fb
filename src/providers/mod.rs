//! Remote recognition providers.
//!
//! - [`UploadClient`]: digit recognition over HTTP
//! - [`MultipartBody`]: request body encoding used by the client

pub mod multipart;
pub mod upload;

pub use multipart::MultipartBody;
pub use upload::{DEFAULT_ENDPOINT, UploadClient};
