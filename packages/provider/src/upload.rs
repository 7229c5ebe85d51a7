//! Uploaded source documents (PDF or image) sent to the provider inline.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// MIME types a provider accepts for extraction
pub const SUPPORTED_MIME_TYPES: [&str; 4] =
    ["application/pdf", "image/jpeg", "image/png", "image/webp"];

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Invalid base64 payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

/// File content ready to be sent inline: base64 data plus MIME type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub mime_type: String,
    pub data: String,
}

impl UploadedFile {
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, UploadError> {
        check_mime(mime_type)?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(bytes),
        })
    }

    /// Wrap an already-encoded payload, e.g. a browser data URL body
    pub fn from_base64(data: &str, mime_type: &str) -> Result<Self, UploadError> {
        check_mime(mime_type)?;
        STANDARD.decode(data)?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Read a file, inferring its MIME type from the extension
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let mime_type = mime_for_path(path)?;
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, mime_type)
    }

    /// Decoded payload size in bytes
    pub fn size(&self) -> usize {
        self.data.len() / 4 * 3 - self.data.chars().rev().take_while(|c| *c == '=').count()
    }
}

fn check_mime(mime_type: &str) -> Result<(), UploadError> {
    if SUPPORTED_MIME_TYPES.contains(&mime_type) {
        Ok(())
    } else {
        Err(UploadError::UnsupportedType(mime_type.to_string()))
    }
}

pub fn mime_for_path(path: &Path) -> Result<&'static str, UploadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => Ok("application/pdf"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "webp" => Ok("image/webp"),
        _ => Err(UploadError::UnsupportedType(path.display().to_string())),
    }
}
