//! File intake: validates one multipart upload under the `cv` field and
//! stores it as `<unix-millis>-<sanitized name>` in the upload directory.
//!
//! The stored name is the opaque handle later steps use. Handles resolve
//! back to paths only when they name a plain file directly inside the
//! upload directory.

use std::path::{Path, PathBuf};

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::BytesMut;
use chrono::Utc;
use thiserror::Error;
use tracing::info;

pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;
pub const FIELD_NAME: &str = "cv";

/// Extension allow-list and the MIME types accepted for each.
const ALLOWED_TYPES: &[(&str, &[&str])] = &[
    ("pdf", &["application/pdf"]),
    ("doc", &["application/msword"]),
    (
        "docx",
        &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"],
    ),
    ("jpg", &["image/jpeg", "image/jpg"]),
    ("jpeg", &["image/jpeg", "image/jpg"]),
    ("png", &["image/png"]),
];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File too large. Maximum size is 5MB.")]
    TooLarge,

    #[error("Unexpected file field '{0}'. Please use \"cv\" as the field name.")]
    UnexpectedField(String),

    #[error("Only PDF, DOC, DOCX, and image files are allowed!")]
    DisallowedType,

    #[error("No file uploaded")]
    Missing,

    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    #[error("Invalid file handle '{0}'")]
    InvalidHandle(String),

    #[error("Uploaded file '{0}' not found")]
    NotFound(String),

    #[error("Failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Machine-readable code carried in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            UploadError::TooLarge => "FILE_TOO_LARGE",
            UploadError::UnexpectedField(_) => "UNEXPECTED_FILE_FIELD",
            UploadError::DisallowedType => "INVALID_FILE_TYPE",
            UploadError::Missing => "NO_FILE",
            UploadError::Multipart(_) | UploadError::InvalidHandle(_) => "VALIDATION_ERROR",
            UploadError::NotFound(_) => "NOT_FOUND",
            UploadError::Io(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::NotFound(_) => StatusCode::NOT_FOUND,
            UploadError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// A file persisted by intake.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub handle: String,
    pub path: PathBuf,
    pub size: usize,
}

fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Both the extension and the declared MIME type must be on the allow-list.
pub fn validate_type(file_name: &str, mime: &str) -> Result<(), UploadError> {
    let mime = mime
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let allowed = extension_of(file_name)
        .and_then(|ext| ALLOWED_TYPES.iter().find(|(allowed, _)| *allowed == ext))
        .map(|(_, mimes)| mimes.contains(&mime.as_str()))
        .unwrap_or(false);

    if allowed {
        Ok(())
    } else {
        Err(UploadError::DisallowedType)
    }
}

/// MIME type to send to OCR for a stored file, derived from its extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(extension_of)
        .and_then(|ext| ALLOWED_TYPES.iter().find(|(allowed, _)| *allowed == ext))
        .map(|(_, mimes)| mimes[0])
        .unwrap_or("application/octet-stream")
}

/// Keeps the base name only, replacing anything outside `[A-Za-z0-9._-]`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

pub fn handle_for(file_name: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), sanitize_file_name(file_name))
}

/// Maps a handle back to its stored file.
pub async fn resolve_handle(upload_dir: &Path, handle: &str) -> Result<PathBuf, UploadError> {
    let suspicious = handle.is_empty()
        || handle.contains(['/', '\\'])
        || handle.contains("..")
        || handle.starts_with('.');
    if suspicious {
        return Err(UploadError::InvalidHandle(handle.to_string()));
    }

    let path = upload_dir.join(handle);
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Ok(path),
        _ => Err(UploadError::NotFound(handle.to_string())),
    }
}

fn multipart_error(err: MultipartError) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge
    } else {
        UploadError::Multipart(err.body_text())
    }
}

/// Reads the multipart body, enforcing the field name, type allow-list and
/// size ceiling while streaming, then writes the file to `upload_dir`.
/// Non-file fields are ignored.
pub async fn receive_cv(
    multipart: &mut Multipart,
    upload_dir: &Path,
) -> Result<StoredUpload, UploadError> {
    let mut stored: Option<StoredUpload> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or_default().to_string();
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        if field_name != FIELD_NAME || stored.is_some() {
            return Err(UploadError::UnexpectedField(field_name));
        }

        let mime = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        validate_type(&file_name, &mime)?;

        let mut bytes = BytesMut::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            if bytes.len() + chunk.len() > MAX_FILE_BYTES {
                return Err(UploadError::TooLarge);
            }
            bytes.extend_from_slice(&chunk);
        }

        tokio::fs::create_dir_all(upload_dir).await?;
        let handle = handle_for(&file_name);
        let path = upload_dir.join(&handle);
        tokio::fs::write(&path, &bytes).await?;
        info!("File uploaded: {} ({} bytes, {})", handle, bytes.len(), mime);

        stored = Some(StoredUpload {
            handle,
            path,
            size: bytes.len(),
        });
    }

    stored.ok_or(UploadError::Missing)
}
