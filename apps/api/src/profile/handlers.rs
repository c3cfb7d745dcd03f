use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::{fallback_profile, process_cv};
use crate::errors::{ApiJson, AppError};
use crate::intake::{self, resolve_handle};
use crate::models::{CareerProfile, DataSource};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    /// Store the file only.
    Basic,
    /// Store the file and extract an enhanced profile right away.
    #[default]
    Enhanced,
}

#[derive(Debug, Default, Deserialize)]
pub struct UploadParams {
    #[serde(default)]
    pub mode: UploadMode,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: &'static str,
    pub filename: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<CareerProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DataSource>,
}

/// POST /api/upload-cv
pub async fn handle_upload_cv(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let upload = intake::receive_cv(&mut multipart, &state.config.upload_dir).await?;
    let path = upload.path.display().to_string();

    if params.mode == UploadMode::Basic {
        return Ok(Json(UploadResponse {
            success: true,
            message: "File uploaded successfully",
            filename: upload.handle,
            path,
            extracted_data: None,
            source: None,
        }));
    }

    let profile = process_cv(
        state.ai.as_ref(),
        &upload.path,
        &upload.handle,
        true,
        &state.config.default_location,
    )
    .await
    .map_err(|e| AppError::ProcessingFailed {
        message: "Failed to process CV".to_string(),
        details: e.to_string(),
        fallback: json!({ "extractedData": fallback_profile(&upload.handle) }),
    })?;

    Ok(Json(UploadResponse {
        success: true,
        message: "File uploaded and analyzed successfully",
        filename: upload.handle,
        path,
        extracted_data: Some(profile.data),
        source: Some(profile.source),
    }))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeCvRequest {
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeCvResponse {
    pub success: bool,
    pub skills: CareerProfile,
    pub source: DataSource,
    pub message: &'static str,
}

/// POST /api/analyze-cv
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalyzeCvRequest>,
) -> Result<Json<AnalyzeCvResponse>, AppError> {
    let path = resolve_handle(&state.config.upload_dir, &req.filename).await?;
    info!("Analyzing stored CV {}", req.filename);

    let profile = process_cv(
        state.ai.as_ref(),
        &path,
        &req.filename,
        true,
        &state.config.default_location,
    )
    .await
    .map_err(|e| AppError::ProcessingFailed {
        message: "Failed to analyze CV".to_string(),
        details: e.to_string(),
        fallback: json!({ "skills": fallback_profile(&req.filename) }),
    })?;

    Ok(Json(AnalyzeCvResponse {
        success: true,
        skills: profile.data,
        source: profile.source,
        message: "CV analyzed successfully",
    }))
}
