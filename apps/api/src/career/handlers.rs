use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use super::certification_roadmap;
use crate::errors::{ApiJson, AppError};
use crate::fallback::CareerField;
use crate::models::{CertificationRoadmap, Sourced};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationRoadmapRequest {
    pub career_field: String,
    pub current_skills: Vec<String>,
    pub target_role: Option<String>,
    pub location: Option<String>,
}

/// POST /api/certification-roadmap
pub async fn handle_certification_roadmap(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CertificationRoadmapRequest>,
) -> Result<Json<Sourced<CertificationRoadmap>>, AppError> {
    let career_field = if req.career_field.trim().is_empty() {
        CareerField::SoftwareEngineering.label().to_string()
    } else {
        req.career_field
    };
    let location = req
        .location
        .unwrap_or_else(|| state.config.default_location.clone());

    info!("Generating certification roadmap for {}", career_field);
    let roadmap = certification_roadmap(
        state.ai.as_ref(),
        &career_field,
        &req.current_skills,
        req.target_role.as_deref(),
        &location,
    )
    .await;
    Ok(Json(roadmap))
}
