use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{analyze_gaps, analyze_skills};
use crate::errors::{ApiJson, AppError};
use crate::models::{CareerProfile, DataSource, GapAnalysis, JobMarketData, SkillsAnalysis, Sourced};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeGapsRequest {
    pub user_skills: CareerProfile,
    pub job_market_data: JobMarketData,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeGapsResponse {
    pub success: bool,
    pub analysis: GapAnalysis,
    pub source: DataSource,
    pub message: &'static str,
}

/// POST /api/analyze-gaps
pub async fn handle_analyze_gaps(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalyzeGapsRequest>,
) -> Result<Json<AnalyzeGapsResponse>, AppError> {
    let result = analyze_gaps(
        state.ai.as_ref(),
        state.gap_scorer.as_ref(),
        &req.user_skills,
        &req.job_market_data,
    )
    .await;

    Ok(Json(AnalyzeGapsResponse {
        success: true,
        analysis: result.data,
        source: result.source,
        message: "Skills gap analysis completed",
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeSkillsRequest {
    pub extracted_skills: CareerProfile,
    pub target_role: Option<String>,
    pub location: Option<String>,
}

/// POST /api/analyze-skills
pub async fn handle_analyze_skills(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalyzeSkillsRequest>,
) -> Result<Json<Sourced<SkillsAnalysis>>, AppError> {
    let location = req
        .location
        .unwrap_or_else(|| state.config.default_location.clone());
    let target_role = req
        .target_role
        .as_deref()
        .map(str::trim)
        .filter(|role| !role.is_empty());

    let analysis = analyze_skills(
        state.ai.as_ref(),
        state.gap_scorer.as_ref(),
        &req.extracted_skills,
        target_role,
        &location,
    )
    .await;
    Ok(Json(analysis))
}
