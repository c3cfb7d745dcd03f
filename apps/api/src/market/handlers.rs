use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{insights, recommendations, scan_market, JobQuery};
use crate::errors::{ApiJson, AppError};
use crate::fallback::CareerField;
use crate::models::{
    CareerProfile, DataSource, ExperienceLevel, JobMarketSummary, JobRecommendations,
    MarketInsights, Sourced,
};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanJobsRequest {
    pub skills: Option<CareerProfile>,
    pub career_field: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScanJobsResponse {
    pub success: bool,
    pub jobs: JobMarketSummary,
    pub source: DataSource,
    pub message: &'static str,
}

/// POST /api/scan-jobs
pub async fn handle_scan_jobs(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ScanJobsRequest>,
) -> Result<Json<ScanJobsResponse>, AppError> {
    let location = req
        .location
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| state.config.default_location.clone());

    let (query, field) = match (&req.career_field, &req.skills) {
        (Some(field), _) if !field.trim().is_empty() => {
            (JobQuery::for_field(field, &location), CareerField::resolve(field))
        }
        (_, Some(profile)) => (
            JobQuery::for_profile(profile, &location),
            CareerField::resolve(&profile.detected_career_field),
        ),
        _ => (
            JobQuery::for_field(CareerField::SoftwareEngineering.label(), &location),
            CareerField::SoftwareEngineering,
        ),
    };

    info!("Scanning job market: {:?} in {}", query.titles, location);
    let result = scan_market(state.ai.as_ref(), &query, field).await;

    Ok(Json(ScanJobsResponse {
        success: true,
        jobs: result.data,
        source: result.source,
        message: "Job market scanned successfully",
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecommendationsRequest {
    pub career_field: String,
    pub experience_level: ExperienceLevel,
    pub location: Option<String>,
}

/// POST /api/job-recommendations
pub async fn handle_job_recommendations(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<JobRecommendationsRequest>,
) -> Result<Json<Sourced<JobRecommendations>>, AppError> {
    let location = req
        .location
        .unwrap_or_else(|| state.config.default_location.clone());
    let career_field = if req.career_field.trim().is_empty() {
        CareerField::SoftwareEngineering.label().to_string()
    } else {
        req.career_field
    };

    info!(
        "Getting job recommendations for {} ({}) in {}",
        career_field, req.experience_level, location
    );
    let recs = recommendations::job_recommendations(
        state.ai.as_ref(),
        &career_field,
        req.experience_level,
        &location,
    )
    .await;
    Ok(Json(recs))
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub location: Option<String>,
}

/// GET /api/market-insights/:careerField
pub async fn handle_market_insights(
    State(state): State<AppState>,
    Path(career_field): Path<String>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<Sourced<MarketInsights>>, AppError> {
    let location = params
        .location
        .unwrap_or_else(|| state.config.default_location.clone());
    let insights = insights::market_insights(state.ai.as_ref(), &career_field, &location).await;
    Ok(Json(insights))
}
