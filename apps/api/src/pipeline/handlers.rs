use axum::{extract::State, Json};
use serde::Deserialize;

use super::{run_analysis, AnalysisRun, PipelineDeps, PipelineOptions};
use crate::errors::{ApiJson, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRunRequest {
    pub filename: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub enhanced: Option<bool>,
}

/// POST /api/analysis-runs
pub async fn handle_create_run(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalysisRunRequest>,
) -> Result<Json<AnalysisRun>, AppError> {
    let options = PipelineOptions {
        enhanced: req.enhanced.unwrap_or(true),
        location: req
            .location
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| state.config.default_location.clone()),
        target_role: req.target_role.filter(|r| !r.trim().is_empty()),
    };
    let deps = PipelineDeps {
        ai: state.ai.as_ref(),
        scorer: state.gap_scorer.as_ref(),
        renderer: state.renderer.as_ref(),
    };

    let run = run_analysis(deps, &state.config.upload_dir, &req.filename, options).await?;
    Ok(Json(run))
}
