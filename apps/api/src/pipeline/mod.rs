//! One analysis run over a stored upload: extract → scan → gap → render.
//!
//! The run carries its own progress trail. Provider failures mark a stage
//! as a warning and the run continues on fallback data; only a bad upload
//! handle, an unreadable file or a template failure stops it.

pub mod handlers;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::ai_client::AiProvider;
use crate::errors::AppError;
use crate::fallback::CareerField;
use crate::gap::{analyze_gaps, analyze_skills, GapScorer};
use crate::intake::{resolve_handle, UploadError};
use crate::market::{scan_market, JobQuery};
use crate::models::{
    CareerProfile, DataSource, GapAnalysis, JobMarketData, JobMarketSummary, SkillsAnalysis,
    Sourced,
};
use crate::profile::{fallback_profile, process_cv};
use crate::render::progress::{Progress, ProgressError, Stage, Step, StepStatus};
use crate::render::{radar_chart, RadarChart, RenderError, RenderedFragments, Renderer};

/// What a run does beyond the core chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOptions {
    /// Adds market snapshot, text preview and the enhanced skills analysis.
    pub enhanced: bool,
    pub location: String,
    /// Searches this role instead of the profile's job titles.
    pub target_role: Option<String>,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Failed to read upload {handle}: {source}")]
    Read {
        handle: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Progress(#[from] ProgressError),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Upload(e) => AppError::Upload(e),
            PipelineError::Read { handle, source } => AppError::ProcessingFailed {
                message: "Failed to process CV".to_string(),
                details: source.to_string(),
                fallback: json!({ "extractedData": fallback_profile(&handle) }),
            },
            PipelineError::Render(e) => AppError::Render(e),
            PipelineError::Progress(e) => AppError::Progress(e),
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRun {
    pub id: Uuid,
    pub filename: String,
    pub started_at: DateTime<Utc>,
    pub options: PipelineOptions,
    pub progress: Progress,
    pub profile: Sourced<CareerProfile>,
    pub job_market: Sourced<JobMarketSummary>,
    pub gap_analysis: Sourced<GapAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_analysis: Option<Sourced<SkillsAnalysis>>,
    pub fragments: RenderedFragments,
    pub chart: RadarChart,
}

/// Collaborators a run calls into.
#[derive(Clone, Copy)]
pub struct PipelineDeps<'a> {
    pub ai: &'a dyn AiProvider,
    pub scorer: &'a dyn GapScorer,
    pub renderer: &'a Renderer,
}

/// Run-scoped state threaded through the stages.
struct RunContext<'a> {
    deps: PipelineDeps<'a>,
    options: &'a PipelineOptions,
    progress: Progress,
}

impl RunContext<'_> {
    fn begin(&mut self, stage: Stage) -> Result<(), ProgressError> {
        self.progress.set_stage(stage, StepStatus::Active)
    }

    fn finish(&mut self, stage: Stage, source: DataSource) -> Result<(), ProgressError> {
        self.progress.finish_stage(stage, source)
    }

    async fn extract(&mut self, path: &Path, handle: &str) -> Result<Sourced<CareerProfile>, PipelineError> {
        self.begin(Stage::Extract)?;
        let profile = process_cv(
            self.deps.ai,
            path,
            handle,
            self.options.enhanced,
            &self.options.location,
        )
        .await;

        match profile {
            Ok(profile) => {
                self.finish(Stage::Extract, profile.source)?;
                Ok(profile)
            }
            Err(source) => {
                self.progress.set_stage(Stage::Extract, StepStatus::Error)?;
                Err(PipelineError::Read {
                    handle: handle.to_string(),
                    source,
                })
            }
        }
    }

    async fn scan(&mut self, profile: &CareerProfile) -> Result<Sourced<JobMarketSummary>, ProgressError> {
        self.begin(Stage::Scan)?;
        let location = &self.options.location;
        let (query, field) = match self.options.target_role.as_deref() {
            Some(role) => (JobQuery::for_field(role, location), CareerField::resolve(role)),
            None => (
                JobQuery::for_profile(profile, location),
                CareerField::resolve(&profile.detected_career_field),
            ),
        };

        let market = scan_market(self.deps.ai, &query, field).await;
        self.finish(Stage::Scan, market.source)?;
        Ok(market)
    }

    async fn gap(
        &mut self,
        profile: &CareerProfile,
        market: &JobMarketSummary,
    ) -> Result<(Sourced<GapAnalysis>, Option<Sourced<SkillsAnalysis>>), ProgressError> {
        self.begin(Stage::Gap)?;
        let market_data = JobMarketData::Summary(market.clone());
        let gaps = analyze_gaps(self.deps.ai, self.deps.scorer, profile, &market_data).await;

        let skills = if self.options.enhanced {
            Some(
                analyze_skills(
                    self.deps.ai,
                    self.deps.scorer,
                    profile,
                    self.options.target_role.as_deref(),
                    &self.options.location,
                )
                .await,
            )
        } else {
            None
        };

        let any_fallback = gaps.is_fallback() || skills.as_ref().is_some_and(Sourced::is_fallback);
        let source = if any_fallback {
            DataSource::Fallback
        } else {
            DataSource::Live
        };
        self.finish(Stage::Gap, source)?;
        Ok((gaps, skills))
    }
}

/// Runs the whole chain for the upload named by `handle`.
pub async fn run_analysis(
    deps: PipelineDeps<'_>,
    upload_dir: &Path,
    handle: &str,
    options: PipelineOptions,
) -> Result<AnalysisRun, PipelineError> {
    let id = Uuid::new_v4();
    let started_at = Utc::now();
    let mut ctx = RunContext {
        deps,
        options: &options,
        progress: Progress::new(),
    };
    info!("Analysis run {} started for {}", id, handle);

    ctx.progress.set_step(Step::Upload, StepStatus::Active)?;
    let path = match resolve_handle(upload_dir, handle).await {
        Ok(path) => path,
        Err(e) => {
            ctx.progress.set_step(Step::Upload, StepStatus::Error)?;
            return Err(e.into());
        }
    };
    ctx.progress.set_step(Step::Upload, StepStatus::Success)?;

    ctx.progress.set_step(Step::Analyze, StepStatus::Active)?;
    let profile = ctx.extract(&path, handle).await?;
    let job_market = ctx.scan(&profile.data).await?;
    let (gap_analysis, skills_analysis) = ctx.gap(&profile.data, &job_market.data).await?;
    let outcome = ctx.progress.analysis_outcome();
    ctx.progress.set_step(Step::Analyze, outcome)?;

    ctx.progress.set_step(Step::Results, StepStatus::Active)?;
    let fragments = match deps.renderer.results(&profile.data, &gap_analysis.data) {
        Ok(fragments) => fragments,
        Err(e) => {
            ctx.progress.set_step(Step::Results, StepStatus::Error)?;
            return Err(e.into());
        }
    };
    let chart = radar_chart(&gap_analysis.data);
    ctx.progress.set_step(Step::Results, StepStatus::Success)?;

    info!("Analysis run {} finished ({})", id, outcome);
    let progress = ctx.progress;
    Ok(AnalysisRun {
        id,
        filename: handle.to_string(),
        started_at,
        options,
        progress,
        profile,
        job_market,
        gap_analysis,
        skills_analysis,
        fragments,
        chart,
    })
}
