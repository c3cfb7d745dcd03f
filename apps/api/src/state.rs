use std::sync::Arc;

use crate::ai_client::AiProvider;
use crate::config::Config;
use crate::gap::GapScorer;
use crate::render::Renderer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Provider seam. Default: MistralClient.
    pub ai: Arc<dyn AiProvider>,
    pub config: Config,
    /// Pluggable gap scorer. Default: SubstringGapScorer.
    pub gap_scorer: Arc<dyn GapScorer>,
    pub renderer: Arc<Renderer>,
}
