use std::sync::Arc;

use crate::analysis::provider::ScoringProvider;
use crate::assessment::extract::ResumeTextExtractor;
use crate::config::Config;
use crate::store::AssessmentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory assessment store, constructed once at startup. A durable
    /// implementation would replace it behind the same methods.
    pub store: Arc<AssessmentStore>,
    /// Pluggable scoring provider. Production: `LlmScoringProvider`.
    /// Tests swap in a deterministic fake.
    pub scoring: Arc<dyn ScoringProvider>,
    /// PDF-to-text extraction seam, kept behind a trait so tests avoid
    /// shipping real PDF fixtures.
    pub extractor: Arc<dyn ResumeTextExtractor>,
    pub config: Config,
}
