//! Shared types for the HTTP layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::ScoredReport;
use crate::pipeline::{ReportAnalyzer, ReportSubmission};

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub analyzer: Arc<ReportAnalyzer>,
}

impl ApiContext {
    pub fn new(analyzer: Arc<ReportAnalyzer>) -> Self {
        Self { analyzer }
    }
}

/// Body of `POST /api/analyze-multiple`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeMultipleRequest {
    pub reports: Vec<ReportSubmission>,
}

/// Body of `POST /api/trends`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsRequest {
    pub reports: Vec<ScoredReport>,
}
