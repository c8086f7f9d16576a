//! Report analysis endpoints.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{AnalyzeMultipleRequest, ApiContext};
use crate::config::MAX_BATCH_REPORTS;
use crate::pipeline::{BatchAnalysis, ReportAnalysis, ReportSubmission};

/// `POST /api/analyze` — score a single report.
pub async fn single(
    State(ctx): State<ApiContext>,
    Json(submission): Json<ReportSubmission>,
) -> Result<Json<ReportAnalysis>, ApiError> {
    let analysis = ctx.analyzer.analyze(&submission)?;
    Ok(Json(analysis))
}

/// `POST /api/analyze-multiple` — score several reports and compare them.
pub async fn multiple(
    State(ctx): State<ApiContext>,
    Json(request): Json<AnalyzeMultipleRequest>,
) -> Result<Json<BatchAnalysis>, ApiError> {
    if request.reports.is_empty() {
        return Err(ApiError::BadRequest("No reports provided".into()));
    }
    if request.reports.len() > MAX_BATCH_REPORTS {
        return Err(ApiError::BadRequest(format!(
            "Too many reports: {} (max {MAX_BATCH_REPORTS})",
            request.reports.len()
        )));
    }

    let batch = ctx.analyzer.analyze_batch(&request.reports)?;
    Ok(Json(batch))
}
