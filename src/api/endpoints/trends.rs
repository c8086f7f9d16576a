//! Trend comparison over already-scored reports.

use axum::Json;

use crate::api::types::TrendsRequest;
use crate::models::TrendAnalysis;

/// `POST /api/trends` — compare the earliest and latest of the given reports.
pub async fn compare(Json(request): Json<TrendsRequest>) -> Json<TrendAnalysis> {
    Json(crate::pipeline::trends(&request.reports))
}
