//! Report analysis orchestrator.
//!
//! Runs one report through (OCR cleanup and label correction) → extract →
//! validate → classify → score, or a batch of independent reports followed by
//! trend analysis. Holds no per-report state; one analyzer can serve any
//! number of concurrent callers.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::classify::{classify_values, Classifier, ClassifyError};
use super::extraction::{correct_label_terms, extract, sanitize_report_text};
use super::scoring::score;
use super::trends::trends;
use super::validation::validate;
use crate::models::{RiskResult, ScoredReport, TextSource, TrendAnalysis, ValueSet};

/// Characters of source text echoed back with each analysis.
const EXCERPT_CHARS: usize = 500;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No report text provided")]
    EmptyInput,

    #[error("Missing or invalid values: {}", .0.join(", "))]
    InvalidValues(Vec<String>),

    #[error("Classification failed: {0}")]
    Classifier(#[from] ClassifyError),

    #[error("No valid reports could be analyzed")]
    NoValidReports,
}

/// Raw report text handed in by the I/O layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSubmission {
    pub text: String,
    #[serde(default)]
    pub source: TextSource,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ReportSubmission {
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Result of analyzing one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub id: Uuid,
    pub label: Option<String>,
    pub values: ValueSet,
    pub risk: RiskResult,
    pub timestamp: DateTime<Utc>,
    pub excerpt: String,
}

impl ReportAnalysis {
    pub fn scored(&self) -> ScoredReport {
        ScoredReport {
            values: self.values,
            score: self.risk.score,
            timestamp: self.timestamp,
        }
    }
}

/// A batch member that could not be scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedReport {
    pub label: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub reports: Vec<ReportAnalysis>,
    pub skipped: Vec<SkippedReport>,
    pub trends: TrendAnalysis,
    pub total_reports: usize,
}

pub struct ReportAnalyzer {
    classifier: Arc<dyn Classifier>,
}

impl ReportAnalyzer {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Analyze one report. Validation failures are returned, never scored.
    pub fn analyze(&self, submission: &ReportSubmission) -> Result<ReportAnalysis, AnalysisError> {
        if submission.text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let text = if submission.source.needs_ocr_cleanup() {
            Cow::Owned(correct_label_terms(&sanitize_report_text(&submission.text)))
        } else {
            Cow::Borrowed(submission.text.as_str())
        };

        let values = extract(&text);
        tracing::debug!(
            found_count = values.found_count(),
            source = submission.source.as_str(),
            "Values extracted"
        );

        let errors = validate(&values);
        if !errors.is_empty() {
            return Err(AnalysisError::InvalidValues(errors));
        }

        let tier = classify_values(self.classifier.as_ref(), &values).map_err(|e| {
            tracing::error!(error = %e, "Classifier call failed");
            AnalysisError::from(e)
        })?;

        let risk = score(&values, tier);
        tracing::info!(
            score = risk.score,
            tier = tier.as_str(),
            found_count = values.found_count(),
            "Report scored"
        );

        Ok(ReportAnalysis {
            id: Uuid::new_v4(),
            label: submission.label.clone(),
            values,
            risk,
            timestamp: submission.timestamp.unwrap_or_else(Utc::now),
            excerpt: submission.text.chars().take(EXCERPT_CHARS).collect(),
        })
    }

    /// Analyze independent reports and compute trends over those that scored.
    ///
    /// A failing report is skipped, not fatal. Errors only when none succeed.
    pub fn analyze_batch(
        &self,
        submissions: &[ReportSubmission],
    ) -> Result<BatchAnalysis, AnalysisError> {
        let mut reports = Vec::with_capacity(submissions.len());
        let mut skipped = Vec::new();

        for (index, submission) in submissions.iter().enumerate() {
            match self.analyze(submission) {
                Ok(analysis) => reports.push(analysis),
                Err(e) => {
                    let label = submission
                        .label
                        .clone()
                        .unwrap_or_else(|| format!("report #{}", index + 1));
                    tracing::warn!(label = %label, error = %e, "Skipping report in batch");
                    skipped.push(SkippedReport {
                        label,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if reports.is_empty() {
            return Err(AnalysisError::NoValidReports);
        }

        let scored: Vec<ScoredReport> = reports.iter().map(ReportAnalysis::scored).collect();
        let trends = trends(&scored);

        tracing::info!(
            analyzed = reports.len(),
            skipped = skipped.len(),
            "Batch analysis complete"
        );

        Ok(BatchAnalysis {
            total_reports: reports.len(),
            reports,
            skipped,
            trends,
        })
    }
}
