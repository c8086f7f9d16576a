// Plausibility validation for extracted values.
// Runs between extraction and classification; any issue means the report is
// not scored. Issues are aggregated, never short-circuited.

use std::fmt;

use crate::models::{Marker, ValueSet};

/// Inclusive clinical plausibility bounds for a marker.
/// Readings outside these are almost certainly extraction or unit errors.
pub fn plausible_range(marker: Marker) -> (f64, f64) {
    match marker {
        Marker::Hemoglobin => (5.0, 25.0),
        Marker::BloodSugar => (40.0, 400.0),
        Marker::Cholesterol => (100.0, 400.0),
    }
}

/// One reason a ValueSet cannot be scored.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    OutOfRange { marker: Marker, min: f64, max: f64 },
    NoValuesFound,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { marker, min, max } => write!(
                f,
                "{} value out of valid range ({min}-{max} {})",
                marker.display_name(),
                marker.unit()
            ),
            Self::NoValuesFound => f.write_str(
                "No medical values found in the report. Please ensure the report \
                 contains Hemoglobin, Blood Sugar, or Cholesterol values.",
            ),
        }
    }
}

/// Collect every validation issue for a ValueSet.
///
/// Partial extraction is fine; only a fully empty set raises `NoValuesFound`.
pub fn validation_issues(values: &ValueSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut found_count = 0;

    for (marker, value) in values.present() {
        found_count += 1;
        let (min, max) = plausible_range(marker);
        if value < min || value > max {
            issues.push(ValidationIssue::OutOfRange { marker, min, max });
        }
    }

    if found_count == 0 {
        issues.push(ValidationIssue::NoValuesFound);
    }

    issues
}

/// Validate extracted values. An empty result means "valid".
pub fn validate(values: &ValueSet) -> Vec<String> {
    let issues = validation_issues(values);

    if !issues.is_empty() {
        tracing::warn!(
            issue_count = issues.len(),
            found_count = values.found_count(),
            "Extracted values failed validation"
        );
    }

    issues.iter().map(ToString::to_string).collect()
}
