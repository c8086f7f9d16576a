use std::sync::LazyLock;

use regex::Regex;

use crate::models::Marker;

/// One recognition pattern: a label followed by `:`/whitespace and a number.
/// The first capture group is the numeric reading.
pub struct ExtractionRule {
    pub marker: Marker,
    pub label: &'static str,
    pub regex: Regex,
}

/// Label patterns per marker, in priority order. Compound labels allow any
/// run of whitespace between words. Patterns expect case-folded input.
const RULE_SPECS: &[(Marker, &str, &str)] = &[
    (Marker::Hemoglobin, "hemoglobin", r"hemoglobin[:\s]+(\d+\.?\d*)"),
    (Marker::Hemoglobin, "hb", r"hb[:\s]+(\d+\.?\d*)"),
    (Marker::Hemoglobin, "haemoglobin", r"haemoglobin[:\s]+(\d+\.?\d*)"),
    (Marker::Hemoglobin, "hgb", r"hgb[:\s]+(\d+\.?\d*)"),
    (Marker::BloodSugar, "blood sugar", r"blood\s*sugar[:\s]+(\d+\.?\d*)"),
    (Marker::BloodSugar, "glucose", r"glucose[:\s]+(\d+\.?\d*)"),
    (Marker::BloodSugar, "fasting glucose", r"fasting\s*glucose[:\s]+(\d+\.?\d*)"),
    (Marker::BloodSugar, "fbs", r"fbs[:\s]+(\d+\.?\d*)"),
    (Marker::BloodSugar, "blood glucose", r"blood\s*glucose[:\s]+(\d+\.?\d*)"),
    (Marker::Cholesterol, "cholesterol", r"cholesterol[:\s]+(\d+\.?\d*)"),
    (Marker::Cholesterol, "total cholesterol", r"total\s*cholesterol[:\s]+(\d+\.?\d*)"),
    (Marker::Cholesterol, "chol", r"chol[:\s]+(\d+\.?\d*)"),
];

/// Ordered rule table. Evaluated top to bottom; the first rule that matches
/// for a marker wins and later rules for that marker are skipped.
pub static EXTRACTION_RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    RULE_SPECS
        .iter()
        .map(|&(marker, label, pattern)| ExtractionRule {
            marker,
            label,
            regex: Regex::new(pattern).unwrap(),
        })
        .collect()
});
