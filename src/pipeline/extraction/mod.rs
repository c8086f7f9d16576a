//! Clinical value extraction from free report text.
//!
//! `extract` is the pure rule-table pass. `sanitize_report_text` and
//! `correct_label_terms` are optional pre-steps the processor applies
//! depending on where the text came from.

pub mod label_correction;
pub mod rules;
pub mod sanitize;

pub use label_correction::correct_label_terms;
pub use rules::{ExtractionRule, EXTRACTION_RULES};
pub use sanitize::sanitize_report_text;

use crate::models::ValueSet;

/// Extract hemoglobin, blood sugar and cholesterol readings from report text.
///
/// Matching is case-insensitive. For each marker the first rule (in priority
/// order) that matches anywhere in the text wins. Markers without a match
/// stay absent.
pub fn extract(text: &str) -> ValueSet {
    let folded = text.to_lowercase();
    let mut values = ValueSet::default();

    for rule in EXTRACTION_RULES.iter() {
        if values.get(rule.marker).is_some() {
            continue;
        }

        let Some(captures) = rule.regex.captures(&folded) else {
            continue;
        };

        match captures[1].parse::<f64>() {
            Ok(value) => {
                tracing::debug!(
                    marker = rule.marker.as_str(),
                    label = rule.label,
                    "Extraction rule matched"
                );
                values = values.with(rule.marker, value);
            }
            Err(e) => {
                tracing::debug!(label = rule.label, error = %e, "Unparseable reading skipped");
            }
        }
    }

    values
}
