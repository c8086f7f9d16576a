//! Continuous 0-100 risk score.
//!
//! Three weighted components:
//! - tier confidence (40%): fixed lookup on the classifier tier
//! - clinical severity index (30%): importance-weighted mean of per-marker
//!   deviation from the normal band, over present markers only
//! - abnormality count (30%): markers outside their normal band, out of 3
//!
//! The scorer never fails. An empty ValueSet degrades to severity 0 and
//! abnormality 0; rejecting such sets is the validator's job.

use serde::Serialize;

use crate::models::{Marker, RiskBand, RiskResult, RiskTier, ValueSet};

const TIER_WEIGHT: f64 = 0.4;
const SEVERITY_WEIGHT: f64 = 0.3;
const ABNORMALITY_WEIGHT: f64 = 0.3;

/// Tier confidence used when the tier is unknown.
const UNKNOWN_TIER_CONFIDENCE: f64 = 50.0;

/// Abnormality denominator. Fixed at the number of known markers, so absent
/// markers dilute the component rather than being ignored.
const MARKER_COUNT: f64 = 3.0;

/// Normal band and deviation spans for one marker.
///
/// Severity is linear from 0 at the band edge to 100 one span away, capped.
#[derive(Debug, Clone, Copy)]
struct SeverityProfile {
    lower: Option<(f64, f64)>,
    upper: (f64, f64),
    importance: f64,
}

impl SeverityProfile {
    fn for_marker(marker: Marker) -> Self {
        match marker {
            Marker::Hemoglobin => Self {
                lower: Some((12.0, 7.0)),
                upper: (17.0, 8.0),
                importance: 0.246,
            },
            Marker::BloodSugar => Self {
                lower: Some((70.0, 30.0)),
                upper: (110.0, 290.0),
                importance: 0.409,
            },
            // Low cholesterol is not flagged.
            Marker::Cholesterol => Self {
                lower: None,
                upper: (200.0, 200.0),
                importance: 0.345,
            },
        }
    }

    fn severity(&self, value: f64) -> f64 {
        if let Some((edge, span)) = self.lower {
            if value < edge {
                return ((edge - value) / span * 100.0).min(100.0);
            }
        }

        let (edge, span) = self.upper;
        if value > edge {
            return ((value - edge) / span * 100.0).min(100.0);
        }

        0.0
    }

    fn is_abnormal(&self, value: f64) -> bool {
        let below = self.lower.is_some_and(|(edge, _)| value < edge);
        below || value > self.upper.0
    }
}

/// Per-marker severity in [0, 100]. Inside the normal band (inclusive) it is 0.
pub fn marker_severity(marker: Marker, value: f64) -> f64 {
    SeverityProfile::for_marker(marker).severity(value)
}

/// Whether a reading lies outside its marker's normal band.
pub fn is_abnormal(marker: Marker, value: f64) -> bool {
    SeverityProfile::for_marker(marker).is_abnormal(value)
}

/// The three score components, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskComponents {
    pub tier_confidence: f64,
    pub severity_index: f64,
    pub abnormality: f64,
}

impl RiskComponents {
    pub fn compute(values: &ValueSet, tier: Option<RiskTier>) -> Self {
        Self {
            tier_confidence: tier.map_or(UNKNOWN_TIER_CONFIDENCE, |t| t.base_score()),
            severity_index: severity_index(values),
            abnormality: abnormality_score(values),
        }
    }

    /// Weighted blend, rounded and clamped to 0-100.
    pub fn combined(&self) -> u8 {
        let raw = TIER_WEIGHT * self.tier_confidence
            + SEVERITY_WEIGHT * self.severity_index
            + ABNORMALITY_WEIGHT * self.abnormality;
        raw.round().clamp(0.0, 100.0) as u8
    }
}

fn severity_index(values: &ValueSet) -> f64 {
    let (weighted, total_weight) = values.present().fold((0.0, 0.0), |(sum, weights), (marker, value)| {
        let profile = SeverityProfile::for_marker(marker);
        (
            sum + profile.importance * profile.severity(value),
            weights + profile.importance,
        )
    });

    if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    }
}

fn abnormality_score(values: &ValueSet) -> f64 {
    let abnormal = values
        .present()
        .filter(|&(marker, value)| is_abnormal(marker, value))
        .count();
    abnormal as f64 / MARKER_COUNT * 100.0
}

/// Risk score for a ValueSet. `None` tier scores as unknown (confidence 50).
pub fn compute_risk_score(values: &ValueSet, tier: Option<RiskTier>) -> u8 {
    RiskComponents::compute(values, tier).combined()
}

pub fn risk_message(score: u8) -> &'static str {
    RiskBand::from_score(score).message()
}

pub fn risk_color(score: u8) -> &'static str {
    RiskBand::from_score(score).color()
}

/// Score a validated ValueSet with its classifier tier.
pub fn score(values: &ValueSet, tier: RiskTier) -> RiskResult {
    let score = compute_risk_score(values, Some(tier));

    RiskResult {
        tier,
        score,
        message: risk_message(score).to_string(),
        color: risk_color(score).to_string(),
    }
}
