//! Risk tier classification boundary.
//!
//! The tier comes from an opaque model behind the `Classifier` trait. Missing
//! markers are replaced by population-normal values here and only here; the
//! scorer and validator always see the original sparse ValueSet.

use thiserror::Error;

use crate::models::{RiskTier, ValueSet};

/// Population-normal stand-ins for markers absent from a report.
pub const DEFAULT_HEMOGLOBIN: f64 = 14.0;
pub const DEFAULT_BLOOD_SUGAR: f64 = 100.0;
pub const DEFAULT_CHOLESTEROL: f64 = 190.0;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}

/// Maps a full (defaulted) marker triple to a risk tier.
pub trait Classifier: Send + Sync {
    fn classify(
        &self,
        hemoglobin: f64,
        blood_sugar: f64,
        cholesterol: f64,
    ) -> Result<RiskTier, ClassifyError>;
}

/// Dense classifier input with defaults substituted for absent markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierInput {
    pub hemoglobin: f64,
    pub blood_sugar: f64,
    pub cholesterol: f64,
}

impl ClassifierInput {
    pub fn from_values(values: &ValueSet) -> Self {
        Self {
            hemoglobin: values.hemoglobin.unwrap_or(DEFAULT_HEMOGLOBIN),
            blood_sugar: values.blood_sugar.unwrap_or(DEFAULT_BLOOD_SUGAR),
            cholesterol: values.cholesterol.unwrap_or(DEFAULT_CHOLESTEROL),
        }
    }
}

/// Classify a sparse ValueSet. The single place defaults are applied.
pub fn classify_values(
    classifier: &dyn Classifier,
    values: &ValueSet,
) -> Result<RiskTier, ClassifyError> {
    let input = ClassifierInput::from_values(values);
    classifier.classify(input.hemoglobin, input.blood_sugar, input.cholesterol)
}

/// Deterministic point-based classifier.
///
/// Reproduces the labelling rules the risk model was trained on:
/// hemoglobin < 12 (+2) or < 13.5 (+1); blood sugar > 140 (+3) or > 110 (+1);
/// cholesterol > 240 (+3) or > 200 (+1). Up to 2 points is Low, up to 4 Medium,
/// anything above High.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdClassifier;

impl ThresholdClassifier {
    fn points(hemoglobin: f64, blood_sugar: f64, cholesterol: f64) -> u32 {
        let mut points = 0;

        if hemoglobin < 12.0 {
            points += 2;
        } else if hemoglobin < 13.5 {
            points += 1;
        }

        if blood_sugar > 140.0 {
            points += 3;
        } else if blood_sugar > 110.0 {
            points += 1;
        }

        if cholesterol > 240.0 {
            points += 3;
        } else if cholesterol > 200.0 {
            points += 1;
        }

        points
    }
}

impl Classifier for ThresholdClassifier {
    fn classify(
        &self,
        hemoglobin: f64,
        blood_sugar: f64,
        cholesterol: f64,
    ) -> Result<RiskTier, ClassifyError> {
        let tier = match Self::points(hemoglobin, blood_sugar, cholesterol) {
            0..=2 => RiskTier::Low,
            3..=4 => RiskTier::Medium,
            _ => RiskTier::High,
        };
        Ok(tier)
    }
}
