pub mod classify;
pub mod extraction;
pub mod processor;
pub mod scoring;
pub mod trends;
pub mod validation;

pub use classify::{classify_values, Classifier, ClassifierInput, ClassifyError, ThresholdClassifier};
pub use extraction::extract;
pub use processor::*;
pub use scoring::{compute_risk_score, risk_color, risk_message, score, RiskComponents};
pub use trends::trends;
pub use validation::{validate, validation_issues, ValidationIssue};
