use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::TrendDirection;
use super::values::{Marker, ValueSet};

/// One prior scored report, as supplied to the trend calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReport {
    pub values: ValueSet,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
}

/// Change of one marker between the earliest and latest report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub change: f64,
    pub direction: TrendDirection,
    pub first: f64,
    pub latest: f64,
}

/// Change of the overall risk score between the earliest and latest report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallTrend {
    pub change: i32,
    pub direction: TrendDirection,
    pub first_score: u8,
    pub latest_score: u8,
}

/// Per-marker trends; markers missing from either anchor are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hemoglobin: Option<TrendEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_sugar: Option<TrendEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<TrendEntry>,
    pub overall: OverallTrend,
}

impl TrendReport {
    pub fn get(&self, marker: Marker) -> Option<&TrendEntry> {
        match marker {
            Marker::Hemoglobin => self.hemoglobin.as_ref(),
            Marker::BloodSugar => self.blood_sugar.as_ref(),
            Marker::Cholesterol => self.cholesterol.as_ref(),
        }
    }

    pub(crate) fn set(&mut self, marker: Marker, entry: TrendEntry) {
        match marker {
            Marker::Hemoglobin => self.hemoglobin = Some(entry),
            Marker::BloodSugar => self.blood_sugar = Some(entry),
            Marker::Cholesterol => self.cholesterol = Some(entry),
        }
    }
}

/// Trend calculator output: either trends, or an informational message
/// when fewer than two reports were supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrendAnalysis {
    Trends(TrendReport),
    Insufficient { message: String },
}

impl TrendAnalysis {
    pub fn report(&self) -> Option<&TrendReport> {
        match self {
            Self::Trends(report) => Some(report),
            Self::Insufficient { .. } => None,
        }
    }
}
