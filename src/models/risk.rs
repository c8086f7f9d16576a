use serde::{Deserialize, Serialize};

use super::enums::RiskTier;

/// Five-step band a 0-100 score falls into. Drives message and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Borderline,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    /// Inclusive lower bounds, checked from the top.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Critical,
            60..=79 => Self::High,
            40..=59 => Self::Medium,
            20..=39 => Self::Borderline,
            _ => Self::Low,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL - Immediate medical attention required",
            Self::High => "HIGH RISK - Consult doctor urgently",
            Self::Medium => "MEDIUM RISK - Schedule checkup soon",
            Self::Borderline => "BORDERLINE - Monitor closely",
            Self::Low => "LOW RISK - Maintain healthy habits",
        }
    }

    /// Red (highest risk) to green (lowest).
    pub fn color(&self) -> &'static str {
        match self {
            Self::Critical => "#dc2626",
            Self::High => "#ea580c",
            Self::Medium => "#f59e0b",
            Self::Borderline => "#eab308",
            Self::Low => "#16a34a",
        }
    }
}

/// Scored outcome for one analyzed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub tier: RiskTier,
    pub score: u8,
    pub message: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(RiskBand::from_score(100), RiskBand::Critical);
        assert_eq!(RiskBand::from_score(80), RiskBand::Critical);
        assert_eq!(RiskBand::from_score(79), RiskBand::High);
        assert_eq!(RiskBand::from_score(60), RiskBand::High);
        assert_eq!(RiskBand::from_score(59), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(40), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(39), RiskBand::Borderline);
        assert_eq!(RiskBand::from_score(20), RiskBand::Borderline);
        assert_eq!(RiskBand::from_score(19), RiskBand::Low);
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
    }

    #[test]
    fn colors_are_distinct() {
        let bands = [
            RiskBand::Low,
            RiskBand::Borderline,
            RiskBand::Medium,
            RiskBand::High,
            RiskBand::Critical,
        ];
        for (i, a) in bands.iter().enumerate() {
            for b in &bands[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
