use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde representation is the same string as `as_str`.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(RiskTier {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

str_enum!(TrendDirection {
    Improving => "improving",
    Worsening => "worsening",
    Stable => "stable",
});

str_enum!(TextSource {
    Typed => "typed",
    PdfText => "pdf",
    Ocr => "ocr",
});

impl RiskTier {
    /// Tier confidence component of the risk score (0-100).
    pub fn base_score(&self) -> f64 {
        match self {
            Self::Low => 15.0,
            Self::Medium => 50.0,
            Self::High => 85.0,
        }
    }
}

impl TextSource {
    /// OCR output carries character-level noise worth correcting before extraction.
    pub fn needs_ocr_cleanup(&self) -> bool {
        matches!(self, Self::Ocr)
    }
}

impl Default for TextSource {
    fn default() -> Self {
        Self::Typed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tier_round_trips_through_str() {
        for tier in [RiskTier::Low, RiskTier::Medium, RiskTier::High] {
            assert_eq!(RiskTier::from_str(tier.as_str()).unwrap(), tier);
        }
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = RiskTier::from_str("Severe").unwrap_err();
        assert!(err.to_string().contains("RiskTier"));
        assert!(err.to_string().contains("Severe"));
    }

    #[test]
    fn tier_base_scores() {
        assert_eq!(RiskTier::Low.base_score(), 15.0);
        assert_eq!(RiskTier::Medium.base_score(), 50.0);
        assert_eq!(RiskTier::High.base_score(), 85.0);
    }

    #[test]
    fn direction_serializes_lowercase() {
        let json = serde_json::to_string(&TrendDirection::Improving).unwrap();
        assert_eq!(json, "\"improving\"");
    }

    #[test]
    fn only_ocr_needs_correction() {
        assert!(TextSource::Ocr.needs_ocr_cleanup());
        assert!(!TextSource::Typed.needs_ocr_cleanup());
        assert!(!TextSource::PdfText.needs_ocr_cleanup());
        assert_eq!(TextSource::default(), TextSource::Typed);
    }
}
