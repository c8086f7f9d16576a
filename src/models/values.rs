use serde::{Deserialize, Serialize};

/// The three clinical markers the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Hemoglobin,
    BloodSugar,
    Cholesterol,
}

impl Marker {
    pub const ALL: [Marker; 3] = [Marker::Hemoglobin, Marker::BloodSugar, Marker::Cholesterol];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "hemoglobin",
            Self::BloodSugar => "blood_sugar",
            Self::Cholesterol => "cholesterol",
        }
    }

    /// Human-readable name used in validation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "Hemoglobin",
            Self::BloodSugar => "Blood sugar",
            Self::Cholesterol => "Cholesterol",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "g/dL",
            Self::BloodSugar | Self::Cholesterol => "mg/dL",
        }
    }

    /// Whether a higher reading is clinically better (only hemoglobin).
    pub fn higher_is_better(&self) -> bool {
        matches!(self, Self::Hemoglobin)
    }
}

/// Sparse set of extracted measurements for one report.
///
/// Unextracted markers are `None`, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueSet {
    pub hemoglobin: Option<f64>,
    pub blood_sugar: Option<f64>,
    pub cholesterol: Option<f64>,
}

impl ValueSet {
    pub fn new(hemoglobin: Option<f64>, blood_sugar: Option<f64>, cholesterol: Option<f64>) -> Self {
        Self {
            hemoglobin,
            blood_sugar,
            cholesterol,
        }
    }

    pub fn get(&self, marker: Marker) -> Option<f64> {
        match marker {
            Marker::Hemoglobin => self.hemoglobin,
            Marker::BloodSugar => self.blood_sugar,
            Marker::Cholesterol => self.cholesterol,
        }
    }

    pub fn with(mut self, marker: Marker, value: f64) -> Self {
        match marker {
            Marker::Hemoglobin => self.hemoglobin = Some(value),
            Marker::BloodSugar => self.blood_sugar = Some(value),
            Marker::Cholesterol => self.cholesterol = Some(value),
        }
        self
    }

    /// Present markers with their values, in canonical order.
    pub fn present(&self) -> impl Iterator<Item = (Marker, f64)> + '_ {
        Marker::ALL
            .into_iter()
            .filter_map(move |m| self.get(m).map(|v| (m, v)))
    }

    pub fn found_count(&self) -> usize {
        self.present().count()
    }

    pub fn is_empty(&self) -> bool {
        self.found_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fully_absent() {
        let values = ValueSet::default();
        assert!(values.is_empty());
        assert_eq!(values.found_count(), 0);
        for marker in Marker::ALL {
            assert_eq!(values.get(marker), None);
        }
    }

    #[test]
    fn with_sets_only_the_named_marker() {
        let values = ValueSet::default().with(Marker::BloodSugar, 95.0);
        assert_eq!(values.blood_sugar, Some(95.0));
        assert_eq!(values.hemoglobin, None);
        assert_eq!(values.cholesterol, None);
        assert_eq!(values.found_count(), 1);
    }

    #[test]
    fn present_keeps_canonical_order() {
        let values = ValueSet::new(Some(13.0), None, Some(180.0));
        let markers: Vec<Marker> = values.present().map(|(m, _)| m).collect();
        assert_eq!(markers, vec![Marker::Hemoglobin, Marker::Cholesterol]);
    }

    #[test]
    fn absent_markers_serialize_as_null() {
        let values = ValueSet::new(Some(13.5), None, None);
        let json = serde_json::to_value(values).unwrap();
        assert_eq!(json["hemoglobin"], 13.5);
        assert!(json["blood_sugar"].is_null());
        assert!(json["cholesterol"].is_null());
    }

    #[test]
    fn marker_metadata() {
        assert_eq!(Marker::BloodSugar.as_str(), "blood_sugar");
        assert_eq!(Marker::Hemoglobin.unit(), "g/dL");
        assert_eq!(Marker::Cholesterol.unit(), "mg/dL");
        assert!(Marker::Hemoglobin.higher_is_better());
        assert!(!Marker::Cholesterol.higher_is_better());
    }
}
