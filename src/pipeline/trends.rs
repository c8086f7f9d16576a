use crate::models::{
    Marker, OverallTrend, ScoredReport, TrendAnalysis, TrendDirection, TrendEntry, TrendReport,
};

pub const INSUFFICIENT_DATA_MESSAGE: &str = "Need at least 2 reports for trend analysis";

/// Direction of a change given whether higher readings are better.
fn direction(change: f64, higher_is_better: bool) -> TrendDirection {
    if change == 0.0 {
        TrendDirection::Stable
    } else if (change > 0.0) == higher_is_better {
        TrendDirection::Improving
    } else {
        TrendDirection::Worsening
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compare the earliest and latest report.
///
/// Reports are ordered by timestamp (stable for ties); intermediate reports do
/// not affect the result. Markers missing from either anchor are omitted. The
/// overall entry is always present and treats a rising score as worsening.
pub fn trends(reports: &[ScoredReport]) -> TrendAnalysis {
    let mut ordered: Vec<&ScoredReport> = reports.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);

    let [first, .., latest] = ordered.as_slice() else {
        return TrendAnalysis::Insufficient {
            message: INSUFFICIENT_DATA_MESSAGE.to_string(),
        };
    };

    let score_change = i32::from(latest.score) - i32::from(first.score);
    let mut report = TrendReport {
        hemoglobin: None,
        blood_sugar: None,
        cholesterol: None,
        overall: OverallTrend {
            change: score_change,
            direction: direction(f64::from(score_change), false),
            first_score: first.score,
            latest_score: latest.score,
        },
    };

    for marker in Marker::ALL {
        let (Some(from), Some(to)) = (first.values.get(marker), latest.values.get(marker)) else {
            continue;
        };

        let delta = to - from;
        report.set(
            marker,
            TrendEntry {
                change: round_one_decimal(delta),
                direction: direction(delta, marker.higher_is_better()),
                first: from,
                latest: to,
            },
        );
    }

    tracing::debug!(
        report_count = reports.len(),
        overall = report.overall.direction.as_str(),
        "Trends computed"
    );

    TrendAnalysis::Trends(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValueSet;
    use chrono::{Duration, TimeZone, Utc};

    fn report(day: i64, values: ValueSet, score: u8) -> ScoredReport {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        ScoredReport {
            values,
            score,
            timestamp: base + Duration::days(day),
        }
    }

    #[test]
    fn improving_hemoglobin_sugar_and_score() {
        let reports = vec![
            report(0, ValueSet::new(Some(11.0), Some(150.0), None), 70),
            report(30, ValueSet::new(Some(12.5), Some(130.0), None), 50),
        ];
        let analysis = trends(&reports);
        let trend = analysis.report().unwrap();

        let hb = trend.hemoglobin.as_ref().unwrap();
        assert_eq!(hb.change, 1.5);
        assert_eq!(hb.direction, TrendDirection::Improving);
        assert_eq!(hb.first, 11.0);
        assert_eq!(hb.latest, 12.5);

        let bs = trend.blood_sugar.as_ref().unwrap();
        assert_eq!(bs.change, -20.0);
        assert_eq!(bs.direction, TrendDirection::Improving);

        assert_eq!(trend.overall.change, -20);
        assert_eq!(trend.overall.direction, TrendDirection::Improving);
        assert_eq!(trend.overall.first_score, 70);
        assert_eq!(trend.overall.latest_score, 50);
    }

    #[test]
    fn single_report_is_insufficient() {
        let reports = vec![report(0, ValueSet::new(Some(13.0), None, None), 10)];
        match trends(&reports) {
            TrendAnalysis::Insufficient { message } => {
                assert_eq!(message, INSUFFICIENT_DATA_MESSAGE)
            }
            other => panic!("expected insufficient data, got {other:?}"),
        }
        assert!(trends(&[]).report().is_none());
    }

    #[test]
    fn sorts_by_timestamp_before_anchoring() {
        let reports = vec![
            report(60, ValueSet::new(None, None, Some(240.0)), 55),
            report(0, ValueSet::new(None, None, Some(200.0)), 30),
        ];
        let analysis = trends(&reports);
        let chol = analysis.report().unwrap().cholesterol.as_ref().unwrap();
        assert_eq!(chol.first, 200.0);
        assert_eq!(chol.latest, 240.0);
        assert_eq!(chol.change, 40.0);
        assert_eq!(chol.direction, TrendDirection::Worsening);
    }

    #[test]
    fn intermediate_reports_are_ignored() {
        let reports = vec![
            report(0, ValueSet::new(None, Some(120.0), None), 40),
            report(10, ValueSet::new(None, Some(300.0), None), 90),
            report(20, ValueSet::new(None, Some(120.0), None), 40),
        ];
        let analysis = trends(&reports);
        let trend = analysis.report().unwrap();
        let bs = trend.blood_sugar.as_ref().unwrap();
        assert_eq!(bs.change, 0.0);
        assert_eq!(bs.direction, TrendDirection::Stable);
        assert_eq!(trend.overall.direction, TrendDirection::Stable);
    }

    #[test]
    fn markers_missing_from_an_anchor_are_omitted() {
        let reports = vec![
            report(0, ValueSet::new(Some(13.0), Some(100.0), None), 20),
            report(5, ValueSet::new(None, Some(95.0), Some(210.0)), 25),
        ];
        let analysis = trends(&reports);
        let trend = analysis.report().unwrap();
        assert!(trend.hemoglobin.is_none());
        assert!(trend.cholesterol.is_none());
        assert!(trend.get(Marker::BloodSugar).is_some());

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("hemoglobin").is_none());
        assert!(json.get("blood_sugar").is_some());
        assert!(json.get("overall").is_some());
    }

    #[test]
    fn overall_entry_present_without_marker_overlap() {
        let reports = vec![
            report(0, ValueSet::new(Some(13.0), None, None), 20),
            report(5, ValueSet::new(None, None, Some(250.0)), 45),
        ];
        let analysis = trends(&reports);
        let trend = analysis.report().unwrap();
        assert_eq!(trend.overall.change, 25);
        assert_eq!(trend.overall.direction, TrendDirection::Worsening);
    }

    #[test]
    fn falling_hemoglobin_is_worsening() {
        let reports = vec![
            report(0, ValueSet::new(Some(14.2), None, None), 10),
            report(5, ValueSet::new(Some(12.1), None, None), 10),
        ];
        let analysis = trends(&reports);
        let hb = analysis.report().unwrap().hemoglobin.clone().unwrap();
        assert_eq!(hb.change, -2.1);
        assert_eq!(hb.direction, TrendDirection::Worsening);
    }

    #[test]
    fn direction_follows_unrounded_difference() {
        let reports = vec![
            report(0, ValueSet::new(Some(12.0), Some(100.0), None), 10),
            report(5, ValueSet::new(Some(12.04), Some(100.04), None), 10),
        ];
        let analysis = trends(&reports);
        let trend = analysis.report().unwrap();

        let hb = trend.hemoglobin.as_ref().unwrap();
        assert_eq!(hb.change, 0.0);
        assert_eq!(hb.direction, TrendDirection::Improving);

        let bs = trend.blood_sugar.as_ref().unwrap();
        assert_eq!(bs.change, 0.0);
        assert_eq!(bs.direction, TrendDirection::Worsening);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let reports = vec![
            report(3, ValueSet::new(None, None, Some(180.0)), 12),
            report(3, ValueSet::new(None, None, Some(230.0)), 35),
        ];
        let analysis = trends(&reports);
        let trend = analysis.report().unwrap();

        let chol = trend.cholesterol.as_ref().unwrap();
        assert_eq!(chol.first, 180.0);
        assert_eq!(chol.latest, 230.0);
        assert_eq!(trend.overall.first_score, 12);
        assert_eq!(trend.overall.latest_score, 35);
    }

    #[test]
    fn insufficient_serializes_as_message() {
        let json = serde_json::to_value(trends(&[])).unwrap();
        assert_eq!(json["message"], INSUFFICIENT_DATA_MESSAGE);
    }
}
