//! End-to-end tests for the analysis facade
//!
//! Runs complete requests through the orchestrator using only the facade API.

use analysis_facade::{
    AnalysisConfig, AnalysisError, AnalysisRequest, EmptyMonthPolicy, MetricKind,
    SeasonalConfig, SeededRandom, Stability, TimeSeriesAnalyzer, TrendDirection,
};
use chrono::{DateTime, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 19, 8, 30, 0).unwrap()
}

#[test]
fn e2e_bangladesh_temperature_scenario() {
    let analyzer = TimeSeriesAnalyzer::default();
    let request = AnalysisRequest::builder()
        .country("BD")
        .time_range(12)
        .prediction_horizon(6)
        .metric(MetricKind::Temperature)
        .build();

    for seed in 0..10 {
        let report = analyzer
            .run(&request, &mut SeededRandom::new(seed), now())
            .unwrap();

        assert_eq!(report.metadata.data_points, 19);
        assert_eq!(report.time_series.iter().filter(|s| !s.prediction).count(), 13);
        assert_eq!(report.time_series.iter().filter(|s| s.prediction).count(), 6);
        assert!(matches!(
            report.analysis.trend.direction,
            TrendDirection::Increasing
                | TrendDirection::Decreasing
                | TrendDirection::Stable
                | TrendDirection::InsufficientData
        ));
        assert!(matches!(
            report.analysis.summary.overall_stability,
            Stability::Stable | Stability::Volatile
        ));
        assert_eq!(
            report.analysis.summary.anomaly_count,
            report.analysis.anomalies.len()
        );
    }
}

#[test]
fn e2e_report_json_shape() {
    let report = TimeSeriesAnalyzer::default()
        .run(&AnalysisRequest::default(), &mut SeededRandom::new(1), now())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["timeSeries"].is_array());
    assert_eq!(json["timeSeries"][0]["prediction"], false);
    assert_eq!(json["timeSeries"][13]["prediction"], true);
    assert!(json["timeSeries"][13]["confidence"].is_number());
    assert!(json["analysis"]["trend"]["direction"].is_string());
    assert!(json["analysis"]["seasonal"]["peakMonth"].is_number());
    assert!(json["analysis"]["anomalies"].is_array());
    assert!(json["analysis"]["summary"]["overallStability"].is_string());
    assert_eq!(json["metadata"]["countryCode"], "US");
    assert_eq!(json["metadata"]["timeRange"], 12);
    assert_eq!(json["metadata"]["predictionHorizon"], 6);
    assert_eq!(json["metadata"]["metric"], "temperature");
    assert_eq!(json["metadata"]["dataPoints"], 19);
    assert!(json["metadata"]["generatedAt"]
        .as_str()
        .unwrap()
        .starts_with("2025-10-19T08:30:00"));
}

#[test]
fn e2e_time_series_is_chronological() {
    let report = TimeSeriesAnalyzer::default()
        .run(
            &AnalysisRequest::new("CN", 30, 12, MetricKind::AirQuality),
            &mut SeededRandom::new(2),
            now(),
        )
        .unwrap();
    for pair in report.time_series.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    let last_historical = &report.time_series[30];
    assert_eq!(last_historical.date.to_string(), "2025-10-01");
    assert!(!last_historical.prediction);
}

#[test]
fn e2e_unknown_country_does_not_error() {
    let report = TimeSeriesAnalyzer::default()
        .run(
            &AnalysisRequest::new("ZZ", 12, 6, MetricKind::Deforestation),
            &mut SeededRandom::new(3),
            now(),
        )
        .unwrap();
    assert_eq!(report.metadata.country_code, "ZZ");
    assert_eq!(report.metadata.data_points, 19);
}

#[test]
fn e2e_every_metric_is_supported() {
    let analyzer = TimeSeriesAnalyzer::default();
    for metric in MetricKind::ALL {
        let report = analyzer
            .run(
                &AnalysisRequest::new("IN", 24, 6, metric),
                &mut SeededRandom::new(4),
                now(),
            )
            .unwrap();
        assert_eq!(report.metadata.metric, metric);
        assert!(report.analysis.trend.rate.is_finite());
    }
}

#[test]
fn e2e_zero_average_empty_month_policy_is_available() {
    let analyzer = TimeSeriesAnalyzer::new(
        AnalysisConfig::default().with_seasonal(SeasonalConfig::new(EmptyMonthPolicy::ZeroAverage)),
    );
    // Three historical months leave nine months empty.
    let report = analyzer
        .run(
            &AnalysisRequest::new("US", 2, 0, MetricKind::SafetyScore),
            &mut SeededRandom::new(5),
            now(),
        )
        .unwrap();
    // Empty months sit a full mean (~70) below the average.
    assert!(report.analysis.seasonal.amplitude > 50.0);
}

#[test]
fn e2e_invalid_request_yields_error_only() {
    let err = TimeSeriesAnalyzer::default()
        .run(
            &AnalysisRequest::new("US", 0, 6, MetricKind::Temperature),
            &mut SeededRandom::new(6),
            now(),
        )
        .unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidParameter { .. }));
}
