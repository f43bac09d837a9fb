//! Analysis orchestration
//!
//! Generates a series for a request, runs the trend, seasonal and anomaly
//! analyzers over its historical window and packages the combined report.

use analysis_api::{AnalysisConfig, AnalysisRequest, SummaryThresholds};
use analysis_spi::{
    AnalysisError, AnalysisSection, AnalysisSummary, AnomalyDetector, MetricKind, MetricSample,
    RandomSource, ReportMetadata, Result, SeasonalAnalyzer, SeasonalResult, Stability, Strength,
    TimeSeriesReport, TrendEstimator, TrendResult,
};
use chrono::{DateTime, Utc};

use crate::anomaly::ZScoreAnomalyDetector;
use crate::generator::SeriesGenerator;
use crate::random::ThreadRandom;
use crate::seasonal::MonthlySeasonalAnalyzer;
use crate::trend::LinearTrendEstimator;

/// Runs generation and analysis for one request at a time.
///
/// Holds no per-request state; a single instance can serve every request.
pub struct TimeSeriesAnalyzer {
    config: AnalysisConfig,
    generator: SeriesGenerator,
    trend: Box<dyn TrendEstimator>,
    seasonal: Box<dyn SeasonalAnalyzer>,
    anomaly: Box<dyn AnomalyDetector>,
}

impl TimeSeriesAnalyzer {
    /// Create an analyzer with the default implementations configured from `config`.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            generator: SeriesGenerator::new(),
            trend: Box::new(LinearTrendEstimator::from_config(config.trend)),
            seasonal: Box::new(MonthlySeasonalAnalyzer::from_config(config.seasonal)),
            anomaly: Box::new(ZScoreAnomalyDetector::from_config(config.anomaly)),
        }
    }

    pub fn with_trend_estimator(mut self, trend: Box<dyn TrendEstimator>) -> Self {
        self.trend = trend;
        self
    }

    pub fn with_seasonal_analyzer(mut self, seasonal: Box<dyn SeasonalAnalyzer>) -> Self {
        self.seasonal = seasonal;
        self
    }

    pub fn with_anomaly_detector(mut self, anomaly: Box<dyn AnomalyDetector>) -> Self {
        self.anomaly = anomaly;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run a request with thread-local randomness, anchored at the current time.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<TimeSeriesReport> {
        self.run(request, &mut ThreadRandom::new(), Utc::now())
    }

    /// Run a request with an explicit random source and clock reading.
    ///
    /// `now` anchors the historical window at its month and is reported as
    /// `generatedAt`. Either the full report or an error is returned.
    pub fn run(
        &self,
        request: &AnalysisRequest,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<TimeSeriesReport> {
        request.validate(&self.config.limits)?;

        tracing::debug!(
            country = %request.country_code,
            time_range = request.time_range,
            horizon = request.prediction_horizon,
            metric = %request.metric,
            "generating time series"
        );

        let series = self.generator.generate(
            &request.country_code,
            request.time_range,
            request.prediction_horizon,
            now.date_naive(),
            rng,
        )?;

        let analysis = self.analyze_series(&series.historical, request.metric);
        ensure_finite(&analysis)?;

        let data_points = series.len();
        tracing::debug!(
            data_points,
            anomalies = analysis.anomalies.len(),
            "time series analysis complete"
        );

        Ok(TimeSeriesReport {
            time_series: series.into_timeline(),
            analysis,
            metadata: ReportMetadata {
                country_code: request.country_code.clone(),
                time_range: request.time_range,
                prediction_horizon: request.prediction_horizon,
                metric: request.metric,
                generated_at: now,
                data_points,
            },
        })
    }

    /// Trend, seasonal and anomaly analysis of an existing historical series.
    pub fn analyze_series(&self, historical: &[MetricSample], metric: MetricKind) -> AnalysisSection {
        let trend = self.trend.estimate(&metric.values(historical));
        let seasonal = self.seasonal.analyze(historical, metric);
        let anomalies = self.anomaly.detect(historical, metric);
        let summary = summarize(&trend, &seasonal, anomalies.len(), &self.config.summary);

        AnalysisSection {
            trend,
            seasonal,
            anomalies,
            summary,
        }
    }
}

impl Default for TimeSeriesAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// Qualitative classification of the analysis results.
pub fn summarize(
    trend: &TrendResult,
    seasonal: &SeasonalResult,
    anomaly_count: usize,
    thresholds: &SummaryThresholds,
) -> AnalysisSummary {
    let rate = trend.rate.abs();
    let bucket = |value: f64, strong: f64, moderate: f64| {
        if value > strong {
            Strength::Strong
        } else if value > moderate {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    };

    let overall_stability =
        if anomaly_count < thresholds.max_stable_anomalies && rate < thresholds.max_stable_rate {
            Stability::Stable
        } else {
            Stability::Volatile
        };

    AnalysisSummary {
        trend_strength: bucket(rate, thresholds.strong_trend, thresholds.moderate_trend),
        seasonal_strength: bucket(
            seasonal.strength,
            thresholds.strong_seasonal,
            thresholds.moderate_seasonal,
        ),
        anomaly_count,
        overall_stability,
    }
}

fn ensure_finite(section: &AnalysisSection) -> Result<()> {
    let checks = [
        ("trend rate", section.trend.rate),
        ("trend confidence", section.trend.confidence),
        ("trend volatility", section.trend.volatility),
        ("seasonal amplitude", section.seasonal.amplitude),
        ("seasonal strength", section.seasonal.strength),
    ];
    match checks.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(AnalysisError::NumericalError(format!(
            "{name} is not finite ({value})"
        ))),
        None => Ok(()),
    }
}
