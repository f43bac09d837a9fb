//! Data models for time-series analysis.

mod country;
mod metric;
mod report;
mod results;
mod sample;

pub use country::CountryFactors;
pub use metric::MetricKind;
pub use report::{
    AnalysisSection, AnalysisSummary, ReportMetadata, Stability, Strength, TimeSeriesReport,
};
pub use results::{AnomalyPoint, SeasonalResult, Severity, TrendDirection, TrendResult};
pub use sample::{GeneratedSeries, MetricSample};
