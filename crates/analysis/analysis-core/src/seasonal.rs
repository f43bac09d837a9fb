//! Monthly seasonal analysis
//!
//! Averages a metric per calendar month and measures how far the monthly
//! averages spread around the overall mean.

use analysis_api::{EmptyMonthPolicy, SeasonalConfig};
use analysis_spi::{MetricKind, MetricSample, SeasonalAnalyzer, SeasonalResult};
use chrono::Datelike;

use crate::stats::{mean, population_std_dev};

/// Calendar-month seasonal analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlySeasonalAnalyzer {
    empty_months: EmptyMonthPolicy,
}

impl MonthlySeasonalAnalyzer {
    pub fn new(empty_months: EmptyMonthPolicy) -> Self {
        Self { empty_months }
    }

    pub fn from_config(config: SeasonalConfig) -> Self {
        Self::new(config.empty_months)
    }

    /// Average per calendar month; `None` for months without samples.
    pub fn monthly_averages(samples: &[MetricSample], metric: MetricKind) -> [Option<f64>; 12] {
        let mut sums = [0.0; 12];
        let mut counts = [0usize; 12];
        for sample in samples {
            let month = sample.date.month0() as usize;
            sums[month] += metric.value_of(sample);
            counts[month] += 1;
        }

        let mut averages = [None; 12];
        for month in 0..12 {
            if counts[month] > 0 {
                averages[month] = Some(sums[month] / counts[month] as f64);
            }
        }
        averages
    }
}

impl SeasonalAnalyzer for MonthlySeasonalAnalyzer {
    fn analyze(&self, samples: &[MetricSample], metric: MetricKind) -> SeasonalResult {
        if samples.is_empty() {
            return SeasonalResult::default();
        }

        let values = metric.values(samples);
        let overall = mean(&values);
        let std_dev = population_std_dev(&values, overall);

        let deviations: Vec<(u32, f64)> = Self::monthly_averages(samples, metric)
            .iter()
            .enumerate()
            .filter_map(|(month, average)| {
                let average = match (average, self.empty_months) {
                    (Some(avg), _) => *avg,
                    (None, EmptyMonthPolicy::ZeroAverage) => 0.0,
                    (None, EmptyMonthPolicy::Exclude) => return None,
                };
                Some((month as u32, average - overall))
            })
            .collect();

        // First month wins ties for the peak.
        let mut peak = deviations[0];
        let mut lowest = deviations[0].1;
        for &(month, deviation) in &deviations[1..] {
            if deviation > peak.1 {
                peak = (month, deviation);
            }
            lowest = lowest.min(deviation);
        }

        let amplitude = peak.1 - lowest;
        // Zero only for identical values; tiny spreads are still normalised.
        let constant = values.iter().all(|&v| v == values[0]);
        let ratio = amplitude / (2.0 * std_dev);
        let strength = if constant || !ratio.is_finite() {
            0.0
        } else {
            ratio
        };

        SeasonalResult {
            amplitude,
            peak_month: peak.0,
            strength,
        }
    }
}
