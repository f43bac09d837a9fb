//! Synthetic series generation
//!
//! Builds a monthly historical window ending at an anchor month and a
//! forecast window extrapolated from its last sample. Every metric follows a
//! [`MetricProfile`]: a base level, an optional seasonal sine, a linear trend
//! scaled by a country factor, uniform noise and a clamp.

use std::f64::consts::PI;

use analysis_api::country_factors;
use analysis_spi::{
    AnalysisError, CountryFactors, GeneratedSeries, MetricKind, MetricSample, RandomSource, Result,
};
use chrono::{Datelike, Months, NaiveDate};

/// Lowest confidence assigned to a forecast sample.
pub const MIN_FORECAST_CONFIDENCE: f64 = 0.3;

/// Range a generated value is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    Unbounded,
    NonNegative,
    /// `[0, 100]`
    Percent,
}

impl Bounds {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Bounds::Unbounded => value,
            Bounds::NonNegative => value.max(0.0),
            Bounds::Percent => value.clamp(0.0, 100.0),
        }
    }
}

/// Which country factor scales a metric's trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendFactor {
    Temperature,
    AirQuality,
    Deforestation,
    /// Trend is the same for every country.
    Fixed,
}

impl TrendFactor {
    pub fn pick(&self, factors: &CountryFactors) -> f64 {
        match self {
            TrendFactor::Temperature => factors.temperature_trend,
            TrendFactor::AirQuality => factors.air_quality_trend,
            TrendFactor::Deforestation => factors.deforestation_trend,
            TrendFactor::Fixed => 1.0,
        }
    }
}

/// Generation parameters of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProfile {
    pub base: f64,
    pub seasonal_amplitude: f64,
    /// Phase offset of the seasonal sine, in radians.
    pub seasonal_phase: f64,
    /// Change over the whole historical window before the country factor.
    pub trend_scale: f64,
    pub trend_factor: TrendFactor,
    /// Full width of the uniform noise band.
    pub noise: f64,
    /// Per-month drift of forecast samples before the country factor.
    pub forecast_step: f64,
    pub bounds: Bounds,
}

impl MetricProfile {
    /// Value at calendar month `month0` (0 = January), `progress` in `[0, 1]`
    /// through the historical window.
    pub fn historical_value(
        &self,
        month0: u32,
        progress: f64,
        factors: &CountryFactors,
        rng: &mut dyn RandomSource,
    ) -> f64 {
        let seasonal = self.seasonal_amplitude
            * (2.0 * PI * f64::from(month0) / 12.0 + self.seasonal_phase).sin();
        let trend = progress * self.trend_scale * self.trend_factor.pick(factors);
        self.bounds
            .apply(self.base + seasonal + trend + rng.centered(self.noise))
    }

    /// Value `step` months past `last`, with a noise band of width `uncertainty`.
    pub fn forecast_value(
        &self,
        last: f64,
        step: u32,
        uncertainty: f64,
        factors: &CountryFactors,
        rng: &mut dyn RandomSource,
    ) -> f64 {
        let drift = f64::from(step) * self.forecast_step * self.trend_factor.pick(factors);
        self.bounds.apply(last + drift + rng.centered(uncertainty))
    }
}

/// Generation profile for a metric.
pub fn metric_profile(kind: MetricKind) -> MetricProfile {
    let flat = MetricProfile {
        base: 0.0,
        seasonal_amplitude: 0.0,
        seasonal_phase: 0.0,
        trend_scale: 0.0,
        trend_factor: TrendFactor::Fixed,
        noise: 0.0,
        forecast_step: 0.0,
        bounds: Bounds::Percent,
    };
    match kind {
        MetricKind::Temperature => MetricProfile {
            base: 20.0,
            seasonal_amplitude: 8.0,
            trend_scale: 2.0,
            trend_factor: TrendFactor::Temperature,
            noise: 4.0,
            forecast_step: 0.08,
            bounds: Bounds::Unbounded,
            ..flat
        },
        MetricKind::Humidity => MetricProfile {
            base: 60.0,
            seasonal_amplitude: 15.0,
            seasonal_phase: PI / 2.0,
            noise: 12.0,
            ..flat
        },
        MetricKind::AirQuality => MetricProfile {
            base: 80.0,
            trend_scale: 20.0,
            trend_factor: TrendFactor::AirQuality,
            noise: 25.0,
            forecast_step: 1.5,
            bounds: Bounds::NonNegative,
            ..flat
        },
        MetricKind::Deforestation => MetricProfile {
            base: 15.0,
            trend_scale: 8.0,
            trend_factor: TrendFactor::Deforestation,
            noise: 4.0,
            forecast_step: 0.2,
            ..flat
        },
        MetricKind::CarbonEmission => MetricProfile {
            base: 50.0,
            trend_scale: 12.0,
            noise: 8.0,
            forecast_step: 0.4,
            bounds: Bounds::NonNegative,
            ..flat
        },
        MetricKind::WaterQuality => MetricProfile {
            base: 75.0,
            trend_scale: -10.0,
            noise: 10.0,
            forecast_step: -0.3,
            ..flat
        },
        MetricKind::Biodiversity => MetricProfile {
            base: 70.0,
            trend_scale: -8.0,
            noise: 8.0,
            forecast_step: -0.2,
            ..flat
        },
        MetricKind::SafetyScore => MetricProfile {
            base: 75.0,
            trend_scale: -15.0,
            noise: 12.0,
            forecast_step: -0.6,
            ..flat
        },
    }
}

/// Confidence of the forecast sample `step` months ahead.
pub fn forecast_confidence(step: u32) -> f64 {
    (0.95 - f64::from(step) * 0.08).max(MIN_FORECAST_CONFIDENCE)
}

/// Builds historical and forecast windows of synthetic samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesGenerator;

impl SeriesGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate `time_range + 1` historical samples ending at the month of
    /// `anchor`, followed by `horizon` forecast samples.
    pub fn generate(
        &self,
        country_code: &str,
        time_range: u32,
        horizon: u32,
        anchor: NaiveDate,
        rng: &mut dyn RandomSource,
    ) -> Result<GeneratedSeries> {
        if time_range == 0 {
            return Err(AnalysisError::invalid_parameter(
                "timeRange",
                "must be at least 1",
            ));
        }

        let factors = country_factors(country_code);
        let anchor = first_of_month(anchor)?;
        // Both window ends must be representable before anything is allocated.
        anchor
            .checked_sub_months(Months::new(time_range))
            .ok_or_else(|| AnalysisError::DateOutOfRange(format!("{time_range} months before {anchor}")))?;
        anchor
            .checked_add_months(Months::new(horizon))
            .ok_or_else(|| AnalysisError::DateOutOfRange(format!("{horizon} months after {anchor}")))?;

        let mut historical = Vec::with_capacity(time_range as usize + 1);
        for back in (0..=time_range).rev() {
            let date = anchor
                .checked_sub_months(Months::new(back))
                .ok_or_else(|| AnalysisError::DateOutOfRange(format!("{back} months before {anchor}")))?;
            let progress = f64::from(time_range - back) / f64::from(time_range);

            let mut sample = MetricSample::historical(date);
            for kind in MetricKind::ALL {
                *kind.slot_mut(&mut sample) =
                    metric_profile(kind).historical_value(date.month0(), progress, &factors, rng);
            }
            historical.push(sample);
        }

        let mut predictions = Vec::with_capacity(horizon as usize);
        if let Some(last) = historical.last() {
            for step in 1..=horizon {
                let date = anchor
                    .checked_add_months(Months::new(step))
                    .ok_or_else(|| AnalysisError::DateOutOfRange(format!("{step} months after {anchor}")))?;
                let confidence = forecast_confidence(step);
                let uncertainty = (1.0 - confidence) * 15.0;

                let mut sample = MetricSample::forecast(date, confidence);
                for kind in MetricKind::ALL {
                    *kind.slot_mut(&mut sample) = metric_profile(kind).forecast_value(
                        kind.value_of(last),
                        step,
                        uncertainty,
                        &factors,
                        rng,
                    );
                }
                predictions.push(sample);
            }
        }

        Ok(GeneratedSeries {
            historical,
            predictions,
        })
    }
}

fn first_of_month(date: NaiveDate) -> Result<NaiveDate> {
    date.with_day(1)
        .ok_or_else(|| AnalysisError::DateOutOfRange(date.to_string()))
}
