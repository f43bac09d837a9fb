//! # leo-lab
//!
//! Command-line interface for the LEO environmental time-series analysis.

use analysis_facade::{
    country_factors, known_countries, AnalysisConfig, AnalysisRequest, CountryFactors,
    GeneratorLimits, MetricKind, SeededRandom, ThreadRandom, TimeSeriesAnalyzer, TimeSeriesReport,
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "leo-lab")]
#[command(about = "Environmental time-series analysis CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a series for a country and analyse it
    Analyze {
        /// Country code (BD, US, BR, IN, CN; others are neutral)
        #[arg(short, long, default_value = "US")]
        country: String,

        /// Historical window in months
        #[arg(short, long, default_value = "12")]
        time_range: u32,

        /// Forecast horizon in months
        #[arg(long, default_value = "6")]
        horizon: u32,

        /// Metric to analyse (temperature, humidity, airQuality, ...)
        #[arg(short, long, default_value = "temperature")]
        metric: String,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Largest accepted historical window
        #[arg(long, default_value = "120")]
        max_time_range: u32,

        /// Largest accepted forecast horizon
        #[arg(long, default_value = "60")]
        max_horizon: u32,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// List the country trend-factor table
    Countries,
}

/// Run analyze command
fn run_analyze(
    country: &str,
    time_range: u32,
    horizon: u32,
    metric: &str,
    seed: Option<u64>,
    limits: GeneratorLimits,
) -> CliResult<TimeSeriesReport> {
    let metric: MetricKind = metric.parse().map_err(|e| format!("{}", e))?;
    let request = AnalysisRequest::builder()
        .country(country)
        .time_range(time_range)
        .prediction_horizon(horizon)
        .metric(metric)
        .build();

    let analyzer = TimeSeriesAnalyzer::new(AnalysisConfig::default().with_limits(limits));
    let report = match seed {
        Some(seed) => analyzer.run(&request, &mut SeededRandom::new(seed), Utc::now()),
        None => analyzer.run(&request, &mut ThreadRandom::new(), Utc::now()),
    };
    report.map_err(|e| format!("Analysis failed: {}", e))
}

/// Write the report to a file or stdout
fn write_report(report: &TimeSeriesReport, output: Option<&Path>, pretty: bool) -> CliResult<()> {
    if let Some(path) = output {
        let file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        let written = if pretty {
            serde_json::to_writer_pretty(file, report)
        } else {
            serde_json::to_writer(file, report)
        };
        written.map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Report written to {:?}", path);
    } else {
        println!("{}", render(report, pretty)?);
    }
    Ok(())
}

fn render(report: &TimeSeriesReport, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.map_err(|e| format!("Failed to serialize report: {}", e))
}

fn countries_table() -> String {
    let mut lines = vec![format!(
        "{:<8} {:>12} {:>12} {:>14}",
        "Country", "Temperature", "Air quality", "Deforestation"
    )];
    let row = |code: &str, f: CountryFactors| {
        format!(
            "{:<8} {:>12.1} {:>12.1} {:>14.1}",
            code, f.temperature_trend, f.air_quality_trend, f.deforestation_trend
        )
    };
    lines.extend(known_countries().map(|(code, factors)| row(code, factors)));
    lines.push(row("(other)", country_factors("")));
    lines.join("\n")
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            country,
            time_range,
            horizon,
            metric,
            seed,
            max_time_range,
            max_horizon,
            output,
            pretty,
        } => run_analyze(
            &country,
            time_range,
            horizon,
            &metric,
            seed,
            GeneratorLimits::new(max_time_range, max_horizon),
        )
        .and_then(|report| write_report(&report, output.as_deref(), pretty)),

        Commands::Countries => {
            println!("{}", countries_table());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
