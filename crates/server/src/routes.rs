//! API route handlers

use analysis_facade::{AnalysisRequest, GeneratorLimits, MetricKind, SequenceRandom, TimeSeriesReport};
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use snapshot_core::{SnapshotQuery, SnapshotResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// `{ success: true, data }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Raw `/api/time-series` query. Values stay strings so malformed numbers
/// produce our own 400 body instead of the extractor's rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesParams {
    pub country: Option<String>,
    pub time_range: Option<String>,
    pub prediction_horizon: Option<String>,
    pub metric: Option<String>,
}

impl TimeSeriesParams {
    /// Apply defaults for missing or empty values and check the limits.
    pub fn into_request(self, limits: &GeneratorLimits) -> Result<AnalysisRequest, ApiError> {
        let defaults = AnalysisRequest::default();
        let request = AnalysisRequest {
            country_code: non_empty(self.country).unwrap_or(defaults.country_code),
            time_range: parse_count("timeRange", self.time_range, defaults.time_range)?,
            prediction_horizon: parse_count(
                "predictionHorizon",
                self.prediction_horizon,
                defaults.prediction_horizon,
            )?,
            metric: match non_empty(self.metric) {
                Some(name) => name.parse::<MetricKind>()?,
                None => defaults.metric,
            },
        };
        request.validate(limits)?;
        Ok(request)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotParams {
    pub region: Option<String>,
    pub time_range: Option<String>,
    pub country: Option<String>,
    pub layer: Option<String>,
    pub force: Option<String>,
}

impl From<SnapshotParams> for SnapshotQuery {
    fn from(params: SnapshotParams) -> Self {
        let defaults = SnapshotQuery::default();
        SnapshotQuery {
            region: non_empty(params.region).unwrap_or(defaults.region),
            time_range: non_empty(params.time_range).unwrap_or(defaults.time_range),
            country: non_empty(params.country).unwrap_or(defaults.country),
            layer: non_empty(params.layer).unwrap_or(defaults.layer),
            force: params.force.as_deref() == Some("1"),
        }
    }
}

pub async fn time_series(
    State(state): State<AppState>,
    Query(params): Query<TimeSeriesParams>,
) -> Result<Json<ApiResponse<TimeSeriesReport>>, ApiError> {
    let request = params.into_request(&state.analyzer.config().limits)?;
    let report = state.analyzer.analyze(&request)?;
    tracing::info!(
        country = %request.country_code,
        metric = %request.metric,
        data_points = report.metadata.data_points,
        "Generated time series analysis"
    );
    Ok(Json(ApiResponse::ok(report)))
}

pub async fn environmental_snapshot(
    State(state): State<AppState>,
    Query(params): Query<SnapshotParams>,
) -> Result<Json<SnapshotResponse>, ApiError> {
    let query = SnapshotQuery::from(params);
    let service = state.snapshots.clone();
    // Sources may block on I/O.
    let response = tokio::task::spawn_blocking(move || service.snapshot(&query))
        .await
        .map_err(|e| ApiError::SnapshotFailed(e.to_string()))?;
    Ok(Json(response))
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the analyzer run and is a snapshot source wired?
pub async fn readiness(State(state): State<AppState>) -> Json<serde_json::Value> {
    let probe = state.analyzer.run(
        &AnalysisRequest::default(),
        &mut SequenceRandom::constant(0.5),
        Utc::now(),
    );
    let analysis = match &probe {
        Ok(_) => serde_json::json!({ "name": "analysis", "status": "healthy" }),
        Err(e) => serde_json::json!({ "name": "analysis", "status": "unhealthy", "message": e.to_string() }),
    };
    let snapshot = serde_json::json!({
        "name": "snapshot_source",
        "status": "healthy",
        "message": state.snapshots.source_name()
    });
    Json(serde_json::json!({
        "status": if probe.is_ok() { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
        "checks": [analysis, snapshot]
    }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_count(name: &str, value: Option<String>, default: u32) -> Result<u32, ApiError> {
    match non_empty(value) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::InvalidQuery(format!("{name} must be a non-negative integer, got '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn state() -> AppState {
        AppState::new(&ServerConfig::default())
    }

    fn params(pairs: &[(&str, &str)]) -> TimeSeriesParams {
        let mut params = TimeSeriesParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "country" => params.country = value,
                "timeRange" => params.time_range = value,
                "predictionHorizon" => params.prediction_horizon = value,
                "metric" => params.metric = value,
                _ => panic!("unknown key {key}"),
            }
        }
        params
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let request = TimeSeriesParams::default()
            .into_request(&GeneratorLimits::default())
            .unwrap();
        assert_eq!(request, AnalysisRequest::default());

        let request = params(&[("country", ""), ("metric", " ")])
            .into_request(&GeneratorLimits::default())
            .unwrap();
        assert_eq!(request, AnalysisRequest::default());
    }

    #[test]
    fn test_explicit_values() {
        let request = params(&[
            ("country", "BD"),
            ("timeRange", "24"),
            ("predictionHorizon", "0"),
            ("metric", "airQuality"),
        ])
        .into_request(&GeneratorLimits::default())
        .unwrap();
        assert_eq!(request, AnalysisRequest::new("BD", 24, 0, MetricKind::AirQuality));
    }

    #[test]
    fn test_rejects_bad_input() {
        let limits = GeneratorLimits::new(36, 12);
        for bad in [
            params(&[("timeRange", "abc")]),
            params(&[("timeRange", "-3")]),
            params(&[("timeRange", "0")]),
            params(&[("timeRange", "37")]),
            params(&[("predictionHorizon", "13")]),
            params(&[("metric", "ozone")]),
        ] {
            let error = bad.into_request(&limits).unwrap_err();
            assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_snapshot_query_defaults_and_force() {
        let query = SnapshotQuery::from(SnapshotParams::default());
        assert_eq!(query, SnapshotQuery::default());

        let query = SnapshotQuery::from(SnapshotParams {
            region: Some("asia".to_string()),
            force: Some("1".to_string()),
            ..SnapshotParams::default()
        });
        assert_eq!(query.cache_key(), "asia|24h||all");
        assert!(query.force);

        let query = SnapshotQuery::from(SnapshotParams {
            force: Some("yes".to_string()),
            ..SnapshotParams::default()
        });
        assert!(!query.force);
    }

    #[tokio::test]
    async fn test_time_series_handler_success() {
        let response = time_series(
            State(state()),
            Query(params(&[("country", "BD"), ("timeRange", "12"), ("predictionHorizon", "6")])),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["timeSeries"].as_array().map(Vec::len), Some(19));
        assert_eq!(json["data"]["metadata"]["countryCode"], "BD");
        assert_eq!(json["data"]["metadata"]["dataPoints"], 19);
    }

    #[tokio::test]
    async fn test_time_series_handler_bad_request() {
        let response = time_series(State(state()), Query(params(&[("timeRange", "lots")])))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid query parameter");
        assert!(json["details"].as_str().unwrap().contains("timeRange"));
    }

    #[tokio::test]
    async fn test_snapshot_handler_caches() {
        let state = state();
        let first = environmental_snapshot(State(state.clone()), Query(SnapshotParams::default()))
            .await
            .into_response();
        assert_eq!(first.status(), StatusCode::OK);
        let first = body_json(first).await;
        assert_eq!(first["status"], "live");
        assert!(first.get("cached").is_none());

        let second = environmental_snapshot(State(state), Query(SnapshotParams::default()))
            .await
            .into_response();
        let second = body_json(second).await;
        assert_eq!(second["cached"], true);
        assert_eq!(second["metrics"], first["metrics"]);
    }

    #[tokio::test]
    async fn test_health_probes() {
        let live = liveness().await;
        assert_eq!(live.0["status"], "alive");

        let ready = readiness(State(state())).await;
        assert_eq!(ready.0["status"], "ready");
        assert_eq!(ready.0["checks"].as_array().map(Vec::len), Some(2));
    }
}
