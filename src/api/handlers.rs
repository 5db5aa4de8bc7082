//! HTTP API handlers.

use std::path::PathBuf;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::Config;
use crate::error::ExportError;
use crate::export::{render_json, Artifact, ExportFormat};
use crate::metrics;
use crate::upstream::{Activity, ActivityClient};

/// 400 body when `num` or `format` fails validation.
const INVALID_PARAMS: &str = "Please provide a valid num and format query parameter.";
/// 400 body when `format` is present but not an accepted value.
const INVALID_FORMAT: &str = "Invalid format. Use \"json\", \"csv\", or \"console\".";
/// 500 body for render or delivery failures.
const SERVER_ERROR: &str = "Error fetching data.";
/// 200 body for the console format.
const CONSOLE_ACK: &str = "Data printed to console.";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the upstream activity endpoint.
    pub client: ActivityClient,
    /// Directory for temporary export artifacts.
    pub export_dir: PathBuf,
}

impl AppState {
    /// Create app state from config.
    pub fn new(config: &Config) -> Self {
        Self {
            client: ActivityClient::new(config),
            export_dir: config.export_dir(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Query parameters for the fetch endpoint.
///
/// Both fields arrive as raw strings so validation failures map to the
/// endpoint's own 400 bodies instead of the extractor's rejection.
#[derive(Debug, Deserialize)]
pub struct FetchParams {
    /// Number of upstream calls to perform.
    #[serde(default)]
    pub num: Option<String>,
    /// Requested output format.
    #[serde(default)]
    pub format: Option<String>,
}

/// Fetch handler: validate, run the fetch loop, dispatch on format.
pub async fn fetch(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> Response {
    // A positive integer count and a non-empty format, or no upstream calls.
    let num = params
        .num
        .as_deref()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|n| *n > 0);

    let (num, raw_format) = match (num, params.format.filter(|f| !f.is_empty())) {
        (Some(num), Some(format)) => (num, format),
        _ => return (StatusCode::BAD_REQUEST, INVALID_PARAMS).into_response(),
    };

    let format = match raw_format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(_) => return (StatusCode::BAD_REQUEST, INVALID_FORMAT).into_response(),
    };

    let activities = state.client.fetch_activities(num).await;
    info!(
        requested = num,
        collected = activities.len(),
        format = %format,
        "Aggregation complete"
    );

    match format {
        ExportFormat::Json => deliver(Artifact::json(&state.export_dir, &activities), format),
        ExportFormat::Csv => deliver(Artifact::csv(&state.export_dir, &activities), format),
        ExportFormat::Console => dump_to_console(&activities),
    }
}

/// Deliver a rendered artifact as a file attachment.
///
/// The artifact drops at the end of this function on every path, so the
/// temporary file is gone once the response body has been built.
fn deliver(artifact: Result<Artifact, ExportError>, format: ExportFormat) -> Response {
    let response = artifact.and_then(|artifact| {
        let bytes = artifact.contents()?;
        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, artifact.content_type().to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", artifact.download_name()),
                ),
            ],
            bytes,
        )
            .into_response())
    });

    match response {
        Ok(response) => {
            metrics::inc_exports(&format.to_string());
            response
        }
        Err(e) => {
            metrics::inc_export_failures();
            error!(format = %format, error = %e, "Export failed");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR).into_response()
        }
    }
}

/// Write the full sequence to the server log and acknowledge the caller.
fn dump_to_console(activities: &[Activity]) -> Response {
    match render_json(activities) {
        Ok(bytes) => {
            info!("{}", String::from_utf8_lossy(&bytes));
            metrics::inc_exports("console");
            (StatusCode::OK, CONSOLE_ACK).into_response()
        }
        Err(e) => {
            metrics::inc_export_failures();
            error!(error = %e, "Console dump failed");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_carries_config_values() {
        let config = Config {
            export_dir: Some(std::env::temp_dir().join("activity-export-tests")),
            ..Config::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.export_dir, std::env::temp_dir().join("activity-export-tests"));
        assert_eq!(state.client.upstream_url(), config.upstream_url);
    }

    #[tokio::test]
    async fn console_dump_acknowledges_empty_sequence() {
        let response = dump_to_console(&[]);
        assert_eq!(response.status(), StatusCode::OK);
    }
}
