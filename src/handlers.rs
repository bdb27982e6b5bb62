// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone text API handlers
//!
//! - Parsing zone text into typed records
//! - Generating zone text from records
//! - Health and metrics endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    generator::{generate_with_clock, GenerateOptions, InputRecord},
    metrics,
    parser::{parse, ParseOptions, ParseOutput},
    types::{ApiError, AppState},
};

/// Request to parse zone text
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    /// Zone file text
    pub zone: String,

    /// Parse options
    #[serde(default)]
    pub options: ParseOptions,
}

/// Request to generate zone text
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Records with `name`, `type`, optional `ttl` and `class`, and rdata fields
    #[schema(value_type = Vec<Object>)]
    pub records: Vec<InputRecord>,

    /// Generation options
    #[serde(default)]
    pub options: GenerateOptions,
}

/// Generated zone text
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Zone file text
    pub zone: String,

    /// Number of records written
    pub record_count: usize,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Build the API router (health, metrics, parse, generate)
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/zones/parse", post(parse_zone))
        .route("/zones/generate", post(generate_zone))
        .route("/health", get(health_check));

    Router::new()
        .route("/metrics", get(metrics_handler))
        .nest("/api/v1", api_routes)
        .with_state(state)
}

/// Parse zone text into typed records
#[utoipa::path(
    post,
    path = "/api/v1/zones/parse",
    request_body = ParseRequest,
    responses(
        (status = 200, description = "Records keyed by type, or a flat list when options.flatten is set"),
        (status = 400, description = "Invalid request")
    ),
    tag = "zones"
)]
pub async fn parse_zone(
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseOutput>, ApiError> {
    let Json(request) = payload.map_err(reject)?;
    info!("Parsing zone text ({} bytes)", request.zone.len());

    let output = parse(&request.zone, &request.options);

    match &output {
        ParseOutput::Grouped(groups) => {
            for (record_type, records) in groups.iter() {
                metrics::record_records("parse", record_type, records.len());
            }
        }
        ParseOutput::Flat(records) => {
            for record in records {
                metrics::record_records("parse", record.record_type(), 1);
            }
        }
    }

    info!("Parsed {} records", output.len());
    metrics::record_zone_operation("parse", true);

    Ok(Json(output))
}

/// Generate zone text from records
#[utoipa::path(
    post,
    path = "/api/v1/zones/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Zone text generated", body = GenerateResponse),
        (status = 400, description = "Invalid record")
    ),
    tag = "zones"
)]
pub async fn generate_zone(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload.map_err(reject)?;
    info!("Generating zone text for {} records", request.records.len());

    if let Some(idx) = request
        .records
        .iter()
        .position(|r| r.record_type.trim().is_empty())
    {
        error!("Record {} has no type", idx);
        metrics::record_zone_operation("generate", false);
        return Err(ApiError::InvalidRecord(format!(
            "record {} has an empty type",
            idx
        )));
    }

    let zone = generate_with_clock(&request.records, &request.options, state.clock.as_ref());

    for record in &request.records {
        metrics::record_records("generate", &record.record_type.to_uppercase(), 1);
    }
    metrics::record_zone_operation("generate", true);

    Ok(Json(GenerateResponse {
        zone,
        record_count: request.records.len(),
    }))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "server"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Metrics endpoint for Prometheus scraping
pub async fn metrics_handler() -> Result<Response, ApiError> {
    let metrics_text = metrics::gather_metrics().map_err(|e| {
        error!("Failed to gather metrics: {}", e);
        ApiError::InternalError(format!("failed to gather metrics: {}", e))
    })?;

    Ok((
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4")],
        metrics_text,
    )
        .into_response())
}

/// Map a rejected JSON body to a 400 error
fn reject(rejection: JsonRejection) -> ApiError {
    error!("Rejected request body: {}", rejection.body_text());
    ApiError::InvalidRequest(rejection.body_text())
}
