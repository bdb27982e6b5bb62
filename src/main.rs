// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone text API server
//!
//! A small HTTP REST API that converts BIND zone file text to structured
//! records and back:
//! - `POST /api/v1/zones/parse` turns zone text into typed records
//! - `POST /api/v1/zones/generate` turns records into zone text

use anyhow::Context;
use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use zonetext::{
    generator::GenerateOptions,
    handlers::{self, GenerateRequest, GenerateResponse, HealthResponse, ParseRequest},
    metrics, middleware,
    parser::ParseOptions,
    types::AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::parse_zone,
        handlers::generate_zone,
        handlers::health_check,
    ),
    components(
        schemas(
            ParseRequest,
            ParseOptions,
            GenerateRequest,
            GenerateOptions,
            GenerateResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "zones", description = "Zone text conversion endpoints"),
        (name = "server", description = "Server status endpoints")
    ),
    info(
        title = "Zonetext API",
        version = "0.1.0",
        description = "HTTP REST API for converting BIND zone files to and from structured records",
        license(name = "MIT")
    )
)]
struct ApiDoc;

/// Server configuration
const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("starting zonetext api server v{}", env!("CARGO_PKG_VERSION"));

    metrics::init_metrics();

    // get configuration from environment
    let api_port = std::env::var("API_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_API_PORT);
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

    info!("api port: {}", api_port);

    let state = AppState::default();

    let app = Router::new()
        .merge(SwaggerUi::new("/api/v1/docs").url("/api/v1/openapi.json", ApiDoc::openapi()))
        .merge(handlers::router(state))
        .layer(axum_middleware::from_fn(middleware::track_metrics))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", bind_address, api_port);

    info!("zonetext api server listening on {}", addr);
    info!("swagger ui available at http://{}/api/v1/docs", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
