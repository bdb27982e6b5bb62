// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Middleware for request metrics

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::debug;

use crate::metrics;

/// Record count, duration and status of every request
///
/// The `path` label is the raw request path, so the converter endpoints show
/// up as `/api/v1/zones/parse` and `/api/v1/zones/generate` next to
/// `/api/v1/health` and `/metrics`. Per-record counts are recorded by the
/// handlers themselves in `zonetext_records_processed_total`.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    debug!("{} {} -> {} in {:.3}s", method, path, status, duration);
    metrics::record_http_request(&method, &path, status, duration);

    response
}
