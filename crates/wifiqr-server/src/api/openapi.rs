//! OpenAPI specification generation for the wifiqr API.
//!
//! This module generates an OpenAPI 3.0 specification consumed by the
//! Swagger UI mounted at `/docs` and by API clients generated from the spec.

use axum::Json;
use utoipa::OpenApi;

use wifiqr_core::{SecurityMode, WifiPayload};

use super::error::ErrorResponse;
use super::health::HealthResponse;
use super::qr::{GenerateQrRequest, GenerateQrResponse};

/// Serve the OpenAPI specification as JSON.
///
/// This endpoint is available at `/api/openapi.json` and returns the complete
/// OpenAPI 3.0 specification for the wifiqr API.
pub async fn get_openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Returns the OpenAPI specification as a string (for writing to file).
/// Used by the gen-openapi binary.
#[allow(dead_code)]
pub fn get_openapi_json() -> String {
    ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to serialize OpenAPI spec")
}

/// Main OpenAPI document structure for wifiqr.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "wifiqr API",
        version = "0.1.0",
        description = r#"
# wifiqr API

Generate scannable WiFi connection codes.

## Overview

Submit network credentials (name, password, security mode, hidden flag) and
receive the canonical WiFi configuration payload rendered as a QR symbol:

1. **generateQr**: payload plus inline SVG for display
2. **downloadQrPng**: PNG image attachment for download
3. **printQrDocument**: self-contained printable HTML card

Credentials are validated before encoding; validation failures return 422
with a machine-readable error code. Nothing is stored server-side - every
request is an independent, stateless encode.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local wifiqr server")
    ),
    tags(
        (
            name = "system",
            description = "Health checks and system status"
        ),
        (
            name = "qr",
            description = "WiFi QR code generation and export"
        )
    ),
    paths(
        // Health endpoints
        super::health::health_check,
        // QR endpoints
        super::qr::generate_qr,
        super::qr::download_png,
        super::qr::print_document,
    ),
    components(
        schemas(
            // Error types
            ErrorResponse,
            // Health types
            HealthResponse,
            // QR types
            GenerateQrRequest,
            GenerateQrResponse,
            SecurityMode,
            WifiPayload,
        )
    )
)]
pub struct ApiDoc;
