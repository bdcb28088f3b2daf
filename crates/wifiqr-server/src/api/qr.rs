//! WiFi QR generation API endpoints.
//!
//! Accepts raw credentials, validates and encodes them into the canonical
//! configuration payload, and exports the result as inline SVG, a PNG
//! download, or a print-ready HTML document.

use axum::extract::{Query, State};
use axum::http::header::{self, HeaderName};
use axum::response::Html;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use wifiqr_core::{
    compose_print_html, to_png, to_svg, RenderOptions, SecurityMode, WifiCredentials, WifiPayload,
};

use crate::api::error::{ApiError, ApiResult};
use crate::state::SharedState;

/// Largest accepted pixels-per-module value.
const MAX_SCALE: u32 = 64;

/// Largest accepted quiet-zone width in modules.
const MAX_BORDER: u32 = 32;

/// Creates the QR router with all endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(generate_qr))
        .route("/png", post(download_png))
        .route("/document", post(print_document))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Raw credentials submitted for encoding.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({
    "ssid": "HomeNet",
    "password": "password123",
    "security": "WPA",
    "hidden": false
}))]
pub struct GenerateQrRequest {
    /// Network name (SSID). 1-32 bytes of UTF-8.
    #[schema(example = "HomeNet", min_length = 1)]
    pub ssid: String,

    /// Network password. Required unless `security` is `nopass`.
    #[schema(example = "password123", nullable)]
    #[serde(default)]
    pub password: Option<String>,

    /// Security mode. Defaults to WPA.
    #[serde(default)]
    pub security: SecurityMode,

    /// Whether the network suppresses broadcast of its name.
    #[schema(example = false)]
    #[serde(default)]
    pub hidden: bool,
}

/// An encoded payload with its rendered symbol.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "payload": "WIFI:T:WPA;S:HomeNet;P:password123;H:false;;",
    "svg": "<svg xmlns=\"http://www.w3.org/2000/svg\">...</svg>",
    "ssid": "HomeNet",
    "security": "WPA",
    "hidden": false
}))]
pub struct GenerateQrResponse {
    /// The canonical configuration payload encoded in the symbol.
    #[schema(example = "WIFI:T:WPA;S:HomeNet;P:password123;H:false;;")]
    pub payload: WifiPayload,

    /// The rendered symbol as standalone SVG markup.
    pub svg: String,

    /// The network name, echoed for display next to the symbol.
    #[schema(example = "HomeNet")]
    pub ssid: String,

    /// The security mode that was encoded.
    pub security: SecurityMode,

    /// The hidden flag that was encoded.
    #[schema(example = false)]
    pub hidden: bool,
}

/// Query parameters overriding the configured render defaults.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct RenderQuery {
    /// Pixels per module (1-64). Defaults to the server's configured scale.
    #[param(example = 10, minimum = 1, maximum = 64)]
    pub scale: Option<u32>,

    /// Quiet-zone width in modules (0-32). Defaults to the server's
    /// configured border.
    #[param(example = 4, minimum = 0, maximum = 32)]
    pub border: Option<u32>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Validate credentials and return the payload with an inline SVG symbol.
#[utoipa::path(
    post,
    path = "/api/qr",
    tag = "qr",
    operation_id = "generateQr",
    summary = "Generate a WiFi QR code",
    description = "Validates the supplied credentials, encodes them into the \
        canonical WiFi configuration payload, and returns the payload together \
        with the symbol rendered as SVG for inline display.",
    request_body = GenerateQrRequest,
    responses(
        (status = 200, description = "QR code generated", body = GenerateQrResponse),
        (status = 422, description = "Credentials failed validation", body = super::error::ErrorResponse)
    )
)]
pub async fn generate_qr(
    State(state): State<SharedState>,
    Json(request): Json<GenerateQrRequest>,
) -> ApiResult<Json<GenerateQrResponse>> {
    let defaults = state.read().await.config.render.clone();

    let credentials =
        WifiCredentials::new(request.ssid, request.security, request.password, request.hidden)?;
    let payload = WifiPayload::assemble(&credentials);

    let options = RenderOptions {
        scale: defaults.scale,
        border: defaults.border,
    };
    let svg = to_svg(&payload, &options)?;

    info!(
        security = %request.security,
        hidden = request.hidden,
        "generated WiFi QR code"
    );

    Ok(Json(GenerateQrResponse {
        payload,
        svg,
        ssid: credentials.ssid().to_string(),
        security: request.security,
        hidden: request.hidden,
    }))
}

/// Validate credentials and return the symbol as a PNG attachment.
#[utoipa::path(
    post,
    path = "/api/qr/png",
    tag = "qr",
    operation_id = "downloadQrPng",
    summary = "Download the QR code as PNG",
    description = "Validates the supplied credentials, encodes them, and \
        returns the rendered symbol as a PNG image attachment. Scale and \
        border may override the server's configured defaults.",
    request_body = GenerateQrRequest,
    params(RenderQuery),
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 400, description = "Invalid render options", body = super::error::ErrorResponse),
        (status = 422, description = "Credentials failed validation", body = super::error::ErrorResponse)
    )
)]
pub async fn download_png(
    State(state): State<SharedState>,
    Query(query): Query<RenderQuery>,
    Json(request): Json<GenerateQrRequest>,
) -> ApiResult<([(HeaderName, String); 2], Vec<u8>)> {
    let defaults = state.read().await.config.render.clone();
    let options = resolve_options(&query, defaults.scale, defaults.border)?;

    let credentials =
        WifiCredentials::new(request.ssid, request.security, request.password, request.hidden)?;
    let payload = WifiPayload::assemble(&credentials);
    let png = to_png(&payload, &options)?;

    let filename = format!("wifi_qr_{}.png", sanitize_filename(credentials.ssid()));
    info!(filename = %filename, bytes = png.len(), "exported PNG");

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        png,
    ))
}

/// Validate credentials and return a print-ready HTML document.
#[utoipa::path(
    post,
    path = "/api/qr/document",
    tag = "qr",
    operation_id = "printQrDocument",
    summary = "Compose a printable document",
    description = "Validates the supplied credentials, encodes them, and \
        returns a self-contained printable HTML card embedding the symbol \
        and the network name.",
    request_body = GenerateQrRequest,
    responses(
        (status = 200, description = "Printable document", content_type = "text/html"),
        (status = 422, description = "Credentials failed validation", body = super::error::ErrorResponse)
    )
)]
pub async fn print_document(
    State(state): State<SharedState>,
    Json(request): Json<GenerateQrRequest>,
) -> ApiResult<Html<String>> {
    let defaults = state.read().await.config.render.clone();

    let credentials =
        WifiCredentials::new(request.ssid, request.security, request.password, request.hidden)?;
    let payload = WifiPayload::assemble(&credentials);

    let options = RenderOptions {
        scale: defaults.scale,
        border: defaults.border,
    };
    let svg = to_svg(&payload, &options)?;

    Ok(Html(compose_print_html(credentials.ssid(), &svg)))
}

// ============================================================================
// Helpers
// ============================================================================

/// Merge query overrides with configured defaults and bounds-check them.
fn resolve_options(
    query: &RenderQuery,
    default_scale: u32,
    default_border: u32,
) -> ApiResult<RenderOptions> {
    let scale = query.scale.unwrap_or(default_scale);
    let border = query.border.unwrap_or(default_border);

    if scale == 0 || scale > MAX_SCALE {
        return Err(ApiError::BadRequest {
            error_code: "INVALID_RENDER_SCALE".to_string(),
            message: format!("scale must be between 1 and {MAX_SCALE} (got {scale})"),
        });
    }
    if border > MAX_BORDER {
        return Err(ApiError::BadRequest {
            error_code: "INVALID_RENDER_BORDER".to_string(),
            message: format!("border must be at most {MAX_BORDER} (got {border})"),
        });
    }

    Ok(RenderOptions { scale, border })
}

/// Reduce an SSID to a safe download filename fragment.
fn sanitize_filename(ssid: &str) -> String {
    ssid.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
