//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! calculators in [`crate::services`]. Bodies are taken as
//! `Result<Json<_>, JsonRejection>` so decoding failures still answer with the
//! envelope rather than axum's plain-text rejection.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::dto::{
    AbsoluteMagnitudeRequest, ApiResponse, ConvertDateRequest, ConvertDecRequest, ConvertRaRequest,
    DateConversion, DecConversion, DistanceResult, ExtinctionRequest, ExtinctionResult, FieldOfView,
    FovRequest, HealthResponse, MagnitudeResult, MosaicRequest, MosaicResult, PresetsResponse,
    RaConversion, RedshiftRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{
    angle_converter, cosmology, date_converter, extinction, magnitude, mosaic, optical_geometry,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<ApiResponse<T>>, AppError>;

fn ok<T>(result: T) -> HandlerResult<T> {
    Ok(Json(ApiResponse::ok(result)))
}

// =============================================================================
// Service
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cosmology: *state.cosmology(),
    })
}

/// GET /presets
///
/// Telescope and camera presets for the FOV calculator.
pub async fn list_presets() -> HandlerResult<PresetsResponse> {
    ok(PresetsResponse::all())
}

// =============================================================================
// Cosmology
// =============================================================================

/// POST /calculate_redshift
pub async fn calculate_redshift(
    State(state): State<AppState>,
    body: Result<Json<RedshiftRequest>, JsonRejection>,
) -> HandlerResult<DistanceResult> {
    let Json(request) = body?;
    ok(cosmology::redshift_to_distance(
        state.cosmology(),
        request.redshift,
        request.redshift_error,
    )?)
}

/// POST /calculate_absolute_magnitude
pub async fn calculate_absolute_magnitude(
    State(state): State<AppState>,
    body: Result<Json<AbsoluteMagnitudeRequest>, JsonRejection>,
) -> HandlerResult<MagnitudeResult> {
    let Json(request) = body?;
    ok(magnitude::apparent_to_absolute_magnitude(
        state.cosmology(),
        request.apparent_magnitude,
        request.redshift,
        request.extinction.unwrap_or(0.0),
        request.apply_k_correction,
    )?)
}

/// POST /calculate_extinction
pub async fn calculate_extinction(
    body: Result<Json<ExtinctionRequest>, JsonRejection>,
) -> HandlerResult<ExtinctionResult> {
    let Json(request) = body?;
    ok(extinction::galactic_extinction(request.ebv, &request.filter)?)
}

// =============================================================================
// Dates and angles
// =============================================================================

/// POST /convert_date
pub async fn convert_date(
    body: Result<Json<ConvertDateRequest>, JsonRejection>,
) -> HandlerResult<DateConversion> {
    let Json(request) = body?;
    ok(date_converter::convert(request.into_input()?)?)
}

/// POST /convert_ra
pub async fn convert_ra(
    body: Result<Json<ConvertRaRequest>, JsonRejection>,
) -> HandlerResult<RaConversion> {
    let Json(request) = body?;
    let (input, format) = request.into_input()?;
    ok(angle_converter::convert_ra(input, format)?)
}

/// POST /convert_dec
pub async fn convert_dec(
    body: Result<Json<ConvertDecRequest>, JsonRejection>,
) -> HandlerResult<DecConversion> {
    let Json(request) = body?;
    let (input, format) = request.into_input()?;
    ok(angle_converter::convert_dec(input, format)?)
}

// =============================================================================
// Optics
// =============================================================================

/// POST /calculate_fov
pub async fn calculate_fov(
    body: Result<Json<FovRequest>, JsonRejection>,
) -> HandlerResult<FieldOfView> {
    let Json(request) = body?;
    let (optical, sensor) = request.resolve()?;
    ok(optical_geometry::compute_fov(&optical, &sensor)?)
}

/// POST /calculate_mosaic
pub async fn calculate_mosaic(
    body: Result<Json<MosaicRequest>, JsonRejection>,
) -> HandlerResult<MosaicResult> {
    let Json(request) = body?;
    let layout = request.layout.to_layout()?;
    ok(mosaic::compute_mosaic(&layout, &request.frame_fov, &request.pointing)?)
}
