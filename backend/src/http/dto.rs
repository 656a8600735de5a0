//! Data Transfer Objects for the HTTP API.
//!
//! Request and result types live with the routes and services that own them
//! and are re-exported here for handler use.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Envelope
    ApiResponse,
    // Angles
    ConvertDecRequest, ConvertRaRequest, DecConversion, RaConversion,
    // Dates
    ConvertDateRequest, DateConversion,
    // Cosmology
    AbsoluteMagnitudeRequest, DistanceResult, ExtinctionRequest, ExtinctionResult, MagnitudeResult,
    RedshiftRequest,
    // Optics
    FieldOfView, FovRequest, MosaicRequest, MosaicResult, PresetsResponse,
};
use crate::models::Cosmology;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status ("ok")
    pub status: String,
    /// Crate version
    pub version: String,
    /// Cosmology in use, so clients can label distances
    pub cosmology: Cosmology,
}
