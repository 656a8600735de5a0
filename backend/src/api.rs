//! Public API surface for the JSON endpoints.
//!
//! This file consolidates the request and result types that cross the wire,
//! plus the response envelope every endpoint answers with.

pub use crate::routes::angles::ConvertDecRequest;
pub use crate::routes::angles::ConvertRaRequest;
pub use crate::routes::cosmology::AbsoluteMagnitudeRequest;
pub use crate::routes::cosmology::ExtinctionRequest;
pub use crate::routes::cosmology::RedshiftRequest;
pub use crate::routes::dates::ConvertDateRequest;
pub use crate::routes::optics::FovRequest;
pub use crate::routes::optics::MosaicLayoutRequest;
pub use crate::routes::optics::MosaicRequest;
pub use crate::routes::optics::PresetsResponse;
pub use crate::services::angle_converter::DecConversion;
pub use crate::services::angle_converter::RaConversion;
pub use crate::services::cosmology::DistanceResult;
pub use crate::services::date_converter::DateConversion;
pub use crate::services::extinction::ExtinctionResult;
pub use crate::services::magnitude::MagnitudeResult;
pub use crate::services::mosaic::MosaicResult;
pub use crate::services::mosaic::TileCenter;
pub use crate::services::optical_geometry::FieldOfView;

use serde::{Deserialize, Serialize};

use crate::error::ConversionResult;

/// Uniform response envelope: `{success, result?, error?}`.
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            result: None,
            error: Some(if message.is_empty() {
                "Unknown error".to_string()
            } else {
                message
            }),
        }
    }
}

impl<T> From<ConversionResult<T>> for ApiResponse<T> {
    fn from(result: ConversionResult<T>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
