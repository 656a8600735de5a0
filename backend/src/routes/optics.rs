use serde::{Deserialize, Serialize};

use super::helpers::{exclusive_fields_error, optional_text};
use crate::error::ConversionResult;
use crate::models::{
    tile_count_from_f64, FrameFov, MosaicLayout, OpticalSystem, Sensor, SkyPointing,
};
use crate::services::extinction::supported_filters;
use crate::services::presets::{self, CameraPreset, TelescopePreset, CAMERAS, TELESCOPES};

/// Body of `POST /calculate_fov`.
///
/// Each side of the instrument is given either explicitly or by preset name:
/// exactly one of `optical` / `telescope_preset` and exactly one of
/// `sensor` / `camera_preset`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FovRequest {
    #[serde(default)]
    pub optical: Option<OpticalSystem>,
    #[serde(default)]
    pub sensor: Option<Sensor>,
    #[serde(default, deserialize_with = "optional_text")]
    pub telescope_preset: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub camera_preset: Option<String>,
}

impl FovRequest {
    pub fn resolve(&self) -> ConversionResult<(OpticalSystem, Sensor)> {
        let optical = match (&self.optical, &self.telescope_preset) {
            (Some(optical), None) => *optical,
            (None, Some(name)) => presets::telescope(name)?.optical_system(),
            (optical, name) => {
                return Err(exclusive_fields_error(
                    CALCULATE_FOV,
                    &[("optical", optical.is_some()), ("telescope_preset", name.is_some())],
                ))
            }
        };
        let sensor = match (&self.sensor, &self.camera_preset) {
            (Some(sensor), None) => *sensor,
            (None, Some(name)) => presets::camera(name)?.sensor(),
            (sensor, name) => {
                return Err(exclusive_fields_error(
                    CALCULATE_FOV,
                    &[("sensor", sensor.is_some()), ("camera_preset", name.is_some())],
                ))
            }
        };
        Ok((optical, sensor))
    }
}

/// Mosaic grid as sent over the wire. Tile counts arrive as JSON numbers and
/// are checked for integrality before building a [`MosaicLayout`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicLayoutRequest {
    pub tiles_x: f64,
    pub tiles_y: f64,
    #[serde(default)]
    pub overlap_percent: f64,
    #[serde(default)]
    pub rotation_deg: f64,
}

impl MosaicLayoutRequest {
    pub fn to_layout(&self) -> ConversionResult<MosaicLayout> {
        MosaicLayout::new(
            tile_count_from_f64(self.tiles_x, "tiles_x")?,
            tile_count_from_f64(self.tiles_y, "tiles_y")?,
            self.overlap_percent,
            self.rotation_deg,
        )
    }
}

/// Body of `POST /calculate_mosaic`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicRequest {
    pub layout: MosaicLayoutRequest,
    pub frame_fov: FrameFov,
    pub pointing: SkyPointing,
}

/// Response of `GET /presets`.
#[derive(Debug, Clone, Serialize)]
pub struct PresetsResponse {
    pub telescopes: Vec<TelescopePreset>,
    pub cameras: Vec<CameraPreset>,
    /// Filter names understood by `/calculate_extinction`.
    pub filters: Vec<&'static str>,
}

impl PresetsResponse {
    pub fn all() -> Self {
        Self {
            telescopes: TELESCOPES.to_vec(),
            cameras: CAMERAS.to_vec(),
            filters: supported_filters(),
        }
    }
}

pub const CALCULATE_FOV: &str = "calculate_fov";
pub const CALCULATE_MOSAIC: &str = "calculate_mosaic";
pub const GET_PRESETS: &str = "presets";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fov_request_reducer_defaults_to_one() {
        let req: FovRequest = serde_json::from_str(
            r#"{"optical": {"focal_length_mm": 8000, "aperture_mm": 1000},
                "sensor": {"width_mm": 30.72, "height_mm": 30.72,
                           "resolution_x": 2048, "resolution_y": 2048}}"#,
        )
        .unwrap();
        let (optical, _) = req.resolve().unwrap();
        assert_eq!(optical.reducer_factor, 1.0);
    }

    #[test]
    fn test_fov_request_resolves_presets() {
        let req: FovRequest = serde_json::from_str(
            r#"{"telescope_preset": "lot", "camera_preset": "LOT Sophia"}"#,
        )
        .unwrap();
        let (optical, sensor) = req.resolve().unwrap();
        assert_eq!(optical.focal_length_mm, 8000.0);
        assert_eq!(sensor.resolution_x, 2048);
    }

    #[test]
    fn test_fov_request_needs_one_source_per_side() {
        let req: FovRequest = serde_json::from_str(r#"{"telescope_preset": "LOT"}"#).unwrap();
        let err = req.resolve().unwrap_err();
        assert!(err.to_string().contains("Provide one of: sensor, camera_preset"), "{}", err);

        let req: FovRequest = serde_json::from_str(
            r#"{"telescope_preset": "LOT", "optical": {"focal_length_mm": 800, "aperture_mm": 100},
                "camera_preset": "LOT Sophia"}"#,
        )
        .unwrap();
        let err = req.resolve().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Provide only one of: optical, telescope_preset"), "{}", message);
    }

    #[test]
    fn test_fov_request_unknown_preset() {
        let req: FovRequest = serde_json::from_str(
            r#"{"telescope_preset": "Hubble", "camera_preset": "LOT Sophia"}"#,
        )
        .unwrap();
        assert!(req.resolve().is_err());
    }

    #[test]
    fn test_layout_rejects_fractional_tiles() {
        let req: MosaicLayoutRequest = serde_json::from_str(
            r#"{"tiles_x": 2.5, "tiles_y": 1, "overlap_percent": 10}"#,
        )
        .unwrap();
        let err = req.to_layout().unwrap_err();
        assert_eq!(err.context().field.as_deref(), Some("tiles_x"));
    }

    #[test]
    fn test_layout_accepts_integral_numbers() {
        let req: MosaicLayoutRequest = serde_json::from_str(
            r#"{"tiles_x": 3.0, "tiles_y": 2}"#,
        )
        .unwrap();
        let layout = req.to_layout().unwrap();
        assert_eq!((layout.tiles_x, layout.tiles_y), (3, 2));
        assert_eq!(layout.overlap_percent, 0.0);
    }

    #[test]
    fn test_presets_response_lists_everything() {
        let presets = PresetsResponse::all();
        assert_eq!(presets.telescopes.len(), 3);
        assert_eq!(presets.cameras.len(), 9);
        assert!(presets.filters.contains(&"V"));
        assert!(presets.filters.contains(&"gaia_g"));
    }
}
