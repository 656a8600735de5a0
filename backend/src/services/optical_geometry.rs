//! Field of view and plate scale of a telescope and camera pair.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConversionResult;
use crate::models::{FrameFov, OpticalSystem, Sensor};

/// Arcseconds per radian divided by 1000, so µm / mm gives arcsec.
const PLATE_SCALE_FACTOR: f64 = 206.265;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    pub effective_focal_length_mm: f64,
    pub f_ratio: f64,
    pub pixel_size_x_um: f64,
    pub pixel_size_y_um: f64,
    /// Arcseconds per pixel along X.
    pub pixel_scale_x: f64,
    /// Arcseconds per pixel along Y.
    pub pixel_scale_y: f64,
    pub fov_width_deg: f64,
    pub fov_height_deg: f64,
}

impl FieldOfView {
    /// Frame size handed to the mosaic planner.
    pub fn frame(&self) -> FrameFov {
        FrameFov {
            width_deg: self.fov_width_deg,
            height_deg: self.fov_height_deg,
        }
    }
}

/// Small-angle field of view: `fov = (sensor / efl) · 180/π`,
/// `scale = (pixel_µm / efl) · 206.265`.
pub fn compute_fov(optical: &OpticalSystem, sensor: &Sensor) -> ConversionResult<FieldOfView> {
    optical.validate()?;
    sensor.validate()?;

    let efl = optical.effective_focal_length_mm();
    let pixel_size_x_um = sensor.pixel_size_x_um();
    let pixel_size_y_um = sensor.pixel_size_y_um();

    let fov = FieldOfView {
        effective_focal_length_mm: efl,
        f_ratio: optical.f_ratio(),
        pixel_size_x_um,
        pixel_size_y_um,
        pixel_scale_x: pixel_size_x_um / efl * PLATE_SCALE_FACTOR,
        pixel_scale_y: pixel_size_y_um / efl * PLATE_SCALE_FACTOR,
        fov_width_deg: (sensor.width_mm / efl).to_degrees(),
        fov_height_deg: (sensor.height_mm / efl).to_degrees(),
    };
    debug!(
        "compute_fov: efl={}mm f/{:.2} fov={:.4}x{:.4} deg scale={:.3}\"/px",
        efl, fov.f_ratio, fov.fov_width_deg, fov.fov_height_deg, fov.pixel_scale_x
    );
    Ok(fov)
}
