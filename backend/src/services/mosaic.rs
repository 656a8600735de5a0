//! Mosaic planning: a centred grid of overlapping frames around a pointing.
//!
//! Offsets are laid out on the tangent plane (X towards increasing RA, Y
//! towards increasing Dec), rotated by the camera position angle and only
//! then projected onto the sky with the `1/cos(dec)` RA stretch. Tiles are
//! enumerated row-major starting from the row with the most negative Dec
//! offset; rotation never changes the order.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult, ErrorContext};
use crate::models::{FrameFov, MosaicLayout, SkyPointing};

/// Below this `cos(dec)` an RA offset cannot be projected.
const POLE_COS_EPSILON: f64 = 1e-12;

const SINGLE_FRAME_VIEW_FACTOR: f64 = 2.5;
const MOSAIC_VIEW_FACTOR: f64 = 1.5;
const MIN_VIEW_FOV_DEG: f64 = 0.1;
const MAX_VIEW_FOV_DEG: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileCenter {
    /// 1-based position in row-major order.
    pub index: u32,
    pub row: u32,
    pub col: u32,
    /// Tangent-plane offset along RA after rotation, before the cos(dec) stretch.
    pub ra_offset_deg: f64,
    pub dec_offset_deg: f64,
    pub ra_deg: f64,
    pub dec_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosaicResult {
    pub total_fov_width_deg: f64,
    pub total_fov_height_deg: f64,
    /// Rotation actually applied, wrapped into `[0, 360)`.
    pub rotation_deg: f64,
    pub tile_centers: Vec<TileCenter>,
    /// Zoom level for a sky viewer showing the whole footprint.
    pub suggested_view_fov_deg: f64,
}

/// Viewer field that frames the footprint with some margin.
pub fn suggested_view_fov(
    frame: &FrameFov,
    total_width_deg: f64,
    total_height_deg: f64,
    tiles: usize,
) -> f64 {
    let fov = if tiles <= 1 {
        SINGLE_FRAME_VIEW_FACTOR * frame.width_deg.max(frame.height_deg)
    } else {
        MOSAIC_VIEW_FACTOR * total_width_deg.max(total_height_deg)
    };
    fov.clamp(MIN_VIEW_FOV_DEG, MAX_VIEW_FOV_DEG)
}

pub fn compute_mosaic(
    layout: &MosaicLayout,
    frame: &FrameFov,
    pointing: &SkyPointing,
) -> ConversionResult<MosaicResult> {
    layout.validate()?;
    frame.validate()?;
    pointing.validate()?;

    let overlap_fraction = (100.0 - layout.overlap_percent) / 100.0;
    let step_x = frame.width_deg * overlap_fraction;
    let step_y = frame.height_deg * overlap_fraction;
    let total_width = step_x * (layout.tiles_x - 1) as f64 + frame.width_deg;
    let total_height = step_y * (layout.tiles_y - 1) as f64 + frame.height_deg;

    let rotation = layout.normalized_rotation();
    let (sin_rot, cos_rot) = rotation.value().to_radians().sin_cos();
    let cos_dec = pointing.dec_deg.to_radians().cos();
    let centre_col = (layout.tiles_x - 1) as f64 / 2.0;
    let centre_row = (layout.tiles_y - 1) as f64 / 2.0;

    let mut tile_centers = Vec::with_capacity(layout.tile_count());
    for row in 0..layout.tiles_y {
        for col in 0..layout.tiles_x {
            let x = step_x * (col as f64 - centre_col);
            let y = step_y * (row as f64 - centre_row);
            let ra_offset = x * cos_rot - y * sin_rot;
            let dec_offset = x * sin_rot + y * cos_rot;

            let ra_stretch = if ra_offset == 0.0 {
                0.0
            } else if cos_dec.abs() < POLE_COS_EPSILON {
                return Err(ConversionError::computation_with_context(
                    "RA offsets are undefined for a pointing at the celestial pole",
                    ErrorContext::new("compute_mosaic").with_field("dec_deg"),
                ));
            } else {
                ra_offset / cos_dec
            };

            let dec = pointing.dec_deg + dec_offset;
            if !(-90.0..=90.0).contains(&dec) {
                return Err(ConversionError::computation_with_context(
                    format!(
                        "Tile at row {}, column {} extends past the celestial pole (Dec {:.4})",
                        row, col, dec
                    ),
                    ErrorContext::new("compute_mosaic").with_field("dec_deg"),
                ));
            }

            tile_centers.push(TileCenter {
                index: row * layout.tiles_x + col + 1,
                row,
                col,
                ra_offset_deg: ra_offset,
                dec_offset_deg: dec_offset,
                ra_deg: qtty::Degrees::new(pointing.ra_deg + ra_stretch).wrap_pos().value(),
                dec_deg: dec,
            });
        }
    }

    let suggested_view_fov_deg =
        suggested_view_fov(frame, total_width, total_height, tile_centers.len());
    debug!(
        "compute_mosaic: {}x{} tiles, overlap {}%, rotation {} deg -> {:.4}x{:.4} deg",
        layout.tiles_x,
        layout.tiles_y,
        layout.overlap_percent,
        rotation.value(),
        total_width,
        total_height
    );

    Ok(MosaicResult {
        total_fov_width_deg: total_width,
        total_fov_height_deg: total_height,
        rotation_deg: rotation.value(),
        tile_centers,
        suggested_view_fov_deg,
    })
}
