//! Telescope, camera and mosaic descriptions.
//!
//! These are plain value types that deserialize straight from request bodies.
//! Construct through `new` (or call `validate` after deserializing) before
//! handing them to the geometry calculators.

use serde::{Deserialize, Serialize};

use crate::error::{
    require_finite, require_positive, ConversionError, ConversionResult, ErrorContext,
};

/// Telescope optical train.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticalSystem {
    pub focal_length_mm: f64,
    pub aperture_mm: f64,
    /// Focal reducer / extender factor; 1.0 when none is fitted.
    #[serde(default = "default_reducer")]
    pub reducer_factor: f64,
}

fn default_reducer() -> f64 {
    1.0
}

impl OpticalSystem {
    pub fn new(
        focal_length_mm: f64,
        aperture_mm: f64,
        reducer_factor: f64,
    ) -> ConversionResult<Self> {
        let optical = Self {
            focal_length_mm,
            aperture_mm,
            reducer_factor,
        };
        optical.validate()?;
        Ok(optical)
    }

    pub fn validate(&self) -> ConversionResult<()> {
        require_positive(self.focal_length_mm, "compute_fov", "focal_length_mm")?;
        require_positive(self.aperture_mm, "compute_fov", "aperture_mm")?;
        require_positive(self.reducer_factor, "compute_fov", "reducer_factor")?;
        Ok(())
    }

    pub fn effective_focal_length_mm(&self) -> f64 {
        self.focal_length_mm * self.reducer_factor
    }

    pub fn f_ratio(&self) -> f64 {
        self.effective_focal_length_mm() / self.aperture_mm
    }
}

/// Camera sensor geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub width_mm: f64,
    pub height_mm: f64,
    pub resolution_x: u32,
    pub resolution_y: u32,
}

impl Sensor {
    pub fn new(
        width_mm: f64,
        height_mm: f64,
        resolution_x: u32,
        resolution_y: u32,
    ) -> ConversionResult<Self> {
        let sensor = Self {
            width_mm,
            height_mm,
            resolution_x,
            resolution_y,
        };
        sensor.validate()?;
        Ok(sensor)
    }

    pub fn validate(&self) -> ConversionResult<()> {
        require_positive(self.width_mm, "compute_fov", "width_mm")?;
        require_positive(self.height_mm, "compute_fov", "height_mm")?;
        let resolutions = [
            ("resolution_x", self.resolution_x),
            ("resolution_y", self.resolution_y),
        ];
        for (field, value) in resolutions {
            if value == 0 {
                return Err(ConversionError::validation_with_context(
                    format!("{} must be a positive integer", field),
                    ErrorContext::new("compute_fov").with_field(field),
                ));
            }
        }
        Ok(())
    }

    /// Pixel pitch along X in micrometres.
    pub fn pixel_size_x_um(&self) -> f64 {
        (self.width_mm / self.resolution_x as f64) * 1000.0
    }

    /// Pixel pitch along Y in micrometres.
    pub fn pixel_size_y_um(&self) -> f64 {
        (self.height_mm / self.resolution_y as f64) * 1000.0
    }
}

/// Angular size of a single camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameFov {
    pub width_deg: f64,
    pub height_deg: f64,
}

impl FrameFov {
    pub fn validate(&self) -> ConversionResult<()> {
        require_positive(self.width_deg, "compute_mosaic", "width_deg")?;
        require_positive(self.height_deg, "compute_mosaic", "height_deg")?;
        Ok(())
    }
}

/// Telescope pointing centre in ICRS degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPointing {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl SkyPointing {
    pub fn validate(&self) -> ConversionResult<()> {
        require_finite(self.ra_deg, "compute_mosaic", "ra_deg")?;
        let dec = require_finite(self.dec_deg, "compute_mosaic", "dec_deg")?;
        if !(-90.0..=90.0).contains(&dec) {
            return Err(ConversionError::validation_with_context(
                format!("Declination must be between -90 and +90 degrees, got {}", dec),
                ErrorContext::new("compute_mosaic").with_field("dec_deg"),
            ));
        }
        Ok(())
    }
}

/// Grid of overlapping pointings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MosaicLayout {
    pub tiles_x: u32,
    pub tiles_y: u32,
    /// Overlap between neighbouring frames, percent of the frame size, `[0, 100)`.
    pub overlap_percent: f64,
    /// Camera position angle; any real value, normalised to `[0, 360)`.
    #[serde(default)]
    pub rotation_deg: f64,
}

impl MosaicLayout {
    /// Largest tile count accepted along either axis.
    pub const MAX_TILES_PER_AXIS: u32 = 100;
    /// Largest number of tiles in one mosaic.
    pub const MAX_TILES: u32 = 2_500;

    pub fn new(
        tiles_x: u32,
        tiles_y: u32,
        overlap_percent: f64,
        rotation_deg: f64,
    ) -> ConversionResult<Self> {
        let layout = Self {
            tiles_x,
            tiles_y,
            overlap_percent,
            rotation_deg,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> ConversionResult<()> {
        for (field, value) in [("tiles_x", self.tiles_x), ("tiles_y", self.tiles_y)] {
            if value < 1 {
                return Err(ConversionError::validation_with_context(
                    format!("{} must be at least 1", field),
                    ErrorContext::new("compute_mosaic").with_field(field),
                ));
            }
            if value > Self::MAX_TILES_PER_AXIS {
                return Err(ConversionError::validation_with_context(
                    format!(
                        "{} must be at most {}, got {}",
                        field,
                        Self::MAX_TILES_PER_AXIS,
                        value
                    ),
                    ErrorContext::new("compute_mosaic").with_field(field),
                ));
            }
        }
        match self.tiles_x.checked_mul(self.tiles_y) {
            Some(total) if total <= Self::MAX_TILES => {}
            _ => {
                return Err(ConversionError::validation_with_context(
                    format!(
                        "{}x{} tiles exceeds the limit of {} tiles per mosaic",
                        self.tiles_x,
                        self.tiles_y,
                        Self::MAX_TILES
                    ),
                    ErrorContext::new("compute_mosaic").with_field("tiles_x"),
                ));
            }
        }
        let overlap = require_finite(self.overlap_percent, "compute_mosaic", "overlap_percent")?;
        if !(0.0..100.0).contains(&overlap) {
            return Err(ConversionError::validation_with_context(
                format!("overlap_percent must be in [0, 100), got {}", overlap),
                ErrorContext::new("compute_mosaic").with_field("overlap_percent"),
            ));
        }
        require_finite(self.rotation_deg, "compute_mosaic", "rotation_deg")?;
        Ok(())
    }

    /// Rotation wrapped into `[0, 360)`.
    pub fn normalized_rotation(&self) -> qtty::Degrees {
        qtty::Degrees::new(self.rotation_deg).wrap_pos()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }
}

/// Convert a JSON tile count into an integer, rejecting fractions and out-of-range values.
pub fn tile_count_from_f64(value: f64, field: &str) -> ConversionResult<u32> {
    let context = || ErrorContext::new("compute_mosaic").with_field(field);
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ConversionError::validation_with_context(
            format!("{} must be a whole number, got {}", field, value),
            context(),
        ));
    }
    if value < 1.0 {
        return Err(ConversionError::validation_with_context(
            format!("{} must be at least 1, got {}", field, value),
            context(),
        ));
    }
    let max = MosaicLayout::MAX_TILES_PER_AXIS;
    if value > max as f64 {
        return Err(ConversionError::validation_with_context(
            format!("{} must be at most {}, got {}", field, max, value),
            context(),
        ));
    }
    Ok(value as u32)
}
