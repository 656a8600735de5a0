//! Named telescope and camera configurations offered by the FOV calculator.

use serde::Serialize;

use crate::error::{ConversionError, ConversionResult, ErrorContext};
use crate::models::{OpticalSystem, Sensor};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelescopePreset {
    pub name: &'static str,
    pub focal_length_mm: f64,
    pub aperture_mm: f64,
    pub reducer_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPreset {
    pub name: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
    pub resolution_x: u32,
    pub resolution_y: u32,
}

impl TelescopePreset {
    pub fn optical_system(&self) -> OpticalSystem {
        OpticalSystem {
            focal_length_mm: self.focal_length_mm,
            aperture_mm: self.aperture_mm,
            reducer_factor: self.reducer_factor,
        }
    }
}

impl CameraPreset {
    pub fn sensor(&self) -> Sensor {
        Sensor {
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            resolution_x: self.resolution_x,
            resolution_y: self.resolution_y,
        }
    }
}

macro_rules! telescope {
    ($name:expr, $focal:expr, $aperture:expr) => {
        TelescopePreset {
            name: $name,
            focal_length_mm: $focal,
            aperture_mm: $aperture,
            reducer_factor: 1.0,
        }
    };
}

macro_rules! camera {
    ($name:expr, $w:expr, $h:expr, $rx:expr, $ry:expr) => {
        CameraPreset {
            name: $name,
            width_mm: $w,
            height_mm: $h,
            resolution_x: $rx,
            resolution_y: $ry,
        }
    };
}

pub const TELESCOPES: &[TelescopePreset] = &[
    telescope!("LOT", 8000.0, 1000.0),
    telescope!("SLT", 3320.0, 400.0),
    telescope!("LATTE", 3454.0, 508.0),
];

pub const CAMERAS: &[CameraPreset] = &[
    camera!("LOT Sophia", 30.72, 30.72, 2048, 2048),
    camera!("LOT SBIG ST-9XEI", 10.2, 10.2, 512, 512),
    camera!("SLT Andor iKon-M 934", 13.3, 13.3, 1024, 1024),
    camera!("Moravian C5-100M", 44.0, 33.0, 11664, 8750),
    camera!("PlayerOne ZEUS(IMX455)", 36.0, 24.0, 9576, 6388),
    camera!("PlayerOne Poseidon(IMX571)", 23.5, 15.7, 6252, 4176),
    camera!("PlayerOne Artemis(IMX492)", 19.2, 13.0, 8288, 5648),
    camera!("PlayerOne Ares(IMX533)", 11.31, 11.31, 3008, 3008),
    camera!("PlayerOne Uranus(IMX585)", 11.2, 6.3, 3856, 2180),
];

/// Look up a telescope preset, ignoring case.
pub fn telescope(name: &str) -> ConversionResult<&'static TelescopePreset> {
    TELESCOPES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| {
            ConversionError::validation_with_context(
                format!("Unknown telescope preset '{}'", name),
                ErrorContext::new("telescope_preset").with_field("name"),
            )
        })
}

/// Look up a camera preset, ignoring case.
pub fn camera(name: &str) -> ConversionResult<&'static CameraPreset> {
    CAMERAS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| {
            ConversionError::validation_with_context(
                format!("Unknown camera preset '{}'", name),
                ErrorContext::new("camera_preset").with_field("name"),
            )
        })
}
