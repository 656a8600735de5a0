//! Calculators behind the HTTP endpoints.
//!
//! Each submodule is a set of pure functions over the value types in
//! [`crate::models`]. Nothing here performs I/O; failures come back as
//! [`crate::error::ConversionError`].

pub mod angle_converter;
pub mod cosmology;
pub mod date_converter;
pub mod extinction;
pub mod magnitude;
pub mod mosaic;
pub mod optical_geometry;
pub mod presets;

pub use angle_converter::{
    convert_dec, convert_ra, decimal_to_dms, decimal_to_hms, dms_to_decimal, hms_to_decimal,
    DecConversion, DecInput, RaConversion, RaInput,
};
pub use cosmology::{luminosity_distance, redshift_to_distance, DistanceResult};
pub use date_converter::{DateConversion, DateInput};
pub use extinction::{galactic_extinction, ExtinctionResult};
pub use magnitude::{apparent_to_absolute_magnitude, MagnitudeResult};
pub use mosaic::{compute_mosaic, MosaicResult, TileCenter};
pub use optical_geometry::{compute_fov, FieldOfView};
