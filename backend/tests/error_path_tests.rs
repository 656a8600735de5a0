//! Error path testing for the calculators.
//!
//! These tests trigger every failure kind and check that the error carries
//! the right variant, a descriptive message and the offending field.

use astro_convert::error::{ConversionError, ErrorContext};
use astro_convert::models::{
    Cosmology, FrameFov, MosaicLayout, OpticalSystem, Sensor, SexagesimalFormat, SkyPointing,
};
use astro_convert::services::{
    angle_converter, cosmology, date_converter, extinction, magnitude, mosaic, optical_geometry,
};

fn field(err: &ConversionError) -> Option<&str> {
    err.context().field.as_deref()
}

// =========================================================
// Validation
// =========================================================

#[test]
fn test_declination_out_of_range() {
    let err = angle_converter::decimal_to_dms(-90.0001, SexagesimalFormat::colon()).unwrap_err();
    assert!(matches!(err, ConversionError::Validation { .. }));
    assert_eq!(field(&err), Some("dec_decimal"));
    assert!(err.to_string().contains("operation=decimal_to_dms"));
}

#[test]
fn test_non_finite_right_ascension() {
    let err = angle_converter::decimal_to_hms(f64::NAN, SexagesimalFormat::colon()).unwrap_err();
    assert!(matches!(err, ConversionError::Validation { .. }));
}

#[test]
fn test_optics_non_positive_inputs() {
    assert!(OpticalSystem::new(8000.0, 0.0, 1.0).is_err());
    assert!(Sensor::new(-1.0, 10.0, 100, 100).is_err());
    let sensor = Sensor {
        width_mm: 10.0,
        height_mm: 10.0,
        resolution_x: 100,
        resolution_y: 0,
    };
    let optical = OpticalSystem::new(1000.0, 100.0, 1.0).unwrap();
    let err = optical_geometry::compute_fov(&optical, &sensor).unwrap_err();
    assert_eq!(field(&err), Some("resolution_y"));
}

#[test]
fn test_mosaic_overlap_out_of_range() {
    let layout = MosaicLayout {
        tiles_x: 2,
        tiles_y: 2,
        overlap_percent: 150.0,
        rotation_deg: 0.0,
    };
    let frame = FrameFov {
        width_deg: 1.0,
        height_deg: 1.0,
    };
    let pointing = SkyPointing {
        ra_deg: 0.0,
        dec_deg: 0.0,
    };
    let err = mosaic::compute_mosaic(&layout, &frame, &pointing).unwrap_err();
    assert_eq!(field(&err), Some("overlap_percent"));
}

#[test]
fn test_mosaic_tile_count_above_limit() {
    let frame = FrameFov {
        width_deg: 1.0,
        height_deg: 1.0,
    };
    let pointing = SkyPointing {
        ra_deg: 0.0,
        dec_deg: 0.0,
    };
    let layout = MosaicLayout {
        tiles_x: 4_000_000_000,
        tiles_y: 1,
        overlap_percent: 10.0,
        rotation_deg: 0.0,
    };
    let err = mosaic::compute_mosaic(&layout, &frame, &pointing).unwrap_err();
    assert!(matches!(err, ConversionError::Validation { .. }));
    assert_eq!(field(&err), Some("tiles_x"));

    let layout = MosaicLayout {
        tiles_x: 80,
        tiles_y: 80,
        overlap_percent: 10.0,
        rotation_deg: 0.0,
    };
    let err = mosaic::compute_mosaic(&layout, &frame, &pointing).unwrap_err();
    assert!(matches!(err, ConversionError::Validation { .. }));
    assert!(err.to_string().contains("2500"), "{}", err);
}

#[test]
fn test_negative_inputs_to_cosmology() {
    let cosmo = Cosmology::default();
    assert!(cosmology::redshift_to_distance(&cosmo, -0.01, None).is_err());
    assert!(cosmology::redshift_to_distance(&cosmo, 0.1, Some(f64::NAN)).is_err());
    assert!(
        magnitude::apparent_to_absolute_magnitude(&cosmo, f64::INFINITY, 0.1, 0.0, false).is_err()
    );
    assert!(extinction::galactic_extinction(f64::NAN, "V").is_err());
}

// =========================================================
// Parse
// =========================================================

#[test]
fn test_malformed_sexagesimal() {
    for text in ["", "12", "12:30", "12:30:00:00", "ab:cd:ef", "12.5:30:00", "--10:00:00"] {
        let err = angle_converter::dms_to_decimal(text).unwrap_err();
        assert!(
            matches!(err, ConversionError::Parse { .. }),
            "{:?} gave {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_out_of_range_fields_are_validation_not_parse() {
    let err = angle_converter::hms_to_decimal("24:00:00").unwrap_err();
    assert!(matches!(err, ConversionError::Validation { .. }));
    let err = angle_converter::dms_to_decimal("10:60:00").unwrap_err();
    assert!(matches!(err, ConversionError::Validation { .. }));
}

#[test]
fn test_malformed_date() {
    let err = date_converter::parse_civil("1970-01-01 25:00:00").unwrap_err();
    assert!(matches!(err, ConversionError::Parse { .. }));
    assert_eq!(field(&err), Some("common_date"));
}

// =========================================================
// Computation
// =========================================================

#[test]
fn test_zero_distance_modulus() {
    let cosmo = Cosmology::default();
    let err = magnitude::apparent_to_absolute_magnitude(&cosmo, 12.0, 0.0, 0.0, false).unwrap_err();
    assert!(matches!(err, ConversionError::Computation { .. }));
    assert!(err.to_string().starts_with("Computation error"));
}

#[test]
fn test_distance_too_large_to_represent() {
    let err = cosmology::redshift_to_distance(&Cosmology::default(), 1e300, Some(0.1)).unwrap_err();
    assert!(matches!(err, ConversionError::Computation { .. }));
    assert_eq!(field(&err), Some("redshift"));
}

#[test]
fn test_mosaic_at_pole() {
    let layout = MosaicLayout::new(3, 3, 10.0, 0.0).unwrap();
    let frame = FrameFov {
        width_deg: 0.2,
        height_deg: 0.2,
    };
    let pointing = SkyPointing {
        ra_deg: 0.0,
        dec_deg: -90.0,
    };
    let err = mosaic::compute_mosaic(&layout, &frame, &pointing).unwrap_err();
    assert!(matches!(err, ConversionError::Computation { .. }));
}

// =========================================================
// Error types
// =========================================================

#[test]
fn test_error_context_rendering() {
    let err = ConversionError::computation_with_context(
        "overflow",
        ErrorContext::new("compute_mosaic")
            .with_field("dec_deg")
            .with_details("tile 3"),
    );
    assert_eq!(
        err.to_string(),
        "Computation error: overflow [operation=compute_mosaic, field=dec_deg, details=tile 3]"
    );
    assert_eq!(err.kind(), "computation");
}

#[test]
fn test_errors_are_cloneable_and_comparable() {
    let err = ConversionError::validation("x");
    assert_eq!(err.clone(), err);
}
