//! Property tests for the invariants every calculator must keep.

use proptest::prelude::*;

use astro_convert::models::{Cosmology, SexagesimalFormat, SexagesimalStyle};
use astro_convert::services::angle_converter::{
    decimal_to_dms, decimal_to_hms, dms_to_decimal, hms_to_decimal,
};
use astro_convert::services::cosmology::luminosity_distance;
use astro_convert::services::date_converter::{civil_to_mjd, convert, mjd_to_civil, DateInput};
use astro_convert::services::magnitude::apparent_to_absolute_magnitude;

mod support;

fn three_decimals() -> SexagesimalFormat {
    SexagesimalFormat::new(SexagesimalStyle::Colon, 3)
}

proptest! {
    #[test]
    fn hms_round_trip(ra in 0.0f64..360.0) {
        let text = decimal_to_hms(ra, three_decimals()).unwrap();
        let back = hms_to_decimal(&text).unwrap();
        prop_assert!(support::angular_gap(ra, back) < 1e-4, "{} -> {} -> {}", ra, text, back);
    }

    #[test]
    fn dms_round_trip(dec in -90.0f64..=90.0) {
        let text = decimal_to_dms(dec, three_decimals()).unwrap();
        let back = dms_to_decimal(&text).unwrap();
        prop_assert!((dec - back).abs() < 1e-4, "{} -> {} -> {}", dec, text, back);
    }

    #[test]
    fn marker_style_round_trip(dec in -90.0f64..=90.0) {
        let format = SexagesimalFormat::new(SexagesimalStyle::Markers, 2);
        let text = decimal_to_dms(dec, format).unwrap();
        let back = dms_to_decimal(&text).unwrap();
        prop_assert!((dec - back).abs() < 1e-4);
    }

    #[test]
    fn jd_is_mjd_plus_offset(mjd in -600_000.0f64..200_000.0) {
        let result = convert(DateInput::Mjd(mjd)).unwrap();
        prop_assert!((result.jd - (mjd + 2_400_000.5)).abs() < 1e-9);
    }

    #[test]
    fn civil_round_trip_to_the_second(seconds in 0i64..4_000_000_000) {
        let mjd = 40_587.0 + seconds as f64 / 86_400.0;
        let civil = mjd_to_civil(mjd).unwrap();
        let back = civil_to_mjd(&civil).unwrap();
        prop_assert!(((back - mjd) * 86_400.0).abs() < 1e-3);
    }

    #[test]
    fn distance_strictly_increasing(z1 in 0.0f64..20.0, dz in 1e-3f64..5.0) {
        let cosmo = Cosmology::default();
        let near = luminosity_distance(&cosmo, z1).unwrap().value();
        let far = luminosity_distance(&cosmo, z1 + dz).unwrap().value();
        prop_assert!(near < far);
    }

    #[test]
    fn distance_modulus_identity(m in -5.0f64..30.0, z in 0.001f64..5.0) {
        let cosmo = Cosmology::default();
        let result = apparent_to_absolute_magnitude(&cosmo, m, z, 0.0, false).unwrap();
        let d_pc = luminosity_distance(&cosmo, z).unwrap().value() * 1e6;
        prop_assert!((result.distance_modulus - 5.0 * (d_pc / 10.0).log10()).abs() < 1e-4);
        prop_assert!((result.absolute_magnitude + result.distance_modulus - m).abs() < 1e-9);
    }
}
