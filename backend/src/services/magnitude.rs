//! Apparent to absolute magnitude through the distance modulus.

use log::debug;
use qtty::Parsec;
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, ConversionError, ConversionResult, ErrorContext};
use crate::models::Cosmology;
use crate::services::cosmology::luminosity_distance;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeResult {
    pub absolute_magnitude: f64,
    pub distance_modulus: f64,
    pub distance_mpc: f64,
    /// Galactic extinction subtracted, in magnitudes.
    pub extinction: f64,
    /// `2.5 log10(1+z)`; reported even when not applied.
    pub k_correction: f64,
    pub k_correction_applied: bool,
}

/// Simple bolometric-style K-correction for a flat spectrum.
pub fn k_correction(z: f64) -> f64 {
    2.5 * (1.0 + z).log10()
}

/// `M = m − μ − A [− K]` with `μ = 5 log10(d_L / 10 pc)`.
pub fn apparent_to_absolute_magnitude(
    cosmo: &Cosmology,
    apparent_magnitude: f64,
    z: f64,
    extinction: f64,
    apply_k_correction: bool,
) -> ConversionResult<MagnitudeResult> {
    const OP: &str = "apparent_to_absolute_magnitude";
    let m = require_finite(apparent_magnitude, OP, "apparent_magnitude")?;
    let extinction = require_finite(extinction, OP, "extinction")?;
    if extinction < 0.0 {
        return Err(ConversionError::validation_with_context(
            format!("Extinction must be non-negative, got {}", extinction),
            ErrorContext::new(OP).with_field("extinction"),
        ));
    }

    let distance = luminosity_distance(cosmo, z)
        .map_err(|e| e.with_context(ErrorContext::new(OP).with_field("redshift")))?;
    let distance_pc = distance.to::<Parsec>().value();
    if !distance_pc.is_finite() {
        return Err(ConversionError::computation_with_context(
            format!("Distance for redshift {} is too large to represent", z),
            ErrorContext::new(OP).with_field("redshift"),
        ));
    }
    if distance_pc <= 0.0 {
        return Err(ConversionError::computation_with_context(
            "Distance modulus is undefined at zero distance (redshift 0)",
            ErrorContext::new(OP).with_field("redshift"),
        ));
    }

    let distance_modulus = 5.0 * (distance_pc / 10.0).log10();
    let k = k_correction(z);
    let mut absolute_magnitude = m - distance_modulus - extinction;
    if apply_k_correction {
        absolute_magnitude -= k;
    }
    debug!(
        "{}: m={} z={} mu={} A={} K={} (applied={}) -> M={}",
        OP, m, z, distance_modulus, extinction, k, apply_k_correction, absolute_magnitude
    );

    Ok(MagnitudeResult {
        absolute_magnitude,
        distance_modulus,
        distance_mpc: distance.value(),
        extinction,
        k_correction: k,
        k_correction_applied: apply_k_correction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_modulus_identity() {
        let cosmo = Cosmology::default();
        let result = apparent_to_absolute_magnitude(&cosmo, 18.5, 0.05, 0.12, false).unwrap();
        let back = result.absolute_magnitude + result.distance_modulus + result.extinction;
        assert!((back - 18.5).abs() < 1e-4);
    }

    #[test]
    fn test_k_correction_only_subtracted_on_request() {
        let cosmo = Cosmology::default();
        let plain = apparent_to_absolute_magnitude(&cosmo, 20.0, 0.3, 0.0, false).unwrap();
        let corrected = apparent_to_absolute_magnitude(&cosmo, 20.0, 0.3, 0.0, true).unwrap();
        assert_eq!(plain.k_correction, corrected.k_correction);
        let difference = plain.absolute_magnitude - corrected.absolute_magnitude;
        assert!((difference - plain.k_correction).abs() < 1e-12);
        assert!(corrected.k_correction_applied);
    }

    #[test]
    fn test_typical_supernova() {
        // z = 0.1 puts μ near 38.4 for H0 ≈ 68
        let result = apparent_to_absolute_magnitude(&Cosmology::default(), 19.0, 0.1, 0.0, false)
            .unwrap();
        assert!(result.distance_modulus > 38.0 && result.distance_modulus < 38.6);
        assert!(result.absolute_magnitude < -19.0);
    }

    #[test]
    fn test_zero_redshift_is_computation_error() {
        let err = apparent_to_absolute_magnitude(&Cosmology::default(), 15.0, 0.0, 0.0, false)
            .unwrap_err();
        assert!(matches!(err, ConversionError::Computation { .. }));
    }

    #[test]
    fn test_huge_redshift_is_computation_error() {
        let err = apparent_to_absolute_magnitude(&Cosmology::default(), 15.0, 1e300, 0.0, false)
            .unwrap_err();
        assert!(matches!(err, ConversionError::Computation { .. }));
    }

    #[test]
    fn test_negative_extinction_rejected() {
        let err = apparent_to_absolute_magnitude(&Cosmology::default(), 15.0, 0.1, -0.2, false)
            .unwrap_err();
        assert!(matches!(err, ConversionError::Validation { .. }));
        assert_eq!(err.context().field.as_deref(), Some("extinction"));
    }

    #[test]
    fn test_negative_redshift_is_validation_error() {
        let err = apparent_to_absolute_magnitude(&Cosmology::default(), 15.0, -1.0, 0.0, false)
            .unwrap_err();
        assert!(matches!(err, ConversionError::Validation { .. }));
    }
}
