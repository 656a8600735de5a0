//! Luminosity distance for a flat ΛCDM universe.
//!
//! The comoving integral `∫₀ᶻ dz'/E(z')` is evaluated in `x = ln(1+z)`, where
//! the integrand `e^x / E(e^x − 1)` stays smooth and bounded for very large
//! redshifts, with composite Simpson quadrature.

use log::debug;
use qtty::{Gigaparsec, Kilometer, LightYear, Megaparsecs, Parsec};
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, ConversionError, ConversionResult, ErrorContext};
use crate::models::Cosmology;

/// Simpson panels per unit of `ln(1+z)`.
const PANELS_PER_LOG_UNIT: f64 = 1024.0;
const MIN_PANELS: usize = 64;

/// Luminosity distance expressed in several units, plus its propagated error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub distance_km: f64,
    pub distance_ly: f64,
    pub distance_pc: f64,
    pub distance_mpc: f64,
    pub distance_gpc: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_error_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_error_ly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_error_pc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_error_mpc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_error_gpc: Option<f64>,
}

impl DistanceResult {
    /// True when every populated distance and error field is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.distance_km,
            self.distance_ly,
            self.distance_pc,
            self.distance_mpc,
            self.distance_gpc,
        ]
        .into_iter()
        .chain(
            [
                self.distance_error_km,
                self.distance_error_ly,
                self.distance_error_pc,
                self.distance_error_mpc,
                self.distance_error_gpc,
            ]
            .into_iter()
            .flatten(),
        )
        .all(f64::is_finite)
    }
}

/// Line-of-sight comoving distance in units of the Hubble distance.
fn comoving_integral(cosmo: &Cosmology, z: f64) -> f64 {
    if z == 0.0 {
        return 0.0;
    }
    let upper = z.ln_1p();
    let mut panels = ((upper * PANELS_PER_LOG_UNIT).ceil() as usize).max(MIN_PANELS);
    if panels % 2 == 1 {
        panels += 1;
    }
    let step = upper / panels as f64;
    let integrand = |x: f64| {
        let zp1 = x.exp();
        zp1 / cosmo.efunc(zp1 - 1.0)
    };

    let mut sum = integrand(0.0) + integrand(upper);
    for i in 1..panels {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * integrand(i as f64 * step);
    }
    sum * step / 3.0
}

fn validate_redshift(z: f64, operation: &str) -> ConversionResult<f64> {
    let z = require_finite(z, operation, "redshift")?;
    if z < 0.0 {
        return Err(ConversionError::validation_with_context(
            format!("Redshift must be non-negative, got {}", z),
            ErrorContext::new(operation).with_field("redshift"),
        ));
    }
    Ok(z)
}

fn overflow_error(operation: &str, z: f64) -> ConversionError {
    ConversionError::computation_with_context(
        format!("Distance for redshift {} is too large to represent", z),
        ErrorContext::new(operation).with_field("redshift"),
    )
}

/// Luminosity distance `d_L = (1+z)(c/H0)∫₀ᶻ dz'/E(z')`.
pub fn luminosity_distance(cosmo: &Cosmology, z: f64) -> ConversionResult<Megaparsecs> {
    let z = validate_redshift(z, "luminosity_distance")?;
    let d_l = (1.0 + z) * cosmo.hubble_distance_mpc() * comoving_integral(cosmo, z);
    if !d_l.is_finite() {
        return Err(overflow_error("luminosity_distance", z));
    }
    Ok(Megaparsecs::new(d_l))
}

/// `d(d_L)/dz` in Mpc, from differentiating the integral analytically.
fn luminosity_distance_derivative(cosmo: &Cosmology, z: f64, d_l_mpc: f64) -> f64 {
    let zp1 = 1.0 + z;
    d_l_mpc / zp1 + zp1 * cosmo.hubble_distance_mpc() / cosmo.efunc(z)
}

/// Luminosity distance with optional 1σ propagation of the redshift error.
pub fn redshift_to_distance(
    cosmo: &Cosmology,
    z: f64,
    redshift_error: Option<f64>,
) -> ConversionResult<DistanceResult> {
    let z = validate_redshift(z, "redshift_to_distance")?;
    if let Some(sigma) = redshift_error {
        let sigma = require_finite(sigma, "redshift_to_distance", "redshift_error")?;
        if sigma < 0.0 {
            return Err(ConversionError::validation_with_context(
                format!("Redshift error must be non-negative, got {}", sigma),
                ErrorContext::new("redshift_to_distance").with_field("redshift_error"),
            ));
        }
    }

    let distance = luminosity_distance(cosmo, z)?;
    let error = redshift_error.map(|sigma| {
        let slope = luminosity_distance_derivative(cosmo, z, distance.value());
        Megaparsecs::new((slope * sigma).abs())
    });

    debug!(
        "redshift_to_distance: z={} d_L={} Mpc err={:?}",
        z,
        distance.value(),
        error.map(|e| e.value())
    );

    let result = DistanceResult {
        distance_km: distance.to::<Kilometer>().value(),
        distance_ly: distance.to::<LightYear>().value(),
        distance_pc: distance.to::<Parsec>().value(),
        distance_mpc: distance.value(),
        distance_gpc: distance.to::<Gigaparsec>().value(),
        distance_error_km: error.map(|e| e.to::<Kilometer>().value()),
        distance_error_ly: error.map(|e| e.to::<LightYear>().value()),
        distance_error_pc: error.map(|e| e.to::<Parsec>().value()),
        distance_error_mpc: error.map(|e| e.value()),
        distance_error_gpc: error.map(|e| e.to::<Gigaparsec>().value()),
    };
    if !result.is_finite() {
        return Err(overflow_error("redshift_to_distance", z));
    }
    Ok(result)
}
