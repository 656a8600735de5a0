//! Galactic extinction from a reddening value.
//!
//! `A_λ = R_λ · E(B−V)` with the Schlafly & Finkbeiner (2011) coefficients.
//! Survey filter names are mapped onto the table first; blended passbands
//! (clear/luminance, ATLAS orange) use the mean coefficient of their
//! constituent bands.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{require_finite, ConversionError, ConversionResult, ErrorContext};

/// `R_λ = A_λ / E(B−V)` for an `R_V = 3.1` extinction curve.
const SF11_COEFFICIENTS: &[(&str, f64)] = &[
    ("U", 4.107),
    ("B", 3.641),
    ("V", 2.682),
    ("R", 2.119),
    ("I", 1.516),
    ("J", 0.709),
    ("H", 0.449),
    ("K", 0.302),
    ("u", 4.239),
    ("g", 3.303),
    ("r", 2.285),
    ("i", 1.698),
    ("z", 1.263),
    ("Y", 1.087),
    ("W1", 0.184),
    ("W2", 0.113),
];

/// Blended passbands and the table bands they average over.
const BLENDED_BANDS: &[(&str, &[&str])] = &[("BVR_avg", &["B", "V", "R"]), ("gr_avg", &["g", "r"])];

const FILTER_ALIASES: &[(&str, &str)] = &[
    ("y", "Y"),
    ("w", "V"),
    ("unfiltered", "V"),
    ("unknown", "V"),
    ("L", "BVR_avg"),
    ("Clear", "BVR_avg"),
    ("c", "B"),
    ("cyan", "B"),
    ("o", "gr_avg"),
    ("orange", "gr_avg"),
    ("G", "g"),
    ("gaia_g", "g"),
];

const FALLBACK_BAND: &str = "V";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtinctionResult {
    /// Filter name as supplied.
    pub filter: String,
    /// Table band (or blend) the filter resolved to.
    pub band: String,
    pub ebv: f64,
    pub r_lambda: f64,
    /// `A_λ` in magnitudes.
    pub extinction: f64,
    /// True when the filter was not recognised and V was used instead.
    pub fallback: bool,
}

fn table_coefficient(band: &str) -> Option<f64> {
    SF11_COEFFICIENTS
        .iter()
        .find(|(name, _)| *name == band)
        .map(|(_, r)| *r)
}

fn band_coefficient(band: &str) -> Option<f64> {
    if let Some(r) = table_coefficient(band) {
        return Some(r);
    }
    let (_, members) = BLENDED_BANDS.iter().find(|(name, _)| *name == band)?;
    let sum: Option<f64> = members.iter().map(|m| table_coefficient(m)).sum();
    sum.map(|s| s / members.len() as f64)
}

/// Resolve a filter name to `(band, R_λ, fallback)`. Names are case-sensitive
/// (`g` is SDSS g, `G` is Gaia G).
pub fn resolve_filter(filter: &str) -> (String, f64, bool) {
    let name = filter.trim();
    let band = FILTER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, band)| *band)
        .unwrap_or(name);
    match band_coefficient(band) {
        Some(r) => (band.to_string(), r, false),
        None => {
            warn!("Filter '{}' not supported, using {} band", name, FALLBACK_BAND);
            let r = table_coefficient(FALLBACK_BAND).unwrap_or(2.682);
            (FALLBACK_BAND.to_string(), r, true)
        }
    }
}

/// Extinction in `filter` for a given `E(B−V)`.
pub fn galactic_extinction(ebv: f64, filter: &str) -> ConversionResult<ExtinctionResult> {
    let ebv = require_finite(ebv, "galactic_extinction", "ebv")?;
    if ebv < 0.0 {
        return Err(ConversionError::validation_with_context(
            format!("E(B-V) must be non-negative, got {}", ebv),
            ErrorContext::new("galactic_extinction").with_field("ebv"),
        ));
    }
    let (band, r_lambda, fallback) = resolve_filter(filter);
    let extinction = r_lambda * ebv;
    debug!("galactic_extinction: E(B-V)={} filter={} band={} A={}", ebv, filter, band, extinction);
    Ok(ExtinctionResult {
        filter: filter.to_string(),
        band,
        ebv,
        r_lambda,
        extinction,
        fallback,
    })
}

/// Names accepted by [`galactic_extinction`] without falling back.
pub fn supported_filters() -> Vec<&'static str> {
    SF11_COEFFICIENTS
        .iter()
        .map(|(name, _)| *name)
        .chain(FILTER_ALIASES.iter().map(|(alias, _)| *alias))
        .collect()
}
