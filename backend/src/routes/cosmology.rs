use serde::{Deserialize, Serialize};

use super::helpers::optional_number;

/// Body of `POST /calculate_redshift`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedshiftRequest {
    pub redshift: f64,
    #[serde(default, deserialize_with = "optional_number")]
    pub redshift_error: Option<f64>,
}

/// Body of `POST /calculate_absolute_magnitude`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsoluteMagnitudeRequest {
    pub apparent_magnitude: f64,
    pub redshift: f64,
    /// Galactic extinction in magnitudes; 0 when omitted.
    #[serde(default, deserialize_with = "optional_number")]
    pub extinction: Option<f64>,
    #[serde(default)]
    pub apply_k_correction: bool,
}

/// Body of `POST /calculate_extinction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtinctionRequest {
    pub ebv: f64,
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "V".to_string()
}

pub const CALCULATE_REDSHIFT: &str = "calculate_redshift";
pub const CALCULATE_ABSOLUTE_MAGNITUDE: &str = "calculate_absolute_magnitude";
pub const CALCULATE_EXTINCTION: &str = "calculate_extinction";
