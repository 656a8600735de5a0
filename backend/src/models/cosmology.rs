//! Cosmological parameter set.
//!
//! A flat ΛCDM model with radiation. Photon density follows from the CMB
//! temperature and massless neutrinos add `0.2271 · N_eff` of it; dark energy
//! closes the budget so the model stays flat.

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult, ErrorContext};

/// Speed of light in km/s.
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// `Ωγ h² = PHOTON_DENSITY_COEFF · T_cmb⁴`.
const PHOTON_DENSITY_COEFF: f64 = 4.481_500_52e-7;

/// Neutrino-to-photon energy density ratio per effective species, `(7/8)(4/11)^(4/3)`.
const NEUTRINO_PER_SPECIES: f64 = 0.227_107_317_66;

/// Fixed cosmology used for every distance computation of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cosmology {
    /// Hubble constant in km/s/Mpc.
    #[serde(default = "default_h0")]
    pub h0: f64,
    /// Matter density parameter at z = 0.
    #[serde(default = "default_omega_m")]
    pub omega_m: f64,
    /// CMB temperature today in kelvin; 0 disables radiation.
    #[serde(default = "default_t_cmb")]
    pub t_cmb: f64,
    /// Effective number of (massless) neutrino species.
    #[serde(default = "default_n_eff")]
    pub n_eff: f64,
}

fn default_h0() -> f64 {
    67.7
}

fn default_omega_m() -> f64 {
    0.309
}

fn default_t_cmb() -> f64 {
    2.725
}

fn default_n_eff() -> f64 {
    3.04
}

impl Default for Cosmology {
    fn default() -> Self {
        Self {
            h0: default_h0(),
            omega_m: default_omega_m(),
            t_cmb: default_t_cmb(),
            n_eff: default_n_eff(),
        }
    }
}

impl Cosmology {
    /// Build and validate a parameter set.
    pub fn new(h0: f64, omega_m: f64, t_cmb: f64, n_eff: f64) -> ConversionResult<Self> {
        let cosmo = Self {
            h0,
            omega_m,
            t_cmb,
            n_eff,
        };
        cosmo.validate()?;
        Ok(cosmo)
    }

    /// Matter-only flat model (no radiation), handy for closed-form checks.
    pub fn matter_lambda(h0: f64, omega_m: f64) -> ConversionResult<Self> {
        Self::new(h0, omega_m, 0.0, 0.0)
    }

    pub fn validate(&self) -> ConversionResult<()> {
        let context = |field: &str| ErrorContext::new("cosmology").with_field(field);
        if !(self.h0.is_finite() && self.h0 > 0.0) {
            return Err(ConversionError::validation_with_context(
                format!("H0 must be positive, got {}", self.h0),
                context("h0"),
            ));
        }
        if !(self.omega_m.is_finite() && (0.0..=1.0).contains(&self.omega_m)) {
            return Err(ConversionError::validation_with_context(
                format!("Omega_m must be in [0, 1], got {}", self.omega_m),
                context("omega_m"),
            ));
        }
        if !(self.t_cmb.is_finite() && self.t_cmb >= 0.0) {
            return Err(ConversionError::validation_with_context(
                format!("T_cmb must be non-negative, got {}", self.t_cmb),
                context("t_cmb"),
            ));
        }
        if !(self.n_eff.is_finite() && self.n_eff >= 0.0) {
            return Err(ConversionError::validation_with_context(
                format!("N_eff must be non-negative, got {}", self.n_eff),
                context("n_eff"),
            ));
        }
        if self.omega_lambda() < 0.0 {
            return Err(ConversionError::validation_with_context(
                "Matter and radiation densities exceed the flat-universe budget",
                context("omega_m"),
            ));
        }
        Ok(())
    }

    /// Dimensionless Hubble parameter `h = H0 / 100`.
    pub fn little_h(&self) -> f64 {
        self.h0 / 100.0
    }

    /// Hubble distance `c / H0` in Mpc.
    pub fn hubble_distance_mpc(&self) -> f64 {
        SPEED_OF_LIGHT_KM_S / self.h0
    }

    pub fn omega_gamma(&self) -> f64 {
        let h = self.little_h();
        PHOTON_DENSITY_COEFF * self.t_cmb.powi(4) / (h * h)
    }

    pub fn omega_nu(&self) -> f64 {
        NEUTRINO_PER_SPECIES * self.n_eff * self.omega_gamma()
    }

    pub fn omega_r(&self) -> f64 {
        self.omega_gamma() + self.omega_nu()
    }

    pub fn omega_lambda(&self) -> f64 {
        1.0 - self.omega_m - self.omega_r()
    }

    /// Dimensionless expansion rate `E(z) = H(z) / H0`.
    pub fn efunc(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        let zp1_3 = zp1 * zp1 * zp1;
        (self.omega_r() * zp1_3 * zp1 + self.omega_m * zp1_3 + self.omega_lambda()).sqrt()
    }
}
