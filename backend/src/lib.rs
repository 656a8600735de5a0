//! # Astro-Convert
//!
//! Astronomical conversion engine behind a small JSON API.
//!
//! This crate bundles the numeric tools an observer reaches for when planning
//! and reducing observations: sexagesimal coordinates, day-count time scales,
//! redshift distances and telescope field geometry. Every calculator is a pure
//! function returning [`error::ConversionResult`]; the optional HTTP layer
//! wraps them in a uniform `{success, result?, error?}` envelope.
//!
//! ## Features
//!
//! - **Angles**: decimal degrees ↔ HMS/DMS with configurable separators and precision
//! - **Time Handling**: MJD ↔ JD ↔ civil UTC date conversions
//! - **Cosmology**: flat ΛCDM luminosity distance with error propagation,
//!   distance modulus, Galactic extinction
//! - **Optics**: field of view, pixel scale and overlapping mosaic layouts
//! - **HTTP API**: axum endpoints for the browser client
//!
//! ## Architecture
//!
//! - [`models`]: Value types (angles, times, optics, cosmological parameters)
//! - [`services`]: The calculators
//! - [`routes`]: Request schemas and endpoint names
//! - [`api`]: Wire types and the response envelope
//! - [`config`]: TOML configuration for the server
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ConversionError, ConversionResult, ErrorContext};
