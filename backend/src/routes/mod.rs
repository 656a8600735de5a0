//! Request schemas and endpoint names for the JSON API.
//!
//! Each module pairs the endpoint constants with the request bodies that
//! endpoint accepts. Bodies validate at the boundary (mutually exclusive
//! fields, integral tile counts) and convert into the core input types.

pub mod angles;
pub mod cosmology;
pub mod dates;
pub mod helpers;
pub mod optics;

pub const HEALTH: &str = "health";
