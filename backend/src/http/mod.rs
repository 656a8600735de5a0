//! HTTP server module for Astro-Convert.
//!
//! This module exposes the calculators as a small JSON API on axum. Handlers
//! only decode the body, call the synchronous core and wrap the outcome in the
//! `{success, result?, error?}` envelope.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON decoding, envelope encoding                       │
//! │  - CORS, compression, tracing, body limit                 │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Request schemas (routes/)                                │
//! │  - "exactly one of" fields, integral tile counts          │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Calculators (services/, models/)                         │
//! │  - Pure functions returning ConversionResult              │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
