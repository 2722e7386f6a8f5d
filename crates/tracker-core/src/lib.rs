//! Domain core for the goal tracker.
//!
//! Owns the calendar arithmetic (months, quarters, the reporting-lag rule),
//! header-context resolution, name normalization, header and response
//! classification, the per-person record model, CLI settings and error types.

pub mod calendar;
pub mod classify;
pub mod context;
pub mod error;
pub mod models;
pub mod names;
pub mod settings;
