//! Data ingestion layer for the goal tracker.
//!
//! Responsible for reading the survey export CSV, classifying and folding
//! each row into per-person records, and running the top-level aggregation
//! pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;

pub use tracker_core as core;
