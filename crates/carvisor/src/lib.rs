//! CarVisor scoring library.
//!
//! Turns raw used-car listing attributes into a blended buyability verdict:
//! a statistical health score over age/mileage/engine features, a rule-based
//! crash/paint deduction score, and an externally sourced mechanical
//! reliability score, combined by the buyability blender into a single
//! tiered 0-100 result.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
