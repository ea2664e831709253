//! Data processing and interpolation for cumulative meter readings.
//!
//! This crate turns sparse cumulative readings into dense daily usage
//! series, annual consumption estimates, and a weather series restricted
//! to the period the readings cover.

pub mod alignment;
pub mod dataset;
pub mod error;
pub mod report;
pub mod usage;

pub use dataset::Dataset;
pub use error::DataError;

/// Linear interpolation between two cumulative readings.
pub mod interpolation {
    /// Linearly interpolate the value at time `t` between `(t0, v0)` and `(t1, v1)`.
    ///
    /// Consumption between two readings is assumed to happen at a steady
    /// rate. Real usage is not linear, so values between readings are only
    /// the average rate for that window.
    ///
    /// No clamping is applied; callers keep `t0 <= t <= t1` and `t0 < t1`.
    pub fn interpolate(t0: i64, t1: i64, t: i64, v0: f64, v1: f64) -> f64 {
        let progress = (t - t0) as f64 / (t1 - t0) as f64;
        v0 + (v1 - v0) * progress
    }

}
