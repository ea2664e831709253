//! Core types for home energy meter and weather data.
//!
//! Readings and weather samples are parsed here from their external formats
//! (a tab-separated meter log and the Met Office historic station data
//! feed) into immutable, date-ordered values for `hec-data`.

pub mod date_range;
pub mod energy;
pub mod error;
pub mod reading;
pub mod weather;
