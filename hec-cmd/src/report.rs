//! Annual consumption summary.

use crate::sources::load_dataset;
use crate::SourceArgs;
use hec_data::{DataError, Dataset};
use hec_utils::dates::format_date;
use log::warn;
use std::fmt::Write;

/// Message shown when the readings cover less than a year.
pub const INSUFFICIENT_DATA: &str = "Insufficient data for annual consumption data.";

/// Load the sources and print the summary to stdout.
pub async fn run_report(sources: &SourceArgs) -> anyhow::Result<()> {
    let dataset = load_dataset(sources).await?;
    print!("{}", render_report(&dataset)?);
    Ok(())
}

/// Human-readable summary of the reading period and annual estimates.
pub fn render_report(dataset: &Dataset) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Readings: {} to {} ({} readings, {} days of usage)",
        format_date(&dataset.first().at),
        format_date(&dataset.last().at),
        dataset.readings().len(),
        dataset.usage_dates().days()
    )?;
    writeln!(
        out,
        "Temperature samples in range: {}",
        dataset.aligned_weather().len()
    )?;
    match (
        dataset.average_annual_electricity_consumption(),
        dataset.average_annual_gas_consumption(),
    ) {
        (Ok(electricity), Ok(gas)) => {
            writeln!(
                out,
                "Average Annual Electricity Consumption: {electricity:.0} kWh"
            )?;
            writeln!(out, "Average Annual Gas Consumption: {gas:.0} kWh")?;
        }
        (Err(DataError::InsufficientHistory { needed, last }), _)
        | (_, Err(DataError::InsufficientHistory { needed, last })) => {
            warn!("Readings end {last}; a full year needs readings through {needed}");
            writeln!(out, "{INSUFFICIENT_DATA}")?;
        }
        (Err(e), _) | (_, Err(e)) => return Err(e.into()),
    }
    Ok(out)
}
