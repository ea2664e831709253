//! Everything a presentation layer needs from a dataset, gathered into one
//! serializable value.

use crate::alignment::AlignedWeather;
use crate::dataset::Dataset;
use chrono::NaiveDate;
use hec_meter::energy::Energy;
use log::warn;
use serde::{Deserialize, Serialize};

/// One row of the daily usage table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageRow {
    pub date: NaiveDate,
    pub electricity_kwh: f64,
    pub gas_kwh: f64,
}

/// Dense daily usage, aligned temperatures and annual estimates.
///
/// `dates`, `electricity` and `gas` are index-aligned. An annual estimate is
/// `None` when the readings do not span a full year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    pub first_reading: NaiveDate,
    pub last_reading: NaiveDate,
    pub dates: Vec<NaiveDate>,
    pub electricity: Vec<f64>,
    pub gas: Vec<f64>,
    pub temperature: AlignedWeather,
    pub annual_electricity: Option<f64>,
    pub annual_gas: Option<f64>,
}

impl UsageReport {
    pub fn rows(&self) -> impl Iterator<Item = UsageRow> + '_ {
        self.dates
            .iter()
            .zip(self.electricity.iter().zip(self.gas.iter()))
            .map(|(date, (electricity, gas))| UsageRow {
                date: *date,
                electricity_kwh: *electricity,
                gas_kwh: *gas,
            })
    }

    /// Both annual estimates, or `None` if either lacks history.
    pub fn annual_estimates(&self) -> Option<(f64, f64)> {
        self.annual_electricity.zip(self.annual_gas)
    }
}

fn annual_estimate(dataset: &Dataset, energy: Energy) -> Option<f64> {
    match dataset.average_annual_consumption(energy) {
        Ok(value) => Some(value),
        Err(other) => {
            warn!("No annual {energy} estimate: {other}");
            None
        }
    }
}

impl From<&Dataset> for UsageReport {
    fn from(dataset: &Dataset) -> Self {
        UsageReport {
            first_reading: dataset.first().at,
            last_reading: dataset.last().at,
            dates: dataset.usage_dates().collect(),
            electricity: dataset.electricity_usages().values().collect(),
            gas: dataset.gas_usages().values().collect(),
            temperature: dataset.aligned_weather(),
            annual_electricity: annual_estimate(dataset, Energy::Electricity),
            annual_gas: annual_estimate(dataset, Energy::Gas),
        }
    }
}
