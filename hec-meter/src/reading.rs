use crate::energy::Energy;
use crate::error::{MeterError, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use hec_utils::dates::parse_date;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Energy content of one cubic metre of mains gas, in kWh.
pub const GAS_M3_TO_KWH: f64 = 11.3627;

/// Expected number of columns in a meter log row: date, electricity, gas.
pub const TSV_ROW_LENGTH: usize = 3;

/// A snapshot of the household's cumulative meters on one day.
///
/// `gas` is already converted to kWh. Two readings compare equal when they
/// were taken on the same day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reading {
    pub at: NaiveDate,
    pub electricity: i64,
    pub gas: f64,
}

impl Reading {
    pub fn new(at: NaiveDate, electricity: i64, gas: f64) -> Self {
        Reading {
            at,
            electricity,
            gas,
        }
    }

    /// The cumulative value of one meter.
    pub fn get(&self, energy: Energy) -> f64 {
        match energy {
            Energy::Electricity => self.electricity as f64,
            Energy::Gas => self.gas,
        }
    }

    /// Parse a tab-separated meter log (`YYYY-MM-DD<TAB>electricity<TAB>gas m³`)
    /// into readings sorted by date, converting gas volume with `gas_factor`.
    pub fn parse_tsv(body: &str, gas_factor: f64) -> Result<Vec<Reading>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(body.as_bytes());
        let mut readings = Vec::new();
        for row in rdr.records() {
            let record = row?;
            readings.push(Reading::from_record(&record, gas_factor)?);
        }
        readings.sort();
        Ok(readings)
    }

    fn from_record(record: &StringRecord, gas_factor: f64) -> Result<Reading> {
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != TSV_ROW_LENGTH {
            return Err(MeterError::InvalidFormat {
                line,
                reason: format!("expected {TSV_ROW_LENGTH} columns, found {}", record.len()),
            });
        }
        let at = parse_date(&record[0]).map_err(|_| MeterError::DateParse {
            line,
            value: record[0].to_string(),
        })?;
        let electricity = record[1]
            .parse::<i64>()
            .map_err(|e| MeterError::InvalidFormat {
                line,
                reason: format!("electricity {:?}: {e}", &record[1]),
            })?;
        let gas_m3 = record[2]
            .parse::<f64>()
            .map_err(|e| MeterError::InvalidFormat {
                line,
                reason: format!("gas {:?}: {e}", &record[2]),
            })?;
        Ok(Reading::new(at, electricity, gas_m3 * gas_factor))
    }
}

impl Ord for Reading {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at)
    }
}

impl Eq for Reading {}

impl PartialEq for Reading {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl PartialOrd for Reading {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
