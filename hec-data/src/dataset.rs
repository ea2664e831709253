use crate::error::{DataError, Result};
use crate::interpolation::interpolate;
use crate::usage::UsageSeries;
use chrono::{Duration, NaiveDate};
use hec_meter::date_range::DateRange;
use hec_meter::energy::Energy;
use hec_meter::reading::Reading;
use hec_meter::weather::Weather;
use hec_utils::dates::midnight_timestamp;
use log::debug;

/// Length of the window used for the annual consumption estimate.
pub const DAYS_PER_YEAR: i64 = 365;

/// Readings and weather samples for a single run.
///
/// Readings are strictly ascending by date and never empty. Nothing is
/// mutated after construction, so every derived series can be generated
/// any number of times with identical results.
#[derive(Debug, Clone)]
pub struct Dataset {
    readings: Vec<Reading>,
    weathers: Vec<Weather>,
}

impl Dataset {
    /// Validate the readings and take ownership of both series.
    ///
    /// Weather samples may be in any order; they are only ever filtered.
    pub fn new(readings: Vec<Reading>, weathers: Vec<Weather>) -> Result<Self> {
        if readings.is_empty() {
            return Err(DataError::NoReadings);
        }
        if let Some(pair) = readings.windows(2).find(|pair| pair[0].at >= pair[1].at) {
            return Err(DataError::UnorderedReadings {
                previous: pair[0].at,
                next: pair[1].at,
            });
        }
        debug!(
            "dataset of {} readings ({} to {}) and {} weather samples",
            readings.len(),
            readings[0].at,
            readings[readings.len() - 1].at,
            weathers.len()
        );
        Ok(Dataset { readings, weathers })
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn weathers(&self) -> &[Weather] {
        &self.weathers
    }

    pub fn first(&self) -> &Reading {
        &self.readings[0]
    }

    pub fn last(&self) -> &Reading {
        &self.readings[self.readings.len() - 1]
    }

    /// Every date covered by the readings, first through last inclusive.
    pub fn range(&self) -> DateRange {
        DateRange(self.first().at, self.last().at)
    }

    fn out_of_range(&self, date: NaiveDate) -> DataError {
        DataError::OutOfRange {
            date,
            first: self.first().at,
            last: self.last().at,
        }
    }

    /// Estimated cumulative meter value on `date`.
    ///
    /// Dates that carry a reading return the stored value exactly; other
    /// dates are interpolated between the neighbouring readings.
    pub fn value_at(&self, date: NaiveDate, energy: Energy) -> Result<f64> {
        if !self.range().contains(&date) {
            return Err(self.out_of_range(date));
        }
        Ok(self.value_within(date, energy))
    }

    /// Caller guarantees `first.at <= date <= last.at`.
    fn value_within(&self, date: NaiveDate, energy: Energy) -> f64 {
        // earliest reading on or after `date`
        let index = self.readings.partition_point(|reading| reading.at < date);
        let second = &self.readings[index];
        if second.at == date {
            return second.get(energy);
        }
        // second.at > date >= first.at, so index >= 1
        let first = &self.readings[index - 1];
        interpolate(
            midnight_timestamp(&first.at),
            midnight_timestamp(&second.at),
            midnight_timestamp(&date),
            first.get(energy),
            second.get(energy),
        )
    }

    pub fn electricity_reading(&self, date: NaiveDate) -> Result<f64> {
        self.value_at(date, Energy::Electricity)
    }

    pub fn gas_reading(&self, date: NaiveDate) -> Result<f64> {
        self.value_at(date, Energy::Gas)
    }

    /// Consumption during the day ending on `date`: the estimated meter
    /// value on `date` minus the one on the previous day.
    pub fn usage(&self, date: NaiveDate, energy: Energy) -> Result<f64> {
        if date <= self.first().at || date > self.last().at {
            return Err(self.out_of_range(date));
        }
        Ok(self.daily_delta(date, energy))
    }

    /// Caller guarantees `first.at < date <= last.at`.
    pub(crate) fn daily_delta(&self, date: NaiveDate, energy: Energy) -> f64 {
        self.value_within(date, energy) - self.value_within(date - Duration::days(1), energy)
    }

    pub fn electricity_usage(&self, date: NaiveDate) -> Result<f64> {
        self.usage(date, Energy::Electricity)
    }

    pub fn gas_usage(&self, date: NaiveDate) -> Result<f64> {
        self.usage(date, Energy::Gas)
    }

    /// Days with a usage value: the day after the first reading through the
    /// last reading. Empty for a single reading.
    pub fn usage_dates(&self) -> DateRange {
        match self.first().at.succ_opt() {
            Some(start) => DateRange(start, self.last().at),
            // first reading on the last representable day
            None => DateRange(NaiveDate::MAX, NaiveDate::MIN),
        }
    }

    /// Daily usage of one meter for every date in [`Dataset::usage_dates`].
    pub fn usages(&self, energy: Energy) -> UsageSeries<'_> {
        UsageSeries::new(self, energy)
    }

    pub fn electricity_usages(&self) -> UsageSeries<'_> {
        self.usages(Energy::Electricity)
    }

    pub fn gas_usages(&self) -> UsageSeries<'_> {
        self.usages(Energy::Gas)
    }

    /// Consumption over the 365 days following the first usage date.
    ///
    /// Fails with [`DataError::InsufficientHistory`] when the readings end
    /// before that window does.
    pub fn average_annual_consumption(&self, energy: Energy) -> Result<f64> {
        let start = self.usage_dates().0;
        let last = self.last().at;
        let end = match start.checked_add_signed(Duration::days(DAYS_PER_YEAR)) {
            Some(end) if end <= last => end,
            Some(end) => return Err(DataError::InsufficientHistory { needed: end, last }),
            None => {
                return Err(DataError::InsufficientHistory {
                    needed: NaiveDate::MAX,
                    last,
                })
            }
        };
        Ok(self.value_within(end, energy) - self.value_within(start, energy))
    }

    pub fn average_annual_electricity_consumption(&self) -> Result<f64> {
        self.average_annual_consumption(Energy::Electricity)
    }

    pub fn average_annual_gas_consumption(&self) -> Result<f64> {
        self.average_annual_consumption(Energy::Gas)
    }
}
