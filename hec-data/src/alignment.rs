use crate::dataset::Dataset;
use chrono::NaiveDate;
use hec_meter::date_range::DateRange;
use hec_meter::weather::Weather;
use serde::{Deserialize, Serialize};

/// Weather samples restricted to a reading period, as parallel columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedWeather {
    pub dates: Vec<NaiveDate>,
    pub air_means: Vec<f64>,
}

impl AlignedWeather {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl<'a> FromIterator<&'a Weather> for AlignedWeather {
    fn from_iter<I: IntoIterator<Item = &'a Weather>>(iter: I) -> Self {
        let (dates, air_means) = iter
            .into_iter()
            .map(|weather| (weather.at, weather.air_mean))
            .unzip();
        AlignedWeather { dates, air_means }
    }
}

/// Samples dated within `bounds` (inclusive), in their original order.
/// Values are passed through untouched.
pub fn samples_within(weathers: &[Weather], bounds: DateRange) -> impl Iterator<Item = &Weather> {
    weathers
        .iter()
        .filter(move |weather| bounds.contains(&weather.at))
}

impl Dataset {
    /// Weather samples taken between the first and last reading.
    pub fn weather_in_range(&self) -> impl Iterator<Item = &Weather> {
        samples_within(self.weathers(), self.range())
    }

    pub fn aligned_weather(&self) -> AlignedWeather {
        self.weather_in_range().collect()
    }

    pub fn temperature_dates(&self) -> Vec<NaiveDate> {
        self.weather_in_range().map(|weather| weather.at).collect()
    }

    pub fn air_means(&self) -> Vec<f64> {
        self.weather_in_range()
            .map(|weather| weather.air_mean)
            .collect()
    }
}
