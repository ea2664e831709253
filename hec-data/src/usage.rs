use crate::dataset::Dataset;
use chrono::NaiveDate;
use hec_meter::date_range::DateRange;
use hec_meter::energy::Energy;
use serde::{Deserialize, Serialize};

/// Consumption of one meter during the day ending on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub date: NaiveDate,
    pub value: f64,
}

/// Lazy daily usage series for one meter, in ascending date order with one
/// entry per calendar day.
///
/// Cloning gives an independent cursor over the same days.
#[derive(Debug, Clone)]
pub struct UsageSeries<'a> {
    dataset: &'a Dataset,
    energy: Energy,
    days: DateRange,
}

impl<'a> UsageSeries<'a> {
    pub(crate) fn new(dataset: &'a Dataset, energy: Energy) -> Self {
        UsageSeries {
            dataset,
            energy,
            days: dataset.usage_dates(),
        }
    }

    pub fn energy(&self) -> Energy {
        self.energy
    }

    /// Drop the dates, keeping only the usage values.
    pub fn values(self) -> impl Iterator<Item = f64> + 'a {
        self.map(|usage| usage.value)
    }
}

impl Iterator for UsageSeries<'_> {
    type Item = DailyUsage;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.days.next()?;
        Some(DailyUsage {
            date,
            value: self.dataset.daily_delta(date, self.energy),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.days.size_hint()
    }
}

impl ExactSizeIterator for UsageSeries<'_> {}

#[cfg(test)]
mod tests {
    use crate::dataset::Dataset;
    use chrono::NaiveDate;
    use hec_meter::energy::Energy;
    use hec_meter::reading::Reading;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Reading::new(date(2021, 11, 28), 20100, 8000.0),
                Reading::new(date(2021, 12, 1), 20130, 8090.0),
                Reading::new(date(2021, 12, 5), 20170, 8190.0),
            ],
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_series_follows_usage_dates() {
        let dataset = dataset();
        let series = dataset.electricity_usages();
        assert_eq!(series.len(), 7);
        let dates: Vec<NaiveDate> = series.map(|usage| usage.date).collect();
        let expected: Vec<NaiveDate> = dataset.usage_dates().collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_series_values() {
        let dataset = dataset();
        let electricity: Vec<f64> = dataset.electricity_usages().values().collect();
        let gas: Vec<f64> = dataset.gas_usages().values().collect();
        assert_eq!(electricity.len(), gas.len());
        for value in &electricity[..3] {
            assert!((value - 10.0).abs() < 1e-6);
        }
        for value in &gas[3..] {
            assert!((value - 25.0).abs() < 1e-6);
        }
        let total: f64 = electricity.iter().sum();
        assert!((total - 70.0).abs() < 1e-6);
    }

    #[test]
    fn test_series_matches_usage() {
        let dataset = dataset();
        for usage in dataset.gas_usages() {
            assert_eq!(usage.value, dataset.gas_usage(usage.date).unwrap());
        }
    }

    #[test]
    fn test_series_is_restartable() {
        let dataset = dataset();
        let series = dataset.usages(Energy::Gas);
        assert_eq!(series.energy(), Energy::Gas);
        let first: Vec<_> = series.clone().collect();
        let second: Vec<_> = series.collect();
        let third: Vec<_> = dataset.gas_usages().collect();
        assert_eq!(first, second);
        assert_eq!(first, third);
    }
}
