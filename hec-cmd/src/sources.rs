//! Loading readings and weather into a [`Dataset`].

use crate::SourceArgs;
use anyhow::Context;
use hec_data::Dataset;
use hec_meter::reading::Reading;
use hec_meter::weather::{build_client, fetch_station_data, Weather};
use log::info;

/// Read the meter log and the weather feed named by `sources`.
pub async fn load_dataset(sources: &SourceArgs) -> anyhow::Result<Dataset> {
    let readings_body = std::fs::read_to_string(&sources.readings)
        .with_context(|| format!("Failed to read meter log {}", sources.readings))?;
    let weather_body = load_weather_body(sources).await?;
    dataset_from_strs(&readings_body, weather_body.as_deref(), sources.gas_factor)
}

async fn load_weather_body(sources: &SourceArgs) -> anyhow::Result<Option<String>> {
    if sources.no_weather {
        info!("Weather data disabled");
        return Ok(None);
    }
    let body = match &sources.weather {
        Some(path) => {
            info!("Reading station data from {path}");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read station data {path}"))?
        }
        None => {
            let client = build_client()?;
            fetch_station_data(&client, &sources.weather_url)
                .await
                .with_context(|| {
                    format!("Failed to fetch station data from {}", sources.weather_url)
                })?
        }
    };
    Ok(Some(body))
}

/// Parse already-loaded inputs into a dataset.
pub fn dataset_from_strs(
    readings_body: &str,
    weather_body: Option<&str>,
    gas_factor: f64,
) -> anyhow::Result<Dataset> {
    let readings =
        Reading::parse_tsv(readings_body, gas_factor).context("Failed to parse meter log")?;
    info!("Loaded {} readings", readings.len());
    let weathers = match weather_body {
        Some(body) => {
            let weathers =
                Weather::parse_station_data(body).context("Failed to parse station data")?;
            info!("Loaded {} weather samples", weathers.len());
            weathers
        }
        None => Vec::new(),
    };
    Ok(Dataset::new(readings, weathers)?)
}

#[cfg(test)]
mod tests {
    use super::dataset_from_strs;
    use crate::fixtures::{METER_LOG, STATION_DATA};
    use chrono::NaiveDate;

    #[test]
    fn test_dataset_from_strs() {
        let dataset = dataset_from_strs(METER_LOG, Some(STATION_DATA), 10.0).unwrap();
        assert_eq!(dataset.readings().len(), 2);
        assert_eq!(dataset.first().gas, 100.0);
        assert_eq!(dataset.last().gas, 120.0);
        assert_eq!(dataset.weathers().len(), 3);
        assert_eq!(
            dataset.temperature_dates(),
            vec![NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()]
        );
    }

    #[test]
    fn test_dataset_from_strs_without_weather() {
        let dataset = dataset_from_strs(METER_LOG, None, 1.0).unwrap();
        assert!(dataset.weathers().is_empty());
        assert!(dataset.aligned_weather().is_empty());
    }

    #[test]
    fn test_dataset_from_strs_rejects_duplicate_dates() {
        let log = "2020-01-01\t1000\t10.0\n2020-01-01\t1001\t10.5\n";
        let err = dataset_from_strs(log, None, 1.0).unwrap_err();
        assert!(err.to_string().contains("strictly ascending"));
    }

    #[test]
    fn test_dataset_from_strs_rejects_empty_log() {
        assert!(dataset_from_strs("", None, 1.0).is_err());
    }
}
