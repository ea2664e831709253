use crate::error::{MeterError, Result};
use chrono::NaiveDate;
use hec_utils::dates::day_of_month;
use log::debug;
use serde::{Deserialize, Serialize};

/// Met Office historic station data for London Heathrow.
pub const HEATHROW_URL: &str =
    "https://www.metoffice.gov.uk/pub/data/weather/uk/climate/stationdata/heathrowdata.txt";

/// The Met Office server refuses requests without a browser-like agent.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:99.0) Gecko/20100101 Firefox/99.0";

/// Number of preamble lines (station name, notes, column titles, units)
/// before the first monthly row.
pub const HEADER_LINES: usize = 7;

/// Monthly samples are pinned to the middle of their month.
pub const SAMPLE_DAY: u32 = 15;

/// Marker the feed uses for a missing monthly value.
const MISSING: &str = "---";

/// One monthly climate sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub at: NaiveDate,
    pub air_mean: f64,
}

impl Weather {
    pub fn new(at: NaiveDate, air_mean: f64) -> Self {
        Weather { at, air_mean }
    }

    /// Parse a Met Office station data text file into monthly samples.
    ///
    /// Rows look like `yyyy mm tmax tmin af rain sun [Provisional]`. Each row
    /// yields a sample on the 15th of its month with `air_mean` the midpoint
    /// of `tmax` and `tmin`. Rows with missing temperatures and free-text
    /// rows (e.g. "Site closed") are skipped. Order is preserved.
    pub fn parse_station_data(body: &str) -> Result<Vec<Weather>> {
        let mut weathers = Vec::new();
        for (index, row) in body.lines().enumerate().skip(HEADER_LINES) {
            let line = index as u64 + 1;
            let fields: Vec<&str> = row.split_whitespace().collect();
            if fields.len() < 4 {
                if !fields.is_empty() {
                    debug!("skipping short station data row {line}: {row:?}");
                }
                continue;
            }
            let (Ok(year), Ok(month)) = (fields[0].parse::<i32>(), fields[1].parse::<u32>())
            else {
                debug!("skipping non-data row {line}: {row:?}");
                continue;
            };
            let Some(at) = day_of_month(year, month, SAMPLE_DAY) else {
                return Err(MeterError::InvalidFormat {
                    line,
                    reason: format!("no such month {year}-{month}"),
                });
            };
            let (Some(tmax), Some(tmin)) = (
                parse_temperature(fields[2], line)?,
                parse_temperature(fields[3], line)?,
            ) else {
                debug!("skipping {at}: temperature missing");
                continue;
            };
            weathers.push(Weather::new(at, (tmin + tmax) / 2.0));
        }
        Ok(weathers)
    }
}

/// Parse a temperature column, stripping the estimated (`*`) and
/// instrument-change (`#`) markers. `None` for missing data.
fn parse_temperature(field: &str, line: u64) -> Result<Option<f64>> {
    if field == MISSING {
        return Ok(None);
    }
    let cleaned = field.trim_end_matches(['*', '#']);
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|e| MeterError::InvalidFormat {
            line,
            reason: format!("temperature {field:?}: {e}"),
        })
}

/// Build the HTTP client used for the weather feed.
#[cfg(feature = "api")]
pub fn build_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .user_agent(BROWSER_USER_AGENT)
        .build()?)
}

/// Download the raw station data text.
#[cfg(feature = "api")]
pub async fn fetch_station_data(client: &reqwest::Client, url: &str) -> Result<String> {
    log::info!("Fetching station data from {url}");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(MeterError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::{Weather, HEADER_LINES};
    use crate::error::MeterError;
    use chrono::NaiveDate;

    // Excerpt of https://www.metoffice.gov.uk/pub/data/weather/uk/climate/stationdata/heathrowdata.txt
    const STATION_DATA: &str = "Heathrow (London Airport)\r
Location 507800E 176700N, Lat 51.479 Lon -0.449, 25 metres amsl\r
Estimated data is marked with a * after the value.\r
Missing data (more than 2 days missing in month) is marked by  ---.\r
Sunshine data taken from an automatic Kipp & Zonen sensor marked with a #, otherwise sunshine data taken from a Campbell Stokes recorder.\r
   yyyy  mm   tmax    tmin      af    rain     sun\r
              degC    degC    days      mm   hours\r
   1948   1    8.9     3.3    ---     85.0    ---\r
   1948   2    7.9     2.2    ---     58.0    ---\r
   1948   3   14.2*    3.8    ---     19.0    ---\r
   1948   4   ---      5.1    ---     33.0    ---\r
   2020   1    9.8     4.2       2    41.0    60.3#\r
   2020   2   11.1     4.7       0    78.6    75.4#  Provisional\r
";

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_station_data() {
        let weathers = Weather::parse_station_data(STATION_DATA).unwrap();
        assert_eq!(weathers.len(), 5);
        assert_eq!(weathers[0].at, date(1948, 1, 15));
        assert!((weathers[0].air_mean - 6.1).abs() < 1e-9);
        assert_eq!(weathers[2].at, date(1948, 3, 15));
        assert!((weathers[2].air_mean - 9.0).abs() < 1e-9);
        assert_eq!(weathers[4].at, date(2020, 2, 15));
        assert!((weathers[4].air_mean - 7.9).abs() < 1e-9);
    }

    #[test]
    fn test_parse_skips_missing_temperature() {
        let weathers = Weather::parse_station_data(STATION_DATA).unwrap();
        assert!(weathers.iter().all(|w| w.at != date(1948, 4, 15)));
    }

    #[test]
    fn test_parse_accepts_unix_line_endings_and_text_rows() {
        let body = STATION_DATA.replace("\r\n", "\n") + "   Site closed\n\n";
        let weathers = Weather::parse_station_data(&body).unwrap();
        assert_eq!(weathers.len(), 5);
    }

    #[test]
    fn test_parse_header_only() {
        let header: String = STATION_DATA
            .lines()
            .take(HEADER_LINES)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(Weather::parse_station_data(&header).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbled_temperature() {
        let body = format!("{STATION_DATA}   2020   3   1o.2     4.4       2    33.0   170.1#\n");
        let err = Weather::parse_station_data(&body).unwrap_err();
        assert!(matches!(err, MeterError::InvalidFormat { line: 14, .. }));
    }

    #[test]
    fn test_parse_rejects_invalid_month() {
        let body = format!("{STATION_DATA}   2020  13    1.2     4.4       2    33.0   170.1#\n");
        assert!(Weather::parse_station_data(&body).is_err());
    }
}
