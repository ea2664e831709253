//! Download the weather feed for offline use.

use anyhow::Context;
use hec_meter::weather::{build_client, fetch_station_data, Weather};
use log::info;

/// Fetch the station data from `url`, check that it parses, and save it
/// verbatim to `output`.
pub async fn run_fetch_weather(output: &str, url: &str) -> anyhow::Result<()> {
    let client = build_client()?;
    let body = fetch_station_data(&client, url)
        .await
        .with_context(|| format!("Failed to fetch station data from {url}"))?;
    let samples =
        Weather::parse_station_data(&body).context("Downloaded station data is invalid")?;
    std::fs::write(output, &body).with_context(|| format!("Failed to write {output}"))?;
    info!("Saved {} monthly samples to {output}", samples.len());
    Ok(())
}
