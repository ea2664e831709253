//! Command implementations for HEC CLI.
//!
//! Provides subcommands that load a meter log and the Met Office weather
//! feed, then report annual estimates or export the daily usage series.

use clap::{Args, Subcommand, ValueEnum};
use hec_meter::reading::GAS_M3_TO_KWH;
use hec_meter::weather::HEATHROW_URL;

pub mod fetch;
#[cfg(test)]
mod fixtures;
pub mod report;
pub mod series;
pub mod sources;

/// Where readings and weather come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Tab-separated meter log: date, electricity, gas (m³)
    #[arg(short = 'r', long)]
    pub readings: String,

    /// Local copy of the Met Office station data (skips the download)
    #[arg(short = 'w', long, conflicts_with = "no_weather")]
    pub weather: Option<String>,

    /// Station data URL used when no local weather file is given
    #[arg(long, default_value = HEATHROW_URL)]
    pub weather_url: String,

    /// Do not load any weather data
    #[arg(long)]
    pub no_weather: bool,

    /// kWh per cubic metre of gas
    #[arg(long, default_value_t = GAS_M3_TO_KWH)]
    pub gas_factor: f64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesFormat {
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the average annual electricity and gas consumption
    Report {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Export the dense daily usage series for charting
    Series {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = SeriesFormat::Csv)]
        format: SeriesFormat,
    },

    /// Download the Met Office station data to a local file
    FetchWeather {
        /// Output path for the station data text
        #[arg(short = 'o', long)]
        output: String,

        #[arg(long, default_value = HEATHROW_URL)]
        url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report { sources } => report::run_report(&sources).await,
        Command::Series {
            sources,
            output,
            format,
        } => series::run_series(&sources, output.as_deref(), format).await,
        Command::FetchWeather { output, url } => fetch::run_fetch_weather(&output, &url).await,
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, SeriesFormat};
    use clap::Parser;
    use hec_meter::reading::GAS_M3_TO_KWH;
    use hec_meter::weather::HEATHROW_URL;

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_report_defaults() {
        let cli = Cli::try_parse_from(["hec-cli", "report", "-r", "data.tsv"]).unwrap();
        let Command::Report { sources } = cli.command else {
            panic!("expected report");
        };
        assert_eq!(sources.readings, "data.tsv");
        assert_eq!(sources.weather, None);
        assert_eq!(sources.weather_url, HEATHROW_URL);
        assert!(!sources.no_weather);
        assert_eq!(sources.gas_factor, GAS_M3_TO_KWH);
    }

    #[test]
    fn test_series_options() {
        let cli = Cli::try_parse_from([
            "hec-cli",
            "series",
            "--readings",
            "data.tsv",
            "--weather",
            "heathrowdata.txt",
            "--gas-factor",
            "10.5",
            "-f",
            "json",
            "-o",
            "usage.json",
        ])
        .unwrap();
        let Command::Series {
            sources,
            output,
            format,
        } = cli.command
        else {
            panic!("expected series");
        };
        assert_eq!(sources.weather.as_deref(), Some("heathrowdata.txt"));
        assert_eq!(sources.gas_factor, 10.5);
        assert_eq!(output.as_deref(), Some("usage.json"));
        assert_eq!(format, SeriesFormat::Json);
    }

    #[test]
    fn test_weather_file_conflicts_with_no_weather() {
        let result = Cli::try_parse_from([
            "hec-cli",
            "report",
            "-r",
            "data.tsv",
            "-w",
            "heathrowdata.txt",
            "--no-weather",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_readings_required() {
        assert!(Cli::try_parse_from(["hec-cli", "report"]).is_err());
    }
}
