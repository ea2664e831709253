//! Export of the daily usage series for an external charting tool.

use crate::sources::load_dataset;
use crate::{SeriesFormat, SourceArgs};
use anyhow::Context;
use hec_data::report::UsageReport;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub async fn run_series(
    sources: &SourceArgs,
    output: Option<&str>,
    format: SeriesFormat,
) -> anyhow::Result<()> {
    let dataset = load_dataset(sources).await?;
    let report = UsageReport::from(&dataset);
    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
            write_series(&report, format, BufWriter::new(file))?;
            info!("Wrote {} days of usage to {path}", report.dates.len());
        }
        None => write_series(&report, format, io::stdout().lock())?,
    }
    Ok(())
}

pub fn write_series<W: Write>(
    report: &UsageReport,
    format: SeriesFormat,
    writer: W,
) -> anyhow::Result<()> {
    match format {
        SeriesFormat::Csv => write_csv(report, writer),
        SeriesFormat::Json => write_json(report, writer),
    }
}

/// One `date,electricity_kwh,gas_kwh` row per usage day, with a header.
pub fn write_csv<W: Write>(report: &UsageReport, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in report.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(report: &UsageReport, mut writer: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
