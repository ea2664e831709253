//! HEC CLI - Command line tool for home energy usage reports.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "hec-cli",
    version,
    about = "Daily electricity and gas usage from cumulative meter readings"
)]
struct Cli {
    #[command(subcommand)]
    command: hec_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{:?}", cli.command);
    hec_cmd::run(cli.command).await
}
