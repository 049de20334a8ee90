use anyhow::Result;
use clap::error::ErrorKind;
use clap::Command;

use hoi_ola::commands;

fn main() -> Result<()> {
    hoi_ola::init_logging();

    let cli = Command::new("hoi-ola")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints a one-shot snapshot of RAM usage, CPU/GPU temperature and network throughput");

    // Only --help and --version stop the run; anything else still gets a snapshot
    if let Err(e) = cli.try_get_matches() {
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => log::warn!("Ignoring command line: {:?}", e.kind()),
        }
    }

    commands::snapshot()
}
