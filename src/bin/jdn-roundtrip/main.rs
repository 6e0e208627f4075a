mod cli;
mod logging;

use std::convert::Infallible;
use std::io::{self, BufWriter, Write};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use julian_day::{Harness, RoundTripReport};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let harness = Harness::new(cli.start, cli.count)
        .context("invalid day-number range")?
        .parallel(cli.parallel);
    info!(range = ?harness.range(), parallel = cli.parallel, "starting round-trip run");

    let report = if cli.quiet {
        harness.run(|_| Ok::<(), Infallible>(()))?
    } else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let report = harness
            .run(|trip| writeln!(out, "{trip}"))
            .context("failed to write round-trip line")?;
        out.flush().context("failed to flush stdout")?;
        report
    };

    check(&report)
}

fn check(report: &RoundTripReport) -> Result<()> {
    if let Some(first) = report.mismatches.first() {
        bail!(
            "{} of {} day numbers did not round-trip (first: {first})",
            report.mismatches.len(),
            report.checked
        );
    }
    Ok(())
}
