// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::history::{append_snapshot, read_last_snapshot};
use crate::core::parser::scan_status_file;
use crate::models::{RateSummary, Snapshot};
use crate::utils::print_report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Status file with per-item page counts
    #[arg(short = 's', long, default_value = "logs/count_page.txt")]
    pub status_file: PathBuf,

    /// History log recording one `<timestamp>,<sum>` line per run
    #[arg(short = 'l', long, default_value = "logs/sum_history.log")]
    pub log_file: PathBuf,
}

/// Runs one tracking pass: totals the status file, compares against the
/// last recorded snapshot, prints the report, and appends the new
/// snapshot to the history log.
///
/// # Errors
///
/// This function may return an error if:
/// * The status file is missing or cannot be read (nothing is appended)
/// * The history log cannot be created or written
pub fn run(args: Args) -> Result<()> {
    let totals = scan_status_file(&args.status_file)?;
    let previous = read_last_snapshot(&args.log_file);

    let current = Snapshot::now(totals.total_pages);
    let rate = previous.map(|previous| RateSummary::between(&previous, &current));

    print_report(&totals, &current, rate.as_ref());

    append_snapshot(&args.log_file, &current)?;
    println!("Record saved to: {}", args.log_file.display());

    Ok(())
}
