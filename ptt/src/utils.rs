// src/utils.rs
use crate::models::{RateSummary, Snapshot, StatusTotals};

/// Prints the per-run report in a fixed operator-facing layout.
///
/// With a previous snapshot the three rate lines are shown; on a first
/// run the "First record" marker takes their place.
pub fn print_report(totals: &StatusTotals, current: &Snapshot, rate: Option<&RateSummary>) {
    println!("Time: {}", current.timestamp.format("%Y-%m-%d %H:%M:%S"));
    println!("Completed files: {}", totals.completed_files);
    println!("Skipped files (incomplete): {}", totals.skipped_incomplete);
    println!(
        "Skipped files (too many pages): {}",
        totals.skipped_too_many_pages
    );
    println!("Total completed pages: {}", totals.total_pages);

    match rate {
        Some(rate) => {
            println!("Seconds since last record: {:.2}", rate.elapsed_seconds);
            println!("Page increment: {}", rate.increment);
            println!("Average rate: {:.2} pages/sec", rate.per_second);
        }
        None => println!("First record"),
    }
}
