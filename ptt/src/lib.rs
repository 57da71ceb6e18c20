pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use core::history::{append_snapshot, read_last_snapshot};
pub use core::parser::{classify_line, scan_status_file, scan_status_lines};
pub use models::{LineOutcome, RateSummary, Snapshot, StatusTotals};
pub use utils::print_report;
