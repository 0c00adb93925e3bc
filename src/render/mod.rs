//! Output rendering: the joined CSV file and the optional JSON report.

pub mod output;
pub mod report;

pub use output::write_output;
pub use report::write_report;
