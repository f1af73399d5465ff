pub mod batch;
pub mod errors;
pub mod report;

pub use batch::{analyze_all, analyze_configuration, ConfigAnalysis, ConfigOutcome};
pub use errors::ReportError;
pub use report::{BatchReport, ReportStyle};
