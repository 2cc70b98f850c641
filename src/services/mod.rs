pub mod report_writer;
pub mod scorer;

pub use report_writer::{EvalReport, ReportWriter};
pub use scorer::{score, score_provider};
