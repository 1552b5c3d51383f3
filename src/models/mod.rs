pub mod reply;
pub mod report;
pub mod schema;

pub use reply::UploadReply;
pub use report::{decode_report_list, Report, ReportContent, ReportSummary};
