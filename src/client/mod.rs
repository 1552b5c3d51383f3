pub mod http;
pub mod transport;
pub mod workflow;

pub use http::HttpReportApi;
pub use transport::{ExportedFile, ReportApi, UploadFile};
pub use workflow::ReportClient;
