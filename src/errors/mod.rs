pub mod types;
pub mod classification;

pub use types::ReportDeskError;
pub use classification::{ErrorClass, ErrorClassification};
