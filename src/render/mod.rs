pub mod fields;
pub mod html;
pub mod list;
pub mod sheet;

pub use fields::{render_field, render_list, NOT_AVAILABLE};
pub use list::{render_report_list_html, ListEntry};
pub use sheet::ReportSheet;
