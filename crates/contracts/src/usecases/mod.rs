pub mod common;
pub mod u601_export_reports;
