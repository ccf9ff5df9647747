pub mod u601_export_reports;
