pub mod date_range;
pub mod report_kind;
pub mod request;
pub mod response;

pub use date_range::DateRange;
pub use report_kind::ReportKind;
pub use request::{DownloadExcelRequest, FetchDataRequest};
pub use response::{ErrorResponse, FetchDataResponse};

use crate::usecases::common::UseCaseMetadata;

/// Backend endpoint returning report rows as JSON
pub const FETCH_DATA_PATH: &str = "/fetch_data";

/// Backend endpoint turning report rows into an .xlsx payload
pub const DOWNLOAD_EXCEL_PATH: &str = "/download_excel";

/// MIME type of the spreadsheet returned by `/download_excel`
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct ExportReports;

impl UseCaseMetadata for ExportReports {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "export_reports"
    }

    fn display_name() -> &'static str {
        "Jira Issues Fetcher"
    }

    fn description() -> &'static str {
        "Busca relatórios do Jira e exporta para Excel"
    }
}
