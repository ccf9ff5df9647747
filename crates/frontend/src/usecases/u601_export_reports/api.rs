use async_trait::async_trait;
use contracts::usecases::u601_export_reports::{
    DownloadExcelRequest, ErrorResponse, FetchDataRequest, FetchDataResponse, DOWNLOAD_EXCEL_PATH,
    FETCH_DATA_PATH,
};
use gloo_net::http::Request;

use super::workflow::{ReportApi, ReportError};
use crate::shared::api_utils::api_url;

/// API client for UseCase u601, talking to the page's own backend
#[derive(Clone, Copy, Default)]
pub struct HttpReportApi;

fn transport(err: gloo_net::Error) -> ReportError {
    ReportError::Transport(err.to_string())
}

#[async_trait(?Send)]
impl ReportApi for HttpReportApi {
    /// The backend answers failures with `success: false`, so the body is
    /// read whatever the status.
    async fn fetch_data(&self, request: &FetchDataRequest) -> Result<FetchDataResponse, ReportError> {
        let response = Request::post(&api_url(FETCH_DATA_PATH))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        response.json::<FetchDataResponse>().await.map_err(transport)
    }

    async fn download_excel(&self, request: &DownloadExcelRequest) -> Result<Vec<u8>, ReportError> {
        let response = Request::post(&api_url(DOWNLOAD_EXCEL_PATH))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        if response.ok() {
            return response.binary().await.map_err(transport);
        }

        let status = response.status();
        let body = response.json::<ErrorResponse>().await.map_err(transport)?;
        log::warn!("download_excel answered {}: {}", status, body.message);
        Err(ReportError::Server(body.message))
    }
}
