//! Fetch a report and save it as a spreadsheet.
//!
//! Idle -> Fetching -> (Downloading | Failed) -> (Downloaded | Failed).
//! The browser is reached only through [`ReportSurface`] and the backend
//! only through [`ReportApi`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::usecases::u601_export_reports::{
    DateRange, DownloadExcelRequest, FetchDataRequest, FetchDataResponse, ReportKind,
};
use thiserror::Error;

use super::session::ReportSession;
use crate::shared::date_utils::filename_timestamp;
use crate::shared::toast::ToastKind;

/// Pause between the "records found" toast and the automatic download.
pub const AUTO_DOWNLOAD_DELAY_MS: u32 = 1000;

/// Fragments of backend messages caused by missing Jira credentials.
pub const CONFIG_ERROR_MARKERS: [&str; 3] =
    ["Credenciais não configuradas", "JIRA_EMAIL", "JIRA_TOKEN"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Por favor, selecione as datas de início e fim.")]
    MissingDates,

    #[error("Nenhum dado para exportar.")]
    NoData,

    /// Failure reported by the backend, message shown verbatim
    #[error("{0}")]
    Server(String),

    /// Request never completed or the reply could not be read
    #[error("{0}")]
    Transport(String),
}

impl ReportError {
    pub fn toast_kind(&self) -> ToastKind {
        match self {
            ReportError::NoData => ToastKind::Warning,
            _ => ToastKind::Error,
        }
    }
}

/// Backend endpoints used by the workflow.
#[async_trait(?Send)]
pub trait ReportApi {
    async fn fetch_data(&self, request: &FetchDataRequest) -> Result<FetchDataResponse, ReportError>;

    /// Spreadsheet bytes on 2xx; `Server` with the JSON message otherwise.
    async fn download_excel(&self, request: &DownloadExcelRequest) -> Result<Vec<u8>, ReportError>;
}

/// Page capabilities the workflow needs.
#[async_trait(?Send)]
pub trait ReportSurface {
    fn show_overlay(&self);
    fn hide_overlay(&self);
    fn show_toast(&self, message: &str, kind: ToastKind);
    fn date_range(&self) -> DateRange;
    /// Best effort; does nothing when the page has no config alert.
    fn highlight_config_alert(&self);
    fn save_file(&self, bytes: &[u8], filename: &str) -> Result<(), String>;
    fn now(&self) -> DateTime<Utc>;
    async fn pause(&self, ms: u32);
}

pub fn is_config_error(message: &str) -> bool {
    CONFIG_ERROR_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

fn is_divergencias(report_type: &str) -> bool {
    report_type == ReportKind::Divergencias.code()
}

/// `{type}_{timestamp}.xlsx`, or `divergencias_{start}_{end}.xlsx` when the
/// divergencias form carries both dates.
pub fn generate_filename(report_type: &str, range: &DateRange, now: DateTime<Utc>) -> String {
    if is_divergencias(report_type) {
        if let Some((start, end)) = range.complete() {
            return format!("divergencias_{}_{}.xlsx", start, end);
        }
    }
    format!("{}_{}.xlsx", report_type, filename_timestamp(now))
}

/// Fetches `report_type` into `session` and, on success, downloads it.
///
/// `on_stored` sees the session as soon as the new rows are in it, before
/// the automatic download starts. Returns the saved filename. Every failure
/// has already been shown to the user when this returns.
pub async fn fetch_data<S, A, F>(
    surface: &S,
    api: &A,
    session: &mut ReportSession,
    report_type: &str,
    on_stored: F,
) -> Result<String, ReportError>
where
    S: ReportSurface + ?Sized,
    A: ReportApi + ?Sized,
    F: FnOnce(&ReportSession),
{
    let mut request = FetchDataRequest::new(report_type);
    if is_divergencias(report_type) {
        let range = surface.date_range();
        if range.complete().is_none() {
            let err = ReportError::MissingDates;
            surface.show_toast(&err.to_string(), err.toast_kind());
            return Err(err);
        }
        request = request.with_range(&range);
    }

    surface.show_overlay();
    let reply = api.fetch_data(&request).await;
    surface.hide_overlay();

    let reply = match reply {
        Ok(reply) => reply,
        Err(err) => {
            log::warn!("fetch_data({}) failed: {}", report_type, err);
            surface.show_toast(&format!("Erro de conexão: {}", err), ToastKind::Error);
            return Err(err);
        }
    };

    if !reply.success {
        let message = reply.message.unwrap_or_default();
        surface.show_toast(&message, ToastKind::Error);
        if is_config_error(&message) {
            surface.highlight_config_alert();
        }
        return Err(ReportError::Server(message));
    }

    let count = reply.row_count();
    session.replace(report_type, reply.data.unwrap_or_default());
    log::info!("{}: {} rows fetched", report_type, session.len());
    on_stored(session);

    surface.show_toast(
        &format!("{} registros encontrados. Iniciando download...", count),
        ToastKind::Success,
    );

    surface.pause(AUTO_DOWNLOAD_DELAY_MS).await;
    download_excel(surface, api, session).await
}

/// Exports exactly the rows and type held by `session`.
pub async fn download_excel<S, A>(
    surface: &S,
    api: &A,
    session: &ReportSession,
) -> Result<String, ReportError>
where
    S: ReportSurface + ?Sized,
    A: ReportApi + ?Sized,
{
    if session.is_empty() {
        let err = ReportError::NoData;
        surface.show_toast(&err.to_string(), err.toast_kind());
        return Err(err);
    }

    let filename = generate_filename(session.report_type(), &surface.date_range(), surface.now());
    let request = DownloadExcelRequest {
        data: session.rows().to_vec(),
        filename: filename.clone(),
    };

    let saved = match api.download_excel(&request).await {
        Ok(bytes) => surface
            .save_file(&bytes, &filename)
            .map_err(ReportError::Transport),
        Err(err) => Err(err),
    };

    match saved {
        Ok(()) => {
            log::info!("saved {}", filename);
            surface.show_toast("Arquivo baixado com sucesso!", ToastKind::Success);
            Ok(filename)
        }
        Err(ReportError::Server(message)) => {
            surface.show_toast(&message, ToastKind::Error);
            Err(ReportError::Server(message))
        }
        Err(err) => {
            log::warn!("download of {} failed: {}", filename, err);
            surface.show_toast(&format!("Erro ao baixar arquivo: {}", err), ToastKind::Error);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_export_reports::session::SessionBook;
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Overlay(bool),
        Toast(String, ToastKind),
        Highlight,
        Saved(String, usize),
        Paused(u32),
    }

    struct FakeSurface {
        range: DateRange,
        events: RefCell<Vec<Event>>,
        book: RefCell<SessionBook>,
        latest_at_pause: RefCell<Option<String>>,
    }

    impl FakeSurface {
        fn new(range: DateRange) -> Self {
            Self {
                range,
                events: RefCell::new(Vec::new()),
                book: RefCell::new(SessionBook::default()),
                latest_at_pause: RefCell::new(None),
            }
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        fn toasts(&self) -> Vec<(String, ToastKind)> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Toast(message, kind) => Some((message, kind)),
                    _ => None,
                })
                .collect()
        }

        fn count(&self, wanted: &Event) -> usize {
            self.events().iter().filter(|e| *e == wanted).count()
        }
    }

    #[async_trait(?Send)]
    impl ReportSurface for FakeSurface {
        fn show_overlay(&self) {
            self.events.borrow_mut().push(Event::Overlay(true));
        }

        fn hide_overlay(&self) {
            self.events.borrow_mut().push(Event::Overlay(false));
        }

        fn show_toast(&self, message: &str, kind: ToastKind) {
            self.events
                .borrow_mut()
                .push(Event::Toast(message.to_string(), kind));
        }

        fn date_range(&self) -> DateRange {
            self.range.clone()
        }

        fn highlight_config_alert(&self) {
            self.events.borrow_mut().push(Event::Highlight);
        }

        fn save_file(&self, bytes: &[u8], filename: &str) -> Result<(), String> {
            self.events
                .borrow_mut()
                .push(Event::Saved(filename.to_string(), bytes.len()));
            Ok(())
        }

        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
        }

        async fn pause(&self, ms: u32) {
            self.events.borrow_mut().push(Event::Paused(ms));
            *self.latest_at_pause.borrow_mut() = self
                .book
                .borrow()
                .latest()
                .map(|session| session.report_type().to_string());
        }
    }

    struct FakeApi {
        fetch_reply: Result<FetchDataResponse, ReportError>,
        download_reply: Result<Vec<u8>, ReportError>,
        fetches: RefCell<Vec<FetchDataRequest>>,
        downloads: RefCell<Vec<DownloadExcelRequest>>,
    }

    impl FakeApi {
        fn new(fetch_reply: Result<FetchDataResponse, ReportError>) -> Self {
            Self {
                fetch_reply,
                download_reply: Ok(vec![0x50, 0x4b, 0x03, 0x04]),
                fetches: RefCell::new(Vec::new()),
                downloads: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.fetches.borrow().len() + self.downloads.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ReportApi for FakeApi {
        async fn fetch_data(
            &self,
            request: &FetchDataRequest,
        ) -> Result<FetchDataResponse, ReportError> {
            self.fetches.borrow_mut().push(request.clone());
            self.fetch_reply.clone()
        }

        async fn download_excel(
            &self,
            request: &DownloadExcelRequest,
        ) -> Result<Vec<u8>, ReportError> {
            self.downloads.borrow_mut().push(request.clone());
            self.download_reply.clone()
        }
    }

    fn rows(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!({ "LOG": format!("LOG-{}", i) })).collect()
    }

    fn success(n: usize) -> FetchDataResponse {
        FetchDataResponse {
            success: true,
            data: Some(rows(n)),
            count: Some(n),
            message: None,
        }
    }

    fn failure(message: &str) -> FetchDataResponse {
        FetchDataResponse {
            success: false,
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_filename_uses_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(
            generate_filename("issues", &DateRange::default(), now),
            "issues_2024-01-15T10-30-45.xlsx"
        );
    }

    #[test]
    fn test_filename_for_divergencias_uses_dates() {
        let now = Utc::now();
        let range = DateRange::new("2024-01-01", "2024-01-31");
        assert_eq!(
            generate_filename("divergencias", &range, now),
            "divergencias_2024-01-01_2024-01-31.xlsx"
        );
        // other reports ignore the form dates
        assert!(generate_filename("avarias", &range, now).starts_with("avarias_"));
    }

    #[test]
    fn test_config_error_markers() {
        assert!(is_config_error("JIRA_TOKEN ausente"));
        assert!(is_config_error(
            "Credenciais não configuradas. Verifique as variáveis JIRA_EMAIL e JIRA_TOKEN no arquivo .env"
        ));
        assert!(!is_config_error("Tipo de relatório inválido"));
    }

    #[tokio::test]
    async fn test_divergencias_without_dates_skips_network() {
        let surface = FakeSurface::new(DateRange::new("2024-01-01", ""));
        let api = FakeApi::new(Ok(success(1)));
        let mut session = ReportSession::default();

        let result = fetch_data(&surface, &api, &mut session, "divergencias", |_| {}).await;

        assert_eq!(result, Err(ReportError::MissingDates));
        assert_eq!(api.calls(), 0);
        assert_eq!(
            surface.events(),
            vec![Event::Toast(
                "Por favor, selecione as datas de início e fim.".into(),
                ToastKind::Error
            )]
        );
    }

    #[tokio::test]
    async fn test_divergencias_sends_date_range() {
        let surface = FakeSurface::new(DateRange::new("2024-01-01", "2024-01-31"));
        let api = FakeApi::new(Ok(success(2)));
        let mut session = ReportSession::default();

        let result = fetch_data(&surface, &api, &mut session, "divergencias", |_| {}).await;

        assert_eq!(result.as_deref(), Ok("divergencias_2024-01-01_2024-01-31.xlsx"));
        let sent = api.fetches.borrow()[0].clone();
        assert_eq!(sent.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(sent.end_date.as_deref(), Some("2024-01-31"));
    }

    #[tokio::test]
    async fn test_success_downloads_automatically() {
        let surface = FakeSurface::new(DateRange::default());
        let api = FakeApi::new(Ok(success(3)));
        let mut session = ReportSession::default();

        let result = fetch_data(&surface, &api, &mut session, "avarias", |_| {}).await;

        assert_eq!(result.as_deref(), Ok("avarias_2024-05-06T07-08-09.xlsx"));
        assert_eq!(session.len(), 3);
        assert_eq!(session.report_type(), "avarias");

        let downloads = api.downloads.borrow();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].data, rows(3));
        assert_eq!(downloads[0].filename, "avarias_2024-05-06T07-08-09.xlsx");

        assert_eq!(
            surface.events(),
            vec![
                Event::Overlay(true),
                Event::Overlay(false),
                Event::Toast(
                    "3 registros encontrados. Iniciando download...".into(),
                    ToastKind::Success
                ),
                Event::Paused(AUTO_DOWNLOAD_DELAY_MS),
                Event::Saved("avarias_2024-05-06T07-08-09.xlsx".into(), 4),
                Event::Toast("Arquivo baixado com sucesso!".into(), ToastKind::Success),
            ]
        );
    }

    #[tokio::test]
    async fn test_new_rows_are_latest_before_auto_download() {
        let surface = FakeSurface::new(DateRange::default());
        let mut previous = ReportSession::default();
        previous.replace("avarias", rows(2));
        surface.book.borrow_mut().commit("avarias", previous);

        let api = FakeApi::new(Ok(success(3)));
        let mut session = surface.book.borrow().checkout("qualidade");

        let result = fetch_data(&surface, &api, &mut session, "qualidade", |stored| {
            surface.book.borrow_mut().commit("qualidade", stored.clone());
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(surface.latest_at_pause.borrow().as_deref(), Some("qualidade"));
        assert_eq!(surface.book.borrow().latest().map(ReportSession::len), Some(3));
    }

    #[tokio::test]
    async fn test_failed_fetch_stores_nothing() {
        let surface = FakeSurface::new(DateRange::default());
        let api = FakeApi::new(Ok(failure("Tipo de relatório inválido")));
        let mut session = ReportSession::default();
        let stored = RefCell::new(0);

        let _ = fetch_data(&surface, &api, &mut session, "qualidade", |_| {
            *stored.borrow_mut() += 1;
        })
        .await;

        assert_eq!(*stored.borrow(), 0);
    }

    #[tokio::test]
    async fn test_config_failure_highlights_alert() {
        let surface = FakeSurface::new(DateRange::default());
        let api = FakeApi::new(Ok(failure("JIRA_TOKEN ausente")));
        let mut session = ReportSession::default();

        let result = fetch_data(&surface, &api, &mut session, "qualidade", |_| {}).await;

        assert_eq!(result, Err(ReportError::Server("JIRA_TOKEN ausente".into())));
        assert_eq!(
            surface.toasts(),
            vec![("JIRA_TOKEN ausente".to_string(), ToastKind::Error)]
        );
        assert_eq!(surface.count(&Event::Highlight), 1);
        assert!(session.is_empty());
        assert!(api.downloads.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_other_failure_only_toasts() {
        let surface = FakeSurface::new(DateRange::default());
        let api = FakeApi::new(Ok(failure("Tipo de relatório inválido")));
        let mut session = ReportSession::default();

        let _ = fetch_data(&surface, &api, &mut session, "issues", |_| {}).await;

        assert_eq!(
            surface.toasts(),
            vec![("Tipo de relatório inválido".to_string(), ToastKind::Error)]
        );
        assert_eq!(surface.count(&Event::Highlight), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_hides_overlay_once() {
        let surface = FakeSurface::new(DateRange::default());
        let api = FakeApi::new(Err(ReportError::Transport("Failed to fetch".into())));
        let mut session = ReportSession::default();
        session.replace("avarias", rows(2));

        let result = fetch_data(&surface, &api, &mut session, "qualidade", |_| {}).await;

        assert!(matches!(result, Err(ReportError::Transport(_))));
        assert_eq!(surface.count(&Event::Overlay(true)), 1);
        assert_eq!(surface.count(&Event::Overlay(false)), 1);
        assert_eq!(
            surface.toasts(),
            vec![("Erro de conexão: Failed to fetch".to_string(), ToastKind::Error)]
        );
        // previous result set survives a failed fetch
        assert_eq!(session.report_type(), "avarias");
        assert_eq!(session.len(), 2);
    }

    #[tokio::test]
    async fn test_download_without_rows_warns() {
        let surface = FakeSurface::new(DateRange::default());
        let api = FakeApi::new(Ok(success(1)));
        let session = ReportSession::default();

        let result = download_excel(&surface, &api, &session).await;

        assert_eq!(result, Err(ReportError::NoData));
        assert_eq!(api.calls(), 0);
        assert_eq!(
            surface.toasts(),
            vec![("Nenhum dado para exportar.".to_string(), ToastKind::Warning)]
        );
    }

    #[tokio::test]
    async fn test_download_server_error_shows_message() {
        let surface = FakeSurface::new(DateRange::default());
        let mut api = FakeApi::new(Ok(success(1)));
        api.download_reply = Err(ReportError::Server("Erro ao gerar Excel: disk full".into()));
        let mut session = ReportSession::default();
        session.replace("devolucoes", rows(1));

        let result = download_excel(&surface, &api, &session).await;

        assert!(matches!(result, Err(ReportError::Server(_))));
        assert_eq!(
            surface.toasts(),
            vec![("Erro ao gerar Excel: disk full".to_string(), ToastKind::Error)]
        );
        assert!(!surface
            .events()
            .iter()
            .any(|e| matches!(e, Event::Saved(..))));
    }

    #[tokio::test]
    async fn test_download_transport_error() {
        let surface = FakeSurface::new(DateRange::default());
        let mut api = FakeApi::new(Ok(success(1)));
        api.download_reply = Err(ReportError::Transport("NetworkError".into()));
        let mut session = ReportSession::default();
        session.replace("avarias", rows(1));

        let _ = download_excel(&surface, &api, &session).await;

        assert_eq!(
            surface.toasts(),
            vec![("Erro ao baixar arquivo: NetworkError".to_string(), ToastKind::Error)]
        );
    }
}
