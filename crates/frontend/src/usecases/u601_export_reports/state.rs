use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

use super::api::HttpReportApi;
use super::catalog::binding_for;
use super::session::{ReportSession, SessionBook};
use super::surface::BrowserSurface;
use super::workflow::download_excel;

/// Page-wide state of the report cards: their sessions and run actions.
#[derive(Clone, Copy)]
pub struct ReportsState {
    pub surface: BrowserSurface,
    book: StoredValue<SessionBook>,
    actions: StoredValue<HashMap<String, Callback<()>>>,
}

impl ReportsState {
    pub fn new(surface: BrowserSurface) -> Self {
        Self {
            surface,
            book: StoredValue::new(SessionBook::default()),
            actions: StoredValue::new(HashMap::new()),
        }
    }

    /// Registers the action behind the button `control_id`.
    pub fn register(&self, control_id: &str, action: Callback<()>) {
        self.actions.update_value(|actions| {
            actions.insert(control_id.to_string(), action);
        });
    }

    /// Runs the card whose container carries `data-type`; the card's own
    /// button state decides whether it actually starts.
    pub fn trigger(&self, report_type: &str) {
        let Some(binding) = binding_for(report_type) else {
            log::debug!("no report card for data-type {:?}", report_type);
            return;
        };
        if let Some(action) = self
            .actions
            .with_value(|actions| actions.get(binding.control_id).copied())
        {
            action.run(());
        }
    }

    pub fn checkout(&self, card: &str) -> ReportSession {
        self.book.with_value(|book| book.checkout(card))
    }

    pub fn commit(&self, card: &str, session: ReportSession) {
        self.book.update_value(|book| book.commit(card, session));
    }

    /// Downloads the most recently fetched result set, if there is one.
    pub fn download_latest(&self) {
        let Some(session) = self.book.with_value(|book| book.latest().cloned()) else {
            return;
        };
        let surface = self.surface;
        spawn_local(async move {
            let _ = download_excel(&surface, &HttpReportApi, &session).await;
        });
    }
}

pub fn use_reports_state() -> ReportsState {
    use_context::<ReportsState>().expect("ReportsState not provided (mount ExportReportsPage)")
}
