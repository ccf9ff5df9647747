use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::usecases::u601_export_reports::{DateRange, XLSX_MIME};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::workflow::ReportSurface;
use crate::shared::export::save_bytes;
use crate::shared::loading::LoadingContext;
use crate::shared::toast::{ToastContext, ToastKind};

/// Element pulsed when the backend reports missing credentials.
const CONFIG_ALERT_SELECTOR: &str = ".alert";
const PULSE_ANIMATION: &str = "pulse 1s ease-in-out 3";
const PULSE_KEYFRAMES: &str = "@keyframes pulse {
    0% { transform: scale(1); }
    50% { transform: scale(1.02); }
    100% { transform: scale(1); }
}";

/// The live page as seen by the workflow.
#[derive(Clone, Copy)]
pub struct BrowserSurface {
    pub toast: ToastContext,
    pub loading: LoadingContext,
    pub range: RwSignal<DateRange>,
}

#[async_trait(?Send)]
impl ReportSurface for BrowserSurface {
    fn show_overlay(&self) {
        self.loading.show();
    }

    fn hide_overlay(&self) {
        self.loading.hide();
    }

    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.toast.show(message, kind);
    }

    fn date_range(&self) -> DateRange {
        self.range.get_untracked()
    }

    fn highlight_config_alert(&self) {
        let alert = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(CONFIG_ALERT_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(alert) = alert {
            let _ = alert.style().set_property("animation", PULSE_ANIMATION);
        }
    }

    fn save_file(&self, bytes: &[u8], filename: &str) -> Result<(), String> {
        save_bytes(bytes, filename, XLSX_MIME)
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn pause(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Adds the `pulse` keyframes used by the config alert highlight.
pub fn install_pulse_animation() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(PULSE_KEYFRAMES));
    let _ = head.append_child(&style);
}
