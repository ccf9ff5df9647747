use crate::shared::error_hooks::install_global_error_handlers;
use crate::shared::loading::{LoadingContext, LoadingOverlay};
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastContext, ToastHost};
use crate::usecases::u601_export_reports::surface::install_pulse_animation;
use crate::usecases::u601_export_reports::ExportReportsPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let toast = ToastContext::new();
    provide_context(toast);
    provide_context(LoadingContext::new());

    install_global_error_handlers(toast);
    install_pulse_animation();

    view! {
        <ThemeProvider>
            <ExportReportsPage />
            <LoadingOverlay />
            <ToastHost />
        </ThemeProvider>
    }
}
