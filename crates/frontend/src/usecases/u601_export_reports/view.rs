use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_export_reports::ExportReports;
use leptos::prelude::*;

use super::card::ReportCard;
use super::catalog::REPORT_CARDS;
use super::state::ReportsState;
use super::surface::BrowserSurface;
use crate::shared::date_utils::{default_report_range, today_utc};
use crate::shared::keyboard::{install_keyboard_shortcuts, ShortcutAction};
use crate::shared::loading::use_loading;
use crate::shared::theme::ThemeToggle;
use crate::shared::toast::use_toast;

#[component]
pub fn ExportReportsPage() -> impl IntoView {
    let surface = BrowserSurface {
        toast: use_toast(),
        loading: use_loading(),
        range: RwSignal::new(default_report_range(today_utc())),
    };
    let state = ReportsState::new(surface);
    provide_context(state);

    // The page is mounted once, so the document listener is installed once.
    install_keyboard_shortcuts(move |action| match action {
        ShortcutAction::Fetch(report_type) => state.trigger(&report_type),
        ShortcutAction::Download => state.download_latest(),
    });
    log::debug!("{} mounted", ExportReports::full_name());

    view! {
        <div class="container">
            <header class="header">
                <div class="header__title">
                    <h1>
                        <i class="fas fa-file-excel"></i>
                        " "
                        {ExportReports::display_name()}
                    </h1>
                    <p>{ExportReports::description()}</p>
                </div>
                <ThemeToggle />
            </header>

            <div class="alert alert-info">
                <i class="fas fa-info-circle"></i>
                " Configure JIRA_EMAIL e JIRA_TOKEN no arquivo .env do servidor antes de buscar os relatórios."
            </div>

            <div class="reports-grid">
                {REPORT_CARDS
                    .iter()
                    .map(|binding| view! { <ReportCard binding=*binding /> })
                    .collect_view()}
            </div>

            <footer class="shortcuts">
                <span><kbd>"Ctrl"</kbd>" + "<kbd>"Enter"</kbd>" buscar relatório selecionado"</span>
                <span><kbd>"Ctrl"</kbd>" + "<kbd>"D"</kbd>" baixar últimos dados"</span>
            </footer>
        </div>
    }
}
