use contracts::usecases::u601_export_reports::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::HttpReportApi;
use super::catalog::ReportBinding;
use super::state::use_reports_state;
use super::workflow::fetch_data;
use crate::shared::button_state::ButtonState;

/// Start/end inputs of the divergencias report.
#[component]
pub fn DateRangeFields(range: RwSignal<DateRange>) -> impl IntoView {
    view! {
        <div class="date-range">
            <label for="start_date">"Data inicial"</label>
            <input
                type="date"
                id="start_date"
                prop:value=move || range.with(|r| r.start_date.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    range.update(|r| r.start_date = value);
                }
            />
            <label for="end_date">"Data final"</label>
            <input
                type="date"
                id="end_date"
                prop:value=move || range.with(|r| r.end_date.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    range.update(|r| r.end_date = value);
                }
            />
        </div>
    }
}

/// One report: description, optional date range and the fetch button.
///
/// Each card keeps its own result set, so two cards fetched at the same
/// time export their own rows.
#[component]
pub fn ReportCard(binding: ReportBinding) -> impl IntoView {
    let state = use_reports_state();
    let kind = binding.kind;
    let button = RwSignal::new(ButtonState::new(binding.button_label));

    let run = Callback::new(move |_: ()| {
        let mut started = false;
        button.update(|b| started = b.try_begin());
        if !started {
            return;
        }

        spawn_local(async move {
            let mut session = state.checkout(kind.code());
            let _ = fetch_data(&state.surface, &HttpReportApi, &mut session, kind.code(), |stored| {
                state.commit(kind.code(), stored.clone())
            })
            .await;
            button.update(|b| b.set_loading(false));
        });
    });
    state.register(binding.control_id, run);

    let icon_class = move || {
        if button.with(|b| b.is_loading()) {
            "fas fa-spinner fa-spin"
        } else {
            "fas fa-download"
        }
    };

    view! {
        <div class="report-card" data-type=kind.code() tabindex="0">
            <div class="report-card__header">
                <i class=kind.icon()></i>
                <h3>{kind.display_name()}</h3>
            </div>
            <p class="report-card__description">{kind.description()}</p>
            {kind.requires_date_range().then(|| view! { <DateRangeFields range=state.surface.range /> })}
            <button
                id=binding.control_id
                class="btn btn-primary"
                disabled=move || button.with(|b| b.disabled)
                on:click=move |ev| {
                    ev.prevent_default();
                    run.run(());
                }
            >
                <i class=icon_class></i>
                " "
                {move || button.with(|b| b.label.clone())}
            </button>
        </div>
    }
}
