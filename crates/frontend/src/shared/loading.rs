use leptos::prelude::*;

/// Visibility of the blocking loading overlay.
///
/// No counting: `show`/`hide` are idempotent and the last call wins.
#[derive(Clone, Copy)]
pub struct LoadingContext {
    pub visible: RwSignal<bool>,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.visible.set(true);
    }

    pub fn hide(&self) {
        self.visible.set(false);
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_loading() -> LoadingContext {
    use_context::<LoadingContext>()
        .expect("LoadingContext not provided in context (provide it in app root)")
}

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let loading = use_loading();

    view! {
        <div
            id="loadingOverlay"
            class=move || if loading.visible.get() { "loading-overlay show" } else { "loading-overlay" }
        >
            <div class="loading-spinner">
                <i class="fas fa-spinner fa-spin"></i>
                <p>"Buscando dados do Jira..."</p>
            </div>
        </div>
    }
}
