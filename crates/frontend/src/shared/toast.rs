//! Transient notification shown in the bottom corner.
//!
//! There is a single toast slot: a new message replaces the visible one and
//! restarts its 4 second lifetime.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
        }
    }
}

/// Content of the toast slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSlot {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    generation: u64,
}

impl ToastSlot {
    /// Replace the content and return the ticket for its dismiss timer.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide the toast if `ticket` still belongs to the visible message.
    pub fn dismiss(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn class(&self) -> String {
        if self.visible {
            format!("toast {} show", self.kind.as_class())
        } else {
            format!("toast {}", self.kind.as_class())
        }
    }
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    pub slot: RwSignal<ToastSlot>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::default()),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let mut ticket = 0;
        self.slot.update(|slot| ticket = slot.show(message, kind));

        let slot = self.slot;
        Timeout::new(TOAST_DURATION_MS, move || {
            slot.update(|s| {
                s.dismiss(ticket);
            });
        })
        .forget();
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext not provided in context (provide it in app root)")
}

/// Renders the toast slot. Mount once at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    let icon = move || match toast.slot.with(|s| s.kind) {
        ToastKind::Success => "fas fa-check-circle",
        ToastKind::Error => "fas fa-exclamation-circle",
        ToastKind::Warning => "fas fa-exclamation-triangle",
    };

    view! {
        <div id="toast" class=move || toast.slot.with(|s| s.class())>
            <i class=icon></i>
            <span class="toast-message">{move || toast.slot.with(|s| s.message.clone())}</span>
        </div>
    }
}
