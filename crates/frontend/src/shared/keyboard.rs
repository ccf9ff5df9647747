//! Global keyboard shortcuts.
//!
//! - Ctrl/Cmd + Enter: run the report card that holds the focus
//! - Ctrl/Cmd + D: download the last fetched report (browser bookmark
//!   shortcut is always suppressed)

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Container class of a report card; carries `data-type`.
pub const REPORT_CARD_SELECTOR: &str = ".report-card";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    FetchFocused,
    Download,
}

impl Shortcut {
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        if !(ctrl || meta) {
            return None;
        }
        match key {
            "Enter" => Some(Shortcut::FetchFocused),
            "d" => Some(Shortcut::Download),
            _ => None,
        }
    }
}

/// What a shortcut asks the page to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Fetch the report whose card contains the focused element
    Fetch(String),
    Download,
}

/// `data-type` of the report card containing the focused element
fn focused_report_type() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let active = document.active_element()?;
    let card = active.closest(REPORT_CARD_SELECTOR).ok()??;
    card.get_attribute("data-type")
}

/// Installs the keydown listener on the document for the app lifetime.
pub fn install_keyboard_shortcuts(on_action: impl Fn(ShortcutAction) + 'static) {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let shortcut = Shortcut::from_key(
            &keyboard_event.key(),
            keyboard_event.ctrl_key(),
            keyboard_event.meta_key(),
        );
        match shortcut {
            Some(Shortcut::FetchFocused) => {
                if let Some(report_type) = focused_report_type() {
                    on_action(ShortcutAction::Fetch(report_type));
                }
            }
            Some(Shortcut::Download) => {
                keyboard_event.prevent_default();
                on_action(ShortcutAction::Download);
            }
            None => {}
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Err(e) =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to install keyboard shortcuts: {:?}", e);
        }
        // Installed once at startup; keep closure alive.
        closure.forget();
    }
}
