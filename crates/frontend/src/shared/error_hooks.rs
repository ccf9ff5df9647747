//! Last-resort reporting for errors nothing else caught.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

use super::toast::{ToastContext, ToastKind};

pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Ocorreu um erro inesperado. Verifique o console para mais detalhes.";
pub const UNHANDLED_REJECTION_MESSAGE: &str =
    "Erro de conexão. Verifique sua internet e tente novamente.";

/// Logs uncaught script errors and unhandled promise rejections and tells
/// the user through the toast. No recovery is attempted.
pub fn install_global_error_handlers(toast: ToastContext) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(move |event: web_sys::Event| {
        match event.dyn_ref::<ErrorEvent>() {
            Some(error_event) => log::error!(
                "Uncaught error: {} ({:?})",
                error_event.message(),
                error_event.error()
            ),
            None => log::error!("Uncaught error: {:?}", event),
        }
        toast.show(UNEXPECTED_ERROR_MESSAGE, ToastKind::Error);
    }) as Box<dyn FnMut(_)>);

    let on_rejection = Closure::wrap(Box::new(move |event: web_sys::Event| {
        match event.dyn_ref::<PromiseRejectionEvent>() {
            Some(rejection) => log::error!("Unhandled promise rejection: {:?}", rejection.reason()),
            None => log::error!("Unhandled promise rejection: {:?}", event),
        }
        toast.show(UNHANDLED_REJECTION_MESSAGE, ToastKind::Error);
    }) as Box<dyn FnMut(_)>);

    if let Err(e) = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref()) {
        log::warn!("Failed to install error listener: {:?}", e);
    }
    if let Err(e) = window
        .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())
    {
        log::warn!("Failed to install unhandledrejection listener: {:?}", e);
    }
    on_error.forget();
    on_rejection.forget();
}
