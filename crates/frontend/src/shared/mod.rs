pub mod api_utils;
pub mod button_state;
pub mod date_utils;
pub mod error_hooks;
pub mod export;
pub mod keyboard;
pub mod loading;
pub mod theme;
pub mod toast;
