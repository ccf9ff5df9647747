//! Busy state of an action button.

/// Label shown while the button's action is running.
pub const BUSY_LABEL: &str = "Processando...";

/// Label and enabled flag of a button that can enter a loading state.
///
/// The label in effect before the first `set_loading(true)` is cached so that
/// leaving the loading state restores it exactly, even after repeated
/// toggles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
    original_label: Option<String>,
}

impl ButtonState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            original_label: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.original_label.is_some()
    }

    /// Enters the loading state unless the button is already disabled.
    ///
    /// Returns whether the caller may start the button's action.
    pub fn try_begin(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.set_loading(true);
        true
    }

    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            self.disabled = true;
            if self.original_label.is_none() {
                self.original_label = Some(std::mem::replace(&mut self.label, BUSY_LABEL.into()));
            }
        } else {
            self.disabled = false;
            if let Some(original) = self.original_label.take() {
                self.label = original;
            }
        }
    }
}
