use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::ButtonState;

/// Label of the enabled button.
pub const IDLE_LABEL: &str = "START";
/// Label shown next to the busy indicator.
pub const BUSY_LABEL: &str = "Wird gestartet...";

/// Shared handle to the submit control state.
///
/// Clones observe the same state, so the render path can read what the
/// submission path writes.
#[derive(Debug, Clone, Default)]
pub struct SubmitButton {
    state: Arc<Mutex<ButtonState>>,
}

impl SubmitButton {
    /// Creates an idle button.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the control and shows the busy label.
    pub fn set_loading(&self) {
        *self.state.lock() = ButtonState::Busy;
    }

    /// Enables the control and restores the idle label.
    pub fn reset(&self) {
        *self.state.lock() = ButtonState::Idle;
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ButtonState {
        *self.state.lock()
    }

    /// Returns whether submits are accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state() == ButtonState::Idle
    }

    /// Returns the label for the current state.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.state() {
            ButtonState::Idle => IDLE_LABEL,
            ButtonState::Busy => BUSY_LABEL,
        }
    }

    /// Enters the busy state, `None` if already busy.
    #[must_use]
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        let mut state = self.state.lock();
        if *state == ButtonState::Busy {
            return None;
        }
        *state = ButtonState::Busy;
        drop(state);

        Some(BusyGuard {
            button: self.clone(),
        })
    }
}

/// Keeps the button busy until dropped.
#[derive(Debug)]
#[must_use = "the button returns to idle as soon as the guard is dropped"]
pub struct BusyGuard {
    button: SubmitButton,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.button.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let button = SubmitButton::new();
        assert!(button.is_enabled());
        assert_eq!(button.label(), "START");

        button.set_loading();
        assert!(!button.is_enabled());
        assert_eq!(button.label(), "Wird gestartet...");

        button.reset();
        assert_eq!(button.state(), ButtonState::Idle);
    }

    #[test]
    fn test_guard_resets_on_drop() {
        let button = SubmitButton::new();
        let view = button.clone();

        let guard = button.try_acquire().unwrap();
        assert_eq!(view.state(), ButtonState::Busy);
        assert!(button.try_acquire().is_none());

        drop(guard);
        assert_eq!(view.state(), ButtonState::Idle);
        assert!(button.try_acquire().is_some());
    }

    #[test]
    fn test_guard_resets_on_panic() {
        let button = SubmitButton::new();
        let inner = button.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = inner.try_acquire().unwrap();
            panic!("request handler failed");
        }));

        assert!(result.is_err());
        assert!(button.is_enabled());
    }
}
