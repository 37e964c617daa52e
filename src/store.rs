//! In-memory UI session state.
//!
//! [`UiStore`] is created once per session and handed to whatever needs to
//! mutate it. Every operation is synchronous and unconditional.

use crate::domain::types::LeadId;

/// Severity of the active toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Success,
    Error,
}

/// Maps a toast level to the alert class used by the view.
pub fn toast_level_to_str(level: &ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "success",
        ToastLevel::Error => "danger",
    }
}

/// Snapshot of the UI state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub is_modal_open: bool,
    pub selected_lead_id: Option<LeadId>,
    pub show_toast: bool,
    pub toast_message: String,
    pub toast_level: ToastLevel,
}

#[derive(Debug, Default)]
pub struct UiStore {
    state: UiState,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.is_modal_open
    }

    pub fn selected_lead_id(&self) -> Option<LeadId> {
        self.state.selected_lead_id
    }

    pub fn set_modal_open(&mut self, is_open: bool) {
        self.state.is_modal_open = is_open;
    }

    pub fn open_modal(&mut self) {
        self.set_modal_open(true);
    }

    /// Hides the modal. The selected lead is left untouched.
    pub fn close_modal(&mut self) {
        self.set_modal_open(false);
    }

    pub fn select_lead(&mut self, id: LeadId) {
        self.state.selected_lead_id = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_lead_id = None;
    }

    /// Shows `message`, replacing any toast still on screen.
    pub fn raise_toast(&mut self, message: impl Into<String>) {
        self.show_toast(ToastLevel::Success, message.into());
    }

    pub fn show_success_toast(&mut self, message: impl Into<String>) {
        self.show_toast(ToastLevel::Success, message.into());
    }

    pub fn show_error_toast(&mut self, message: impl Into<String>) {
        self.show_toast(ToastLevel::Error, message.into());
    }

    pub fn dismiss_toast(&mut self) {
        self.state.show_toast = false;
        self.state.toast_message.clear();
        self.state.toast_level = ToastLevel::default();
    }

    fn show_toast(&mut self, level: ToastLevel, message: String) {
        self.state.show_toast = true;
        self.state.toast_message = message;
        self.state.toast_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_without_toast() {
        let store = UiStore::new();

        assert_eq!(store.state(), &UiState::default());
        assert!(!store.is_modal_open());
        assert_eq!(store.selected_lead_id(), None);
    }

    #[test]
    fn closing_modal_keeps_selection() {
        let mut store = UiStore::new();
        let id = LeadId::new(5).unwrap();

        store.select_lead(id);
        store.open_modal();
        store.close_modal();

        assert!(!store.is_modal_open());
        assert_eq!(store.selected_lead_id(), Some(id));

        store.clear_selection();
        assert_eq!(store.selected_lead_id(), None);
    }

    #[test]
    fn second_toast_overwrites_the_first() {
        let mut store = UiStore::new();

        store.raise_toast("Lead saved");
        store.raise_toast("Failed to delete lead");

        assert!(store.state().show_toast);
        assert_eq!(store.state().toast_message, "Failed to delete lead");
    }

    #[test]
    fn dismiss_clears_toast() {
        let mut store = UiStore::new();

        store.show_error_toast("Failed to delete lead");
        assert_eq!(store.state().toast_level, ToastLevel::Error);

        store.dismiss_toast();

        assert!(!store.state().show_toast);
        assert!(store.state().toast_message.is_empty());
    }

    #[test]
    fn test_toast_level_to_str_mappings() {
        assert_eq!(toast_level_to_str(&ToastLevel::Success), "success");
        assert_eq!(toast_level_to_str(&ToastLevel::Error), "danger");
    }
}
