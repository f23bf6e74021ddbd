//! Application state definitions

use super::forms::RegistrationForm;
use std::time::Instant;

/// Status of the form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Processing,
    Success,
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Logo and register button
    #[default]
    Landing,
    /// Animated transition into the form
    Loading,
    /// The registration form and its status
    Form(FormStatus),
}

impl ViewState {
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Landing => "landing",
            ViewState::Loading => "loading",
            ViewState::Form(FormStatus::Editing) => "form/editing",
            ViewState::Form(FormStatus::Processing) => "form/processing",
            ViewState::Form(FormStatus::Success) => "form/success",
        }
    }

    /// Whether the screen animates and needs a fast redraw rate
    pub fn is_animated(&self) -> bool {
        !matches!(self, ViewState::Form(FormStatus::Editing))
    }
}

/// Presentation state owned by the shell, outside the controller
#[derive(Debug)]
pub struct AppState {
    /// Last view the shell rendered
    pub current_view: ViewState,
    /// When the current view was entered, for entrance animations
    pub view_entered_at: Instant,
    /// Focus and dropdown state of the form widgets
    pub form: RegistrationForm,
    /// Transient message in the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: ViewState::default(),
            view_entered_at: Instant::now(),
            form: RegistrationForm::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Record a view change. Returns true if the view differs from the last one.
    pub fn enter_view(&mut self, view: ViewState) -> bool {
        if view == self.current_view {
            return false;
        }
        self.current_view = view;
        self.view_entered_at = Instant::now();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_landing() {
        assert_eq!(ViewState::default(), ViewState::Landing);
        assert_eq!(AppState::default().current_view, ViewState::Landing);
    }

    #[test]
    fn test_labels_are_distinct() {
        let views = [
            ViewState::Landing,
            ViewState::Loading,
            ViewState::Form(FormStatus::Editing),
            ViewState::Form(FormStatus::Processing),
            ViewState::Form(FormStatus::Success),
        ];
        for (i, a) in views.iter().enumerate() {
            for b in &views[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_only_editing_is_static() {
        assert!(!ViewState::Form(FormStatus::Editing).is_animated());
        assert!(ViewState::Landing.is_animated());
        assert!(ViewState::Loading.is_animated());
        assert!(ViewState::Form(FormStatus::Processing).is_animated());
        assert!(ViewState::Form(FormStatus::Success).is_animated());
    }

    #[test]
    fn test_enter_view_detects_change() {
        let mut state = AppState::default();
        assert!(!state.enter_view(ViewState::Landing));
        assert!(state.enter_view(ViewState::Loading));
        assert_eq!(state.current_view, ViewState::Loading);
        assert!(!state.enter_view(ViewState::Loading));
    }
}
