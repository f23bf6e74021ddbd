//! Application state and core logic

use crate::config::InductionConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{
    AppState, Controller, FormInput, FormStatus, LoaderState, RegistrationForm, SubmitOutcome,
    ViewState,
};
use crate::timer::{Scheduler, TimerEvent, TokioScheduler};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// Main application struct
pub struct App {
    /// View-state controller and form store
    pub controller: Controller,
    /// Presentation state
    pub state: AppState,
    /// User configuration
    pub config: InductionConfig,
    /// Loading screen animation state
    pub loader_state: Option<LoaderState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timer fires waiting to be applied
    timer_rx: UnboundedReceiver<TimerEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance driven by tokio timers
    pub fn new(config: InductionConfig) -> Self {
        let (tx, rx) = unbounded_channel();
        Self::with_scheduler(config, Box::new(TokioScheduler::new(tx)), rx)
    }

    /// Create an App with an explicit timer source
    pub fn with_scheduler(
        config: InductionConfig,
        scheduler: Box<dyn Scheduler>,
        timer_rx: UnboundedReceiver<TimerEvent>,
    ) -> Self {
        Self {
            controller: Controller::new(scheduler),
            state: AppState::default(),
            config,
            loader_state: None,
            terminal_size: None,
            timer_rx,
            quit: false,
        }
    }

    /// Apply pending timer fires to the controller
    pub fn poll_timers(&mut self) {
        while let Ok(event) = self.timer_rx.try_recv() {
            self.controller.handle_timer(event);
        }
        self.sync_view();
    }

    /// Update animation state for the current frame
    pub fn update_animations(&mut self) {
        if let Some(ref mut loader) = self.loader_state {
            loader.update();
        }
    }

    /// Follow the controller's view, resetting per-view presentation state
    fn sync_view(&mut self) {
        let view = self.controller.view();
        if !self.state.enter_view(view) {
            return;
        }
        tracing::debug!("View changed to {}", view.label());

        self.loader_state = match view {
            ViewState::Loading => Some(LoaderState::new()),
            _ => None,
        };
        if view == ViewState::Form(FormStatus::Editing) {
            self.state.form = RegistrationForm::default();
        }
        self.state.status_message = None;
    }

    /// Whether the current view needs a fast redraw rate
    pub fn is_animating(&self) -> bool {
        self.controller.view().is_animated()
    }

    /// Time since the current view appeared
    pub fn view_elapsed(&self) -> Duration {
        self.state.view_entered_at.elapsed()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.controller.view() {
            ViewState::Landing => self.handle_landing_key(key),
            // The transition cannot be skipped
            ViewState::Loading => {}
            ViewState::Form(FormStatus::Editing) => self.handle_form_key(key),
            // Processing cannot be aborted
            ViewState::Form(FormStatus::Processing) => {}
            ViewState::Form(FormStatus::Success) => self.handle_success_key(key),
        }
        self.sync_view();
        Ok(())
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => self.controller.start(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // Blocking notice (modal)
        if self.controller.notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.dismiss_notice();
            }
            return;
        }

        match self.state.form.handle_key(key, self.controller.data()) {
            FormInput::Change(change) => {
                self.controller.apply_change(change);
            }
            FormInput::Submit => self.submit(),
            FormInput::None => {}
        }
    }

    fn submit(&mut self) {
        match self.controller.submit() {
            SubmitOutcome::FieldErrors => {
                // Bring the first offending field into focus
                if let Some(field) = self.controller.errors().keys().next() {
                    self.state.form.focus(field.spec());
                }
            }
            SubmitOutcome::Accepted | SubmitOutcome::Rejected | SubmitOutcome::Ignored => {}
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c')
                if key.modifiers == COPY_MODIFIER || key.modifiers == KeyModifiers::NONE =>
            {
                self.copy_invite_link();
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn copy_invite_link(&mut self) {
        let url = self.config.invite_url().to_string();
        self.state.status_message = Some(match self.copy_to_clipboard(&url) {
            Ok(()) => "Invite link copied".to_string(),
            Err(err) => {
                tracing::warn!("Failed to copy invite link: {err}");
                format!("Copy failed: {url}")
            }
        });
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Leave the app, cancelling any running timers
    pub fn shutdown(&mut self) {
        self.controller.teardown();
    }
}
