//! UI module for rendering the TUI

mod components;
mod decor;
mod forms;
mod landing;
mod layout;
mod loading;
mod status;

use crate::app::App;
use crate::state::{FormStatus, ViewState};
use components::render_notice_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (navbar_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_navbar(frame, navbar_area, app);

    match app.controller.view() {
        ViewState::Landing => landing::draw(frame, main_area, app),
        ViewState::Loading => loading::draw(frame, main_area, app),
        ViewState::Form(FormStatus::Editing) => forms::draw_registration(frame, main_area, app),
        ViewState::Form(FormStatus::Processing) => status::draw_processing(frame, main_area, app),
        ViewState::Form(FormStatus::Success) => status::draw_success(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Blocking notice over everything else
    if let Some(notice) = app.controller.notice() {
        render_notice_dialog(frame, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InductionConfig;
    use crate::state::{ChangeEvent, FieldName};
    use crate::timer::{MockScheduler, TimerEvent, TimerHandle};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

    fn test_app() -> (App, UnboundedSender<TimerEvent>) {
        let mut scheduler = MockScheduler::new();
        scheduler
            .expect_once()
            .returning(|_, _| TimerHandle::detached());
        scheduler
            .expect_every()
            .returning(|_, _| TimerHandle::detached());
        let (tx, rx) = unbounded_channel();
        let app = App::with_scheduler(InductionConfig::default(), Box::new(scheduler), rx);
        (app, tx)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn open_form(app: &mut App, tx: &UnboundedSender<TimerEvent>) {
        app.controller.start();
        tx.send(TimerEvent::LoadingElapsed).unwrap();
        app.poll_timers();
    }

    #[test]
    fn test_landing_offers_registration() {
        let (app, _tx) = test_app();
        let out = screen(&app);
        assert!(out.contains("REGISTER HERE"));
        assert!(out.contains("ENIGMA"));
    }

    #[test]
    fn test_loading_screen_draws() {
        let (mut app, _tx) = test_app();
        app.controller.start();
        app.poll_timers();
        app.update_animations();
        assert!(screen(&app).contains("INITIALIZING HANDSHAKE..."));
    }

    #[test]
    fn test_form_shows_first_section() {
        let (mut app, tx) = test_app();
        open_form(&mut app, &tx);
        let out = screen(&app);
        assert!(out.contains("CORE INFO"));
        assert!(out.contains("Full Name"));
    }

    #[test]
    fn test_notice_overlays_form() {
        let (mut app, tx) = test_app();
        open_form(&mut app, &tx);
        app.controller
            .apply_change(ChangeEvent::new(FieldName::Github, "https://github.com/x"));
        app.controller.submit();
        assert!(screen(&app).contains("Please fill all required fields."));
    }

    #[test]
    fn test_success_shows_invite_link() {
        let (mut app, tx) = test_app();
        open_form(&mut app, &tx);
        for field in FieldName::REQUIRED {
            app.controller.apply_change(ChangeEvent::new(field, "x"));
        }
        app.controller
            .apply_change(ChangeEvent::new(FieldName::Github, "https://github.com/x"));
        app.controller.submit();
        app.poll_timers();
        assert!(screen(&app).contains(crate::state::sequencer::STATUS_MESSAGES[0]));

        tx.send(TimerEvent::ProcessingElapsed).unwrap();
        app.poll_timers();
        let out = screen(&app);
        assert!(out.contains("REGISTRATION SUCCESSFUL"));
        assert!(out.contains(crate::config::DEFAULT_INVITE_URL));
    }
}
