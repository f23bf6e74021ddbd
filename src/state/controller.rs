//! View-state controller
//!
//! Owns the registration record, its field errors, the blocking notice and
//! every timer that drives the flow:
//!
//! ```text
//! landing --start()--> loading --3.5s--> form/editing
//! form/editing --submit(valid)--> form/processing --2.5s--> form/success
//! form/editing --submit(invalid)--> form/editing
//! ```

use super::app_state::{FormStatus, ViewState};
use super::forms::{ChangeEvent, FormData};
use super::sequencer::Sequencer;
use super::validation::{validate, ErrorMap, ValidationError};
use crate::timer::{Scheduler, TimerEvent, TimerHandle};
use std::time::Duration;

/// How long the loading transition lasts
pub const LOADING_DURATION: Duration = Duration::from_millis(3500);

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and processing has started
    Accepted,
    /// Field-level errors were recorded
    FieldErrors,
    /// A required field is missing; a blocking notice is shown
    Rejected,
    /// Submit is not available in the current state
    Ignored,
}

pub struct Controller {
    view: ViewState,
    data: FormData,
    errors: ErrorMap,
    notice: Option<String>,
    scheduler: Box<dyn Scheduler>,
    loading_timer: Option<TimerHandle>,
    sequencer: Option<Sequencer>,
}

impl Controller {
    pub fn new(scheduler: Box<dyn Scheduler>) -> Self {
        Self {
            view: ViewState::Landing,
            data: FormData::default(),
            errors: ErrorMap::new(),
            notice: None,
            scheduler,
            loading_timer: None,
            sequencer: None,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Blocking notice from the last rejected submit, if not yet dismissed
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Current processing status line
    pub fn loading_message(&self) -> Option<&'static str> {
        self.sequencer.as_ref().map(Sequencer::message)
    }

    /// Processing progress in `[0, 1]`
    pub fn progress(&self) -> f64 {
        match self.view {
            ViewState::Form(FormStatus::Success) => 1.0,
            _ => self.sequencer.as_ref().map_or(0.0, Sequencer::progress),
        }
    }

    /// Leave the landing screen and begin the loading transition
    pub fn start(&mut self) {
        if self.view != ViewState::Landing {
            return;
        }
        self.view = ViewState::Loading;
        self.loading_timer = Some(
            self.scheduler
                .once(LOADING_DURATION, TimerEvent::LoadingElapsed),
        );
        tracing::info!("Registration started, loading form");
    }

    /// The loading interval has elapsed
    pub fn loading_elapsed(&mut self) {
        if self.view != ViewState::Loading {
            return;
        }
        self.loading_timer = None;
        self.view = ViewState::Form(FormStatus::Editing);
        tracing::info!("Form ready for editing");
    }

    /// Apply a field edit. Clears that field's error.
    /// Returns false when the form is not editable.
    pub fn apply_change(&mut self, change: ChangeEvent) -> bool {
        if self.view != ViewState::Form(FormStatus::Editing) {
            tracing::debug!("Ignoring edit to {} outside editing", change.name);
            return false;
        }
        self.errors.remove(&change.name);
        self.data.apply(change);
        true
    }

    /// Validate and, if everything is in place, start processing
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.view != ViewState::Form(FormStatus::Editing) {
            return SubmitOutcome::Ignored;
        }

        match validate(&self.data) {
            Err(ValidationError::Fields(errors)) => {
                tracing::debug!("Submit rejected with {} field error(s)", errors.len());
                self.errors = errors;
                SubmitOutcome::FieldErrors
            }
            Err(err @ ValidationError::MissingRequired) => {
                tracing::debug!("Submit rejected: {err}");
                self.notice = Some(err.to_string());
                SubmitOutcome::Rejected
            }
            Ok(()) => {
                self.notice = None;
                self.view = ViewState::Form(FormStatus::Processing);
                self.sequencer = Some(Sequencer::run(self.scheduler.as_ref()));
                tracing::info!("Submission accepted, processing");
                SubmitOutcome::Accepted
            }
        }
    }

    /// Close the blocking notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Route a timer fire. Fires that arrive after their state was left are dropped.
    pub fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::LoadingElapsed => self.loading_elapsed(),
            TimerEvent::MessageTick => {
                if let Some(message) = self.sequencer.as_mut().and_then(Sequencer::advance) {
                    tracing::debug!("Processing: {message}");
                }
            }
            TimerEvent::ProcessingElapsed => self.processing_elapsed(),
        }
    }

    fn processing_elapsed(&mut self) {
        if self.view != ViewState::Form(FormStatus::Processing) {
            return;
        }
        self.sequencer = None;
        self.view = ViewState::Form(FormStatus::Success);
        tracing::info!("Registration successful");
    }

    /// Cancel every outstanding timer
    pub fn teardown(&mut self) {
        if let Some(mut timer) = self.loading_timer.take() {
            timer.cancel();
        }
        if let Some(mut sequencer) = self.sequencer.take() {
            sequencer.cancel();
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldName;
    use crate::state::sequencer::{MESSAGE_INTERVAL, PROCESSING_DURATION};
    use crate::state::validation::tests::{complete, filled_without_link};
    use crate::state::validation::{LINK_REQUIRED, MISSING_REQUIRED_NOTICE};
    use crate::timer::{MockScheduler, TokioScheduler};
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
    use tokio::time::sleep;

    /// Scheduler that hands out inert timers
    fn inert_scheduler() -> Box<MockScheduler> {
        let mut scheduler = MockScheduler::new();
        scheduler
            .expect_once()
            .returning(|_, _| TimerHandle::detached());
        scheduler
            .expect_every()
            .returning(|_, _| TimerHandle::detached());
        Box::new(scheduler)
    }

    fn editing_controller() -> Controller {
        let mut controller = Controller::new(inert_scheduler());
        controller.start();
        controller.handle_timer(TimerEvent::LoadingElapsed);
        controller
    }

    fn fill(controller: &mut Controller, data: &FormData) {
        for field in FieldName::ALL {
            controller.apply_change(ChangeEvent::new(field, data.get(field)));
        }
    }

    fn tokio_controller() -> (Controller, UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = unbounded_channel();
        (Controller::new(Box::new(TokioScheduler::new(tx))), rx)
    }

    fn drain(controller: &mut Controller, rx: &mut UnboundedReceiver<TimerEvent>) {
        while let Ok(event) = rx.try_recv() {
            controller.handle_timer(event);
        }
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state_is_landing() {
            let controller = Controller::new(inert_scheduler());
            assert_eq!(controller.view(), ViewState::Landing);
            assert!(controller.errors().is_empty());
            assert!(controller.notice().is_none());
            assert!(controller.loading_message().is_none());
        }

        #[test]
        fn test_start_schedules_loading_timer() {
            let mut scheduler = MockScheduler::new();
            scheduler
                .expect_once()
                .with(
                    mockall::predicate::eq(LOADING_DURATION),
                    mockall::predicate::eq(TimerEvent::LoadingElapsed),
                )
                .times(1)
                .returning(|_, _| TimerHandle::detached());
            let mut controller = Controller::new(Box::new(scheduler));

            controller.start();
            assert_eq!(controller.view(), ViewState::Loading);

            // A second start does not schedule again
            controller.start();
            assert_eq!(controller.view(), ViewState::Loading);
        }

        #[test]
        fn test_landing_only_leads_to_loading() {
            let mut controller = Controller::new(inert_scheduler());

            controller.handle_timer(TimerEvent::LoadingElapsed);
            controller.handle_timer(TimerEvent::ProcessingElapsed);
            assert_eq!(controller.submit(), SubmitOutcome::Ignored);
            assert_eq!(controller.view(), ViewState::Landing);

            controller.start();
            assert_eq!(controller.view(), ViewState::Loading);
        }

        #[test]
        fn test_loading_only_leads_to_editing() {
            let mut controller = Controller::new(inert_scheduler());
            controller.start();

            assert_eq!(controller.submit(), SubmitOutcome::Ignored);
            controller.handle_timer(TimerEvent::ProcessingElapsed);
            assert_eq!(controller.view(), ViewState::Loading);

            controller.handle_timer(TimerEvent::LoadingElapsed);
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Editing));
        }

        #[test]
        fn test_edits_ignored_before_form() {
            let mut controller = Controller::new(inert_scheduler());
            assert!(!controller.apply_change(ChangeEvent::new(FieldName::Name, "A")));
            assert_eq!(controller.data(), &FormData::default());
        }

        #[test]
        fn test_processing_requires_valid_submit() {
            let mut controller = editing_controller();
            controller.handle_timer(TimerEvent::ProcessingElapsed);
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Editing));

            fill(&mut controller, &complete());
            assert_eq!(controller.submit(), SubmitOutcome::Accepted);
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Processing));
            assert!(controller.errors().is_empty());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_link_sets_inline_error() {
            let mut controller = editing_controller();
            fill(&mut controller, &filled_without_link());

            assert_eq!(controller.submit(), SubmitOutcome::FieldErrors);

            let mut expected = ErrorMap::new();
            expected.insert(FieldName::Github, LINK_REQUIRED.to_string());
            assert_eq!(controller.errors(), &expected);
            assert!(controller.notice().is_none());
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Editing));
        }

        #[test]
        fn test_missing_required_field_shows_notice() {
            let mut controller = editing_controller();
            let data = FormData {
                name: String::new(),
                ..complete()
            };
            fill(&mut controller, &data);

            assert_eq!(controller.submit(), SubmitOutcome::Rejected);
            assert_eq!(controller.notice(), Some(MISSING_REQUIRED_NOTICE));
            assert!(controller.errors().is_empty());
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Editing));

            controller.dismiss_notice();
            assert!(controller.notice().is_none());
        }

        #[test]
        fn test_editing_link_clears_only_its_error() {
            let mut controller = editing_controller();
            controller.submit();
            assert!(controller.errors().contains_key(&FieldName::Github));

            controller.apply_change(ChangeEvent::new(FieldName::Name, "A"));
            assert!(controller.errors().contains_key(&FieldName::Github));

            controller.apply_change(ChangeEvent::new(FieldName::Github, "h"));
            assert!(controller.errors().is_empty());
        }

        #[test]
        fn test_form_is_frozen_while_processing() {
            let mut controller = editing_controller();
            fill(&mut controller, &complete());
            controller.submit();

            assert!(!controller.apply_change(ChangeEvent::new(FieldName::Name, "B")));
            assert_eq!(controller.data(), &complete());
            assert_eq!(controller.submit(), SubmitOutcome::Ignored);
        }

        #[test]
        fn test_accepted_submit_shows_first_message() {
            let mut controller = editing_controller();
            fill(&mut controller, &complete());
            controller.submit();
            assert_eq!(controller.loading_message(), Some("Analyzing Identity..."));
        }
    }

    mod timers {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_loading_completes_after_interval() {
            let (mut controller, mut rx) = tokio_controller();
            controller.start();

            sleep(Duration::from_millis(3400)).await;
            drain(&mut controller, &mut rx);
            assert_eq!(controller.view(), ViewState::Loading);

            sleep(Duration::from_millis(200)).await;
            drain(&mut controller, &mut rx);
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Editing));
        }

        #[tokio::test(start_paused = true)]
        async fn test_valid_submit_reaches_success_after_processing() {
            let (mut controller, mut rx) = tokio_controller();
            controller.start();
            sleep(LOADING_DURATION + Duration::from_millis(1)).await;
            drain(&mut controller, &mut rx);
            fill(&mut controller, &complete());

            assert_eq!(controller.submit(), SubmitOutcome::Accepted);
            assert!(controller.errors().is_empty());

            sleep(MESSAGE_INTERVAL + Duration::from_millis(10)).await;
            drain(&mut controller, &mut rx);
            assert_eq!(controller.loading_message(), Some("Verifying GitHub Link..."));

            sleep(MESSAGE_INTERVAL).await;
            drain(&mut controller, &mut rx);
            assert_eq!(
                controller.loading_message(),
                Some("Syncing with Enigma Database...")
            );
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Processing));

            // 1610ms elapsed; completion lands at 2500ms
            sleep(Duration::from_millis(900)).await;
            drain(&mut controller, &mut rx);
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Success));
            assert!(controller.loading_message().is_none());
            assert_eq!(controller.progress(), 1.0);
        }

        #[tokio::test(start_paused = true)]
        async fn test_success_does_not_wait_for_message_ticks() {
            let (tx, mut rx) = unbounded_channel();
            let mut controller = Controller::new(Box::new(TokioScheduler::new(tx)));
            controller.start();
            controller.handle_timer(TimerEvent::LoadingElapsed);
            fill(&mut controller, &complete());
            controller.submit();

            // Drop every message tick; completion is governed by its own timer
            sleep(PROCESSING_DURATION + Duration::from_millis(1)).await;
            while let Ok(event) = rx.try_recv() {
                if event != TimerEvent::MessageTick {
                    controller.handle_timer(event);
                }
            }
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Success));
        }

        #[tokio::test(start_paused = true)]
        async fn test_extra_ticks_do_not_delay_success() {
            let (tx, mut rx) = unbounded_channel();
            let mut controller = Controller::new(Box::new(TokioScheduler::new(tx)));
            controller.start();
            controller.handle_timer(TimerEvent::LoadingElapsed);
            fill(&mut controller, &complete());
            controller.submit();

            for _ in 0..10 {
                controller.handle_timer(TimerEvent::MessageTick);
            }
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Processing));

            sleep(PROCESSING_DURATION + Duration::from_millis(1)).await;
            drain(&mut controller, &mut rx);
            assert_eq!(controller.view(), ViewState::Form(FormStatus::Success));
        }

        #[tokio::test(start_paused = true)]
        async fn test_teardown_cancels_loading_timer() {
            let (mut controller, mut rx) = tokio_controller();
            controller.start();
            controller.teardown();

            sleep(LOADING_DURATION * 2).await;
            assert!(rx.try_recv().is_err());
            assert_eq!(controller.view(), ViewState::Loading);
        }

        #[tokio::test(start_paused = true)]
        async fn test_teardown_cancels_processing_timers() {
            let (mut controller, mut rx) = tokio_controller();
            controller.start();
            controller.handle_timer(TimerEvent::LoadingElapsed);
            fill(&mut controller, &complete());
            controller.submit();
            controller.teardown();

            sleep(PROCESSING_DURATION * 2).await;
            assert!(rx.try_recv().is_err());
        }

        #[tokio::test(start_paused = true)]
        async fn test_dropping_controller_cancels_timers() {
            let (mut controller, mut rx) = tokio_controller();
            controller.start();
            drop(controller);

            sleep(LOADING_DURATION * 2).await;
            assert!(rx.try_recv().is_err());
        }
    }
}
