//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::application::services::{Notifier, NotifierEvent, SubmitButton};
use crate::application::use_cases::{Preparation, SettledSubmission, SubmissionController};
use crate::domain::ports::{FormSurface, ReminderPort};
use crate::domain::{ButtonState, FormField, NotifierTimings, ValidationRules};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::form_screen::{FormAction, FormScreen};
use crate::presentation::ui::notification_popup::NotificationPopup;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(120);

#[derive(Debug)]
enum Action {
    SubmissionSettled(SettledSubmission),
}

/// Terminal application: the form, its controller and the event loop.
pub struct App {
    screen: FormScreen,
    controller: SubmissionController,
    notifier_rx: mpsc::UnboundedReceiver<NotifierEvent>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    attached: bool,
    exiting: bool,
}

impl App {
    /// Creates app around a scheduler port.
    #[must_use]
    pub fn new(
        reminders: Arc<dyn ReminderPort>,
        timings: NotifierTimings,
        rules: ValidationRules,
    ) -> Self {
        let (notifier, notifier_rx) = Notifier::new(timings);
        let controller = SubmissionController::new(notifier, SubmitButton::new(), reminders, rules);
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: FormScreen::new(),
            controller,
            notifier_rx,
            action_tx,
            action_rx,
            attached: false,
            exiting: false,
        }
    }

    /// Checks the form and binds input handling. Returns `false` when the
    /// form is incomplete, in which case the app stays inert.
    pub fn attach(&mut self) -> bool {
        self.attached = attach_surface(&mut self.screen);
        self.attached
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if !self.attached {
            error!("Form is not attached, refusing to start");
            return Ok(());
        }

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let busy = self.controller.button().state() == ButtonState::Busy;

            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(event) = self.notifier_rx.recv() => {
                    if self.controller.notifier_mut().handle_event(event) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                _ = animation_interval.tick(), if busy => {
                    self.screen.tick();
                    terminal.draw(|frame| self.render(frame))?;
                }

                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.exiting = true;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.exiting = true,
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_actionable(&key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        if self.screen.handle_key(key) == FormAction::Submit {
            self.start_submission();
        }

        EventResult::Continue
    }

    fn start_submission(&mut self) {
        let pending = match self.controller.prepare(&mut self.screen) {
            Preparation::Ready(pending) => pending,
            Preparation::Finished(outcome) => {
                debug!(?outcome, "Submission ended before request");
                return;
            }
        };

        let reminders = self.controller.reminders();
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let settled = pending.send(reminders.as_ref()).await;
            let _ = action_tx.send(Action::SubmissionSettled(settled));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SubmissionSettled(settled) => {
                let outcome = self.controller.settle(settled, &mut self.screen);
                debug!(?outcome, "Submission settled");
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        self.screen
            .render(area, frame.buffer_mut(), self.controller.button());

        if let Some(toast) = self.controller.notifier().current() {
            frame.render_widget(NotificationPopup::new(toast), area);
        }
    }
}

/// Verifies the surface provides every element and places initial focus.
///
/// Logs and returns `false` instead of attaching when elements are missing.
pub fn attach_surface(surface: &mut dyn FormSurface) -> bool {
    let missing = surface.missing_elements();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
        error!(missing = ?names, "Missing required form elements");
        return false;
    }

    surface.focus(FormField::BeerCount);
    debug!("Form attached");
    true
}
