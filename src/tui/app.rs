use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};
use tokio::runtime::{Builder, Runtime};

use crate::api::{ContactApi, SubmitFuture};

use super::action::Action;
use super::contact::{ContactScreen, draw_contact};
use super::error::AppError;

/// How long to wait for terminal input when nothing is in flight.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// How long to drive an in-flight request before checking for input again.
const REQUEST_SLICE: Duration = Duration::from_millis(50);

/// Top-level application state.
pub struct App {
    contact: ContactScreen,
    api: Arc<dyn ContactApi>,
    endpoint: String,
    runtime: Runtime,
    pending: Option<SubmitFuture>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` that submits through `api`.
    ///
    /// `endpoint` is only displayed; `api` decides where requests go.
    pub fn new(api: Arc<dyn ContactApi>, endpoint: impl Into<String>) -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            contact: ContactScreen::new(),
            api,
            endpoint: endpoint.into(),
            runtime,
            pending: None,
            should_quit: false,
        })
    }

    /// Main event loop: draw → drive request → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.poll_pending();

            let wait = if self.is_pending() {
                Duration::ZERO
            } else {
                IDLE_TICK
            };
            if event::poll(wait)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_contact(&self.contact, &self.endpoint, frame, frame.area());
    }

    /// Handles a key event: global keys first, then the contact screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let quit = match key.code {
            KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        };
        if quit {
            self.should_quit = true;
            return;
        }

        let action = self.contact.handle_key(key);
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Submit(payload) => {
                tracing::debug!("starting submission");
                self.pending = Some(self.api.submit(payload));
            }
        }
    }

    /// Drives the in-flight request for a short slice.
    ///
    /// Applies the outcome once the request completes; otherwise keeps it
    /// pending for the next call. There is no overall deadline.
    pub fn poll_pending(&mut self) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };
        // `timeout` must be created inside the runtime context.
        let slice = self
            .runtime
            .block_on(async { tokio::time::timeout(REQUEST_SLICE, &mut pending).await });
        match slice {
            Ok(outcome) => self.contact.finish(outcome),
            Err(_) => self.pending = Some(pending),
        }
    }

    /// Returns `true` while a request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact screen state.
    pub fn contact(&self) -> &ContactScreen {
        &self.contact
    }
}
