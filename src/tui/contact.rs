//! Contact screen: the form, its feedback banner, and the submit button.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::{ApiResponse, TransportError};
use crate::form::ContactForm;
use crate::model::Field;
use crate::tui::action::Action;
use crate::tui::widgets::{Banner, FormField, draw_banner, draw_form, form_height};

/// Total rows for the message input, borders included.
const MESSAGE_HEIGHT: u16 = 7;

/// State for the contact screen.
#[derive(Debug, Default)]
pub struct ContactScreen {
    form: ContactForm,
    focus: Field,
}

impl ContactScreen {
    /// Creates a screen with an empty form and focus on the name input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut value = self.form.fields().get(self.focus).to_string();
                value.push(ch);
                self.form.on_change(self.focus, value);
                Action::None
            }
            KeyCode::Backspace => {
                let mut value = self.form.fields().get(self.focus).to_string();
                if value.pop().is_some() {
                    self.form.on_change(self.focus, value);
                }
                Action::None
            }
            KeyCode::Enter => match self.form.begin_submit() {
                Some(payload) => Action::Submit(payload),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    /// Applies the outcome of the request started by an [`Action::Submit`].
    pub fn finish(&mut self, outcome: Result<ApiResponse, TransportError>) {
        self.form.finish(outcome);
    }

    /// Returns the underlying form state.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Returns the field that receives typed characters.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Builds the widget view of every input.
    fn form_fields(&self) -> Vec<FormField<'_>> {
        Field::ALL
            .iter()
            .map(|&field| {
                let view = FormField::new(field.label(), self.form.fields().get(field), true)
                    .placeholder(field.placeholder())
                    .error(self.form.errors().get(field).map(ToString::to_string));
                if field == Field::Message {
                    view.height(MESSAGE_HEIGHT)
                } else {
                    view
                }
            })
            .collect()
    }
}

/// Renders the contact screen. `endpoint` is shown in the footer.
#[mutants::skip]
pub fn draw_contact(state: &ContactScreen, endpoint: &str, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner = Banner::for_state(state.form().submission());
    let fields = state.form_fields();

    let [banner_area, form_area, button_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(banner.as_ref().map_or(0, |b| b.height(inner.width))),
        Constraint::Length(form_height(&fields)),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(inner);

    if let Some(ref banner) = banner {
        draw_banner(banner, frame, banner_area);
    }

    let focus = Field::ALL
        .iter()
        .position(|&f| f == state.focus())
        .unwrap_or(0);
    draw_form(&fields, focus, frame, form_area);

    let button = if state.form().is_submitting() {
        Paragraph::new("[ Submitting... ]").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new("[ Submit ]").style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(button.alignment(Alignment::Center), button_area);

    let footer = Paragraph::new(vec![
        Line::from("Tab/Shift+Tab: next/prev  Enter: submit  Esc: quit"),
        Line::from(format!("API: {endpoint}")),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
