//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Rows taken by a single-line input: top border, text, bottom border.
pub const SINGLE_LINE_HEIGHT: u16 = 3;

/// A single input as it should be drawn by [`draw_form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField<'a> {
    /// Display label shown in the input's border.
    pub label: &'a str,
    /// Current text value.
    pub value: &'a str,
    /// Hint shown while the value is empty and the field is not focused.
    pub placeholder: &'a str,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the label is marked as required.
    pub required: bool,
    /// Total rows including borders.
    pub height: u16,
}

impl<'a> FormField<'a> {
    /// Creates a single-line field with no placeholder and no error.
    pub fn new(label: &'a str, value: &'a str, required: bool) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            error: None,
            required,
            height: SINGLE_LINE_HEIGHT,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Sets the total height; values below [`SINGLE_LINE_HEIGHT`] are raised to it.
    pub fn height(mut self, height: u16) -> Self {
        self.height = height.max(SINGLE_LINE_HEIGHT);
        self
    }
}

/// Total rows needed to draw `fields`.
pub fn form_height(fields: &[FormField]) -> u16 {
    fields.iter().map(|f| f.height).sum()
}

/// Renders `fields` stacked vertically, highlighting the one at `focus`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(fields: &[FormField], focus: usize, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(f.height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_focused = i == focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.to_string()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let line = if field.value.is_empty() && !is_focused {
            Line::from(Span::styled(
                field.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![Span::raw(field.value)];
            if is_focused {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        let paragraph = Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, rows[i]);

        // Error text sits on the bottom border.
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + field.height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area.intersection(area));
        }
    }
}
