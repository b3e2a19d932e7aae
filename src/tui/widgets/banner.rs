//! Banner widget: one-shot success or failure feedback above the form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use serde_json::Value;

use crate::form::{SubmissionState, response_preview};

/// Feedback derived from a [`SubmissionState`]; decoupled so it can be built in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// The server accepted the form. `detail` previews its reply.
    Success { detail: Option<String> },
    /// The attempt failed with the given message.
    Error(String),
}

/// `null`, `false`, zero and `""` carry nothing worth previewing.
fn is_blank(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl Banner {
    /// Returns the banner to show for `state`, or `None` when idle or submitting.
    pub fn for_state(state: &SubmissionState) -> Option<Self> {
        match state {
            SubmissionState::Idle | SubmissionState::Submitting => None,
            SubmissionState::Succeeded(body) => Some(Self::Success {
                detail: (!is_blank(body)).then(|| response_preview(body)),
            }),
            SubmissionState::Failed(err) => Some(Self::Error(err.to_string())),
        }
    }

    /// Rows to reserve at `width`: the wrapped text plus one spacer row.
    pub fn height(&self, width: u16) -> u16 {
        let rows = self.paragraph().line_count(width.max(1));
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(1)
    }

    fn paragraph(&self) -> Paragraph<'_> {
        let paragraph = match self {
            Self::Success { detail } => {
                let green = Style::default().fg(Color::Green);
                let mut lines = vec![Line::from(Span::styled(
                    "\u{2713} Form Submitted Successfully!",
                    green.add_modifier(Modifier::BOLD),
                ))];
                if let Some(detail) = detail {
                    lines.push(Line::from(Span::styled(
                        format!("Server Response: {detail}"),
                        green,
                    )));
                }
                Paragraph::new(lines)
            }
            Self::Error(message) => Paragraph::new(Line::from(Span::styled(
                format!("\u{2717} {message}"),
                Style::default().fg(Color::Red),
            ))),
        };
        paragraph.wrap(Wrap { trim: true })
    }
}

/// Renders `banner` into `area`.
///
/// - Success: `✓ Form Submitted Successfully!` in Green, then
///   `Server Response: {preview}` unless the reply was blank
/// - Error: `✗ {message}` in Red, wrapped
#[mutants::skip]
pub fn draw_banner(banner: &Banner, frame: &mut Frame, area: Rect) {
    frame.render_widget(banner.paragraph(), area);
}
