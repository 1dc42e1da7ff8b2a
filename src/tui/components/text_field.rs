//! Single-line text input used by every form screen.
//!
//! A field is just a label plus a buffer; focus is owned by the parent form,
//! which passes it in at render/event time. Masked fields render `*` per
//! character (passwords).

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::event::TuiEvent;

pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
    /// Grey hint shown while the buffer is empty.
    pub placeholder: &'static str,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
            placeholder: "",
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Apply an edit event. Returns true when the buffer changed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                self.value.push(*c);
                true
            }
            TuiEvent::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }

    /// One rendered line: `Label      value` with the focused field
    /// highlighted and any validation message appended in red.
    pub fn line(&self, focused: bool, error: Option<&str>) -> Line<'_> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::styled(format!("{:<16}", self.label), label_style)];

        if self.value.is_empty() {
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ));
        } else if self.masked {
            spans.push(Span::raw("*".repeat(self.value.chars().count())));
        } else {
            spans.push(Span::raw(self.value.as_str()));
        }

        if focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }

        if let Some(message) = error {
            spans.push(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ));
        }

        Line::from(spans)
    }
}

/// One rendered checkbox line, same focus treatment as [`TextField::line`].
pub fn checkbox_line<'a>(
    label: &'a str,
    checked: bool,
    focused: bool,
    error: Option<&'a str>,
) -> Line<'a> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(label, style),
    ];
    if let Some(message) = error {
        spans.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new("Name");
        assert!(field.handle_event(&TuiEvent::InputChar('a')));
        assert!(field.handle_event(&TuiEvent::InputChar('b')));
        assert_eq!(field.value, "ab");
        assert!(field.handle_event(&TuiEvent::Backspace));
        assert_eq!(field.value, "a");

        // Backspace on empty buffer is not a change
        field.value.clear();
        assert!(!field.handle_event(&TuiEvent::Backspace));
    }

    #[test]
    fn test_masked_field_renders_stars() {
        let mut field = TextField::masked("Password");
        field.value = "secret".to_string();
        let line = field.line(false, None);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("******"));
        assert!(!text.contains("secret"));
    }
}
