//! # Chat Panel Component
//!
//! Overlay for the VL Bot assistant, opened with Ctrl+A from any screen.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChatPanelState` (the input buffer) lives in `TuiState`
//! - `ChatPanel` is created each frame with the transcript borrowed from App

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::assistant::Role;
use crate::core::state::ChatState;
use crate::tui::event::TuiEvent;

pub enum ChatPanelEvent {
    Send(String),
    Close,
}

/// Persistent state: just the message being typed.
#[derive(Default)]
pub struct ChatPanelState {
    pub input: String,
}

impl ChatPanelState {
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ChatPanelEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::ToggleChat => Some(ChatPanelEvent::Close),
            TuiEvent::Submit => {
                if self.input.trim().is_empty() {
                    return None;
                }
                let message = std::mem::take(&mut self.input);
                Some(ChatPanelEvent::Send(message))
            }
            TuiEvent::InputChar(c) => {
                self.input.push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.input.pop();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the chat overlay.
pub struct ChatPanel<'a> {
    state: &'a ChatPanelState,
    chat: &'a ChatState,
}

impl<'a> ChatPanel<'a> {
    pub fn new(state: &'a ChatPanelState, chat: &'a ChatState) -> Self {
        Self { state, chat }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);
        frame.render_widget(Clear, overlay);

        let help_text = if self.chat.is_offline {
            " Assistant offline | Esc Close "
        } else {
            " Enter Send  Esc Close "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" VL Bot ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [transcript_area, input_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        // Transcript, newest pinned to the bottom
        let mut lines: Vec<Line> = Vec::new();
        for message in &self.chat.messages {
            let (prefix, style) = match message.role {
                Role::User => ("you: ", Style::default().fg(Color::Cyan)),
                Role::Model => ("bot: ", Style::default().fg(Color::Green)),
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
                Span::styled(message.text.clone(), style),
            ]));
            lines.push(Line::raw(""));
        }
        if self.chat.is_loading {
            lines.push(Line::from(Span::styled(
                "VL Bot is typing...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        let transcript = Paragraph::new(lines).wrap(Wrap { trim: false });
        let total_lines = transcript.line_count(transcript_area.width) as u16;
        let scroll = total_lines.saturating_sub(transcript_area.height);
        frame.render_widget(transcript.scroll((scroll, 0)), transcript_area);

        // Input line
        let input = if self.chat.is_offline {
            Line::from(Span::styled(
                "The assistant is offline for this session.",
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Yellow)),
                Span::raw(self.state.input.as_str()),
                Span::styled("_", Style::default().fg(Color::Yellow)),
            ])
        };
        frame.render_widget(Paragraph::new(input), input_area);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_takes_and_clears_the_buffer() {
        let mut state = ChatPanelState::default();
        for c in "any hybrids?".chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        match state.handle_event(&TuiEvent::Submit) {
            Some(ChatPanelEvent::Send(message)) => assert_eq!(message, "any hybrids?"),
            _ => panic!("expected Send"),
        }
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_blank_message_is_not_sent() {
        let mut state = ChatPanelState::default();
        state.input = "   ".to_string();
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_escape_and_toggle_both_close() {
        let mut state = ChatPanelState::default();
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(ChatPanelEvent::Close)
        ));
        assert!(matches!(
            state.handle_event(&TuiEvent::ToggleChat),
            Some(ChatPanelEvent::Close)
        ));
    }
}
