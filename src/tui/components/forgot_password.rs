//! Password-reset request screen. No mail is actually sent; a non-empty
//! identifier flips the panel to its confirmation state, matching the rest of
//! the simulated account flow.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

pub enum ForgotPasswordEvent {
    /// Back to the sign-in screen.
    ReturnToSignIn,
}

pub struct ForgotPasswordState {
    pub identifier: TextField,
    pub submitted: bool,
}

impl Default for ForgotPasswordState {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPasswordState {
    pub fn new() -> Self {
        Self {
            identifier: TextField::new("Email/Username").with_placeholder("name@example.com"),
            submitted: false,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ForgotPasswordEvent> {
        match event {
            TuiEvent::Escape => return Some(ForgotPasswordEvent::ReturnToSignIn),
            TuiEvent::Submit => {
                if self.submitted {
                    return Some(ForgotPasswordEvent::ReturnToSignIn);
                }
                if !self.identifier.value.trim().is_empty() {
                    self.submitted = true;
                }
            }
            TuiEvent::InputChar(_) | TuiEvent::Backspace if !self.submitted => {
                self.identifier.handle_event(event);
            }
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Reset Password ")
            .padding(Padding::horizontal(1));

        let lines = if self.submitted {
            vec![
                Line::raw(""),
                Line::from(Span::styled(
                    "Check your email",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::styled(
                        "We have sent password recovery instructions to ",
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        self.identifier.value.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(".", Style::default().fg(Color::Gray)),
                ]),
                Line::raw(""),
                Line::from(Span::styled(
                    "Press Enter to return to sign in",
                    Style::default().fg(Color::Yellow),
                )),
            ]
        } else {
            vec![
                Line::from(Span::styled(
                    "Enter your registered email address or username.",
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    "We'll send you instructions to reset your password.",
                    Style::default().fg(Color::Gray),
                )),
                Line::raw(""),
                self.identifier.line(true, None),
                Line::raw(""),
                Line::from(Span::styled(
                    "Enter to send the reset link",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
