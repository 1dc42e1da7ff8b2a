//! # Sign Up Component
//!
//! Registration form with a live username-availability indicator. Every edit
//! of the username emits `UsernameChanged`; the reducer bumps its generation
//! counter and spawns a fresh check, and the status shown here is whatever
//! the latest non-stale check reported.
//!
//! After a successful registration the form is replaced by a success panel;
//! the run loop fires the redirect to the gallery shortly after.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use crate::core::auth::{validate_sign_up, SignUpDraft, UsernameStatus};
use crate::core::state::AuthState;
use crate::tui::components::text_field::{checkbox_line, TextField};
use crate::tui::event::TuiEvent;

const FOCUS_USERNAME: usize = 6;
const FOCUS_TERMS: usize = 9;
const FOCUS_COUNT: usize = 10;

pub enum SignUpEvent {
    /// Enter pressed; the run loop calls [`SignUpState::try_submit`].
    Submit,
    /// Username buffer changed; triggers a fresh availability check.
    UsernameChanged(String),
    Cancel,
}

pub struct SignUpState {
    pub first_name: TextField,
    pub last_name: TextField,
    pub email: TextField,
    pub phone: TextField,
    pub id_number: TextField,
    pub address: TextField,
    pub username: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub agree_terms: bool,
    pub focus: usize,
    pub errors: Vec<(&'static str, String)>,
}

impl Default for SignUpState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpState {
    pub fn new() -> Self {
        Self {
            first_name: TextField::new("First Name"),
            last_name: TextField::new("Last Name"),
            email: TextField::new("Email").with_placeholder("name@example.com"),
            phone: TextField::new("Phone"),
            id_number: TextField::new("NIC/Passport"),
            address: TextField::new("Address"),
            username: TextField::new("Username"),
            password: TextField::masked("Password"),
            confirm_password: TextField::masked("Confirm"),
            agree_terms: false,
            focus: 0,
            errors: Vec::new(),
        }
    }

    pub fn draft(&self) -> SignUpDraft {
        SignUpDraft {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email: self.email.value.clone(),
            phone: self.phone.value.clone(),
            id_number: self.id_number.value.clone(),
            address: self.address.value.clone(),
            username: self.username.value.clone(),
            password: self.password.value.clone(),
            confirm_password: self.confirm_password.value.clone(),
            agree_terms: self.agree_terms,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SignUpEvent> {
        match event {
            TuiEvent::Escape => return Some(SignUpEvent::Cancel),
            TuiEvent::Submit => return Some(SignUpEvent::Submit),
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FOCUS_COUNT;
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = (self.focus + FOCUS_COUNT - 1) % FOCUS_COUNT;
            }
            TuiEvent::InputChar(' ') if self.focus == FOCUS_TERMS => {
                self.agree_terms = !self.agree_terms;
            }
            TuiEvent::InputChar(_) | TuiEvent::Backspace => {
                let was_username = self.focus == FOCUS_USERNAME;
                if let Some(field) = self.focused_field_mut() {
                    if field.handle_event(event) && was_username {
                        return Some(SignUpEvent::UsernameChanged(self.username.value.clone()));
                    }
                }
            }
            _ => {}
        }
        None
    }

    /// Validate; a valid draft is returned for the registration task,
    /// otherwise errors are stored and focus moves to the first one.
    pub fn try_submit(&mut self, username_taken: bool) -> Option<SignUpDraft> {
        let draft = self.draft();
        let errors = validate_sign_up(&draft, username_taken);
        if errors.is_empty() {
            self.errors.clear();
            return Some(draft);
        }
        self.focus = field_index(errors[0].0);
        self.errors = errors;
        None
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.phone),
            4 => Some(&mut self.id_number),
            5 => Some(&mut self.address),
            6 => Some(&mut self.username),
            7 => Some(&mut self.password),
            8 => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    fn error_for(&self, key: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, message)| message.as_str())
    }
}

fn field_index(key: &str) -> usize {
    match key {
        "first_name" => 0,
        "last_name" => 1,
        "email" => 2,
        "phone" => 3,
        "id_number" => 4,
        "address" => 5,
        "username" => 6,
        "password" => 7,
        "confirm_password" => 8,
        _ => FOCUS_TERMS,
    }
}

/// Transient render wrapper; availability/pending state is a prop from auth.
pub struct SignUp<'a> {
    state: &'a SignUpState,
    auth: &'a AuthState,
}

impl<'a> SignUp<'a> {
    pub fn new(state: &'a SignUpState, auth: &'a AuthState) -> Self {
        Self { state, auth }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Create Account ")
            .padding(Padding::horizontal(1));

        if self.auth.sign_up_success {
            let lines = vec![
                Line::raw(""),
                Line::from(Span::styled(
                    "Account created!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::raw(""),
                Line::from(Span::styled(
                    "Taking you to the fleet gallery...",
                    Style::default().fg(Color::Gray),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }

        let s = self.state;
        let mut lines = vec![
            s.first_name.line(s.focus == 0, s.error_for("first_name")),
            s.last_name.line(s.focus == 1, s.error_for("last_name")),
            s.email.line(
                s.focus == 2,
                self.auth
                    .sign_up_error
                    .as_deref()
                    .or_else(|| s.error_for("email")),
            ),
            s.phone.line(s.focus == 3, s.error_for("phone")),
            s.id_number.line(s.focus == 4, s.error_for("id_number")),
            s.address.line(s.focus == 5, s.error_for("address")),
            s.username.line(s.focus == 6, s.error_for("username")),
            username_status_line(self.auth.username_status),
            s.password.line(s.focus == 7, s.error_for("password")),
            s.confirm_password
                .line(s.focus == 8, s.error_for("confirm_password")),
            Line::raw(""),
            checkbox_line(
                "I agree to the Terms of Service",
                s.agree_terms,
                s.focus == FOCUS_TERMS,
                s.error_for("agree_terms"),
            ),
        ];

        if self.auth.sign_up_pending {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "Creating your account...",
                Style::default().fg(Color::Yellow),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn username_status_line(status: UsernameStatus) -> Line<'static> {
    let (text, color) = match status {
        UsernameStatus::Idle => ("", Color::DarkGray),
        UsernameStatus::Checking => ("  checking availability...", Color::Yellow),
        UsernameStatus::Available => ("  username is available", Color::Green),
        UsernameStatus::Taken => ("  username is already taken", Color::Red),
    };
    Line::from(Span::styled(text, Style::default().fg(color)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut SignUpState) {
        state.first_name.value = "Amara".to_string();
        state.last_name.value = "Silva".to_string();
        state.email.value = "amara@example.com".to_string();
        state.phone.value = "0771234567".to_string();
        state.id_number.value = "981234567V".to_string();
        state.address.value = "12 Galle Rd, Colombo".to_string();
        state.username.value = "amara".to_string();
        state.password.value = "pw".to_string();
        state.confirm_password.value = "pw".to_string();
        state.agree_terms = true;
    }

    #[test]
    fn test_username_edits_emit_change_events() {
        let mut state = SignUpState::new();
        state.focus = FOCUS_USERNAME;
        match state.handle_event(&TuiEvent::InputChar('a')) {
            Some(SignUpEvent::UsernameChanged(value)) => assert_eq!(value, "a"),
            _ => panic!("expected UsernameChanged"),
        }
        // Edits to other fields stay silent
        state.focus = 0;
        assert!(state.handle_event(&TuiEvent::InputChar('x')).is_none());
    }

    #[test]
    fn test_try_submit_blocks_taken_username() {
        let mut state = SignUpState::new();
        fill(&mut state);
        assert!(state.try_submit(true).is_none());
        assert_eq!(state.focus, FOCUS_USERNAME);
        assert_eq!(state.error_for("username"), Some("Username is already taken"));

        assert!(state.try_submit(false).is_some());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_try_submit_collects_missing_fields() {
        let mut state = SignUpState::new();
        assert!(state.try_submit(false).is_none());
        assert_eq!(state.focus, 0);
        assert!(state.errors.len() >= 9);
    }
}
