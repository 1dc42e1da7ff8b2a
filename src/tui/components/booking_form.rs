//! # Booking Form Component
//!
//! Collects renter details for the selected car. Validation runs only on
//! submit: every violated rule gets an inline message and focus jumps to the
//! first one. A live total updates as the dates change.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookingFormState` lives in `TuiState`
//! - `BookingForm` is created each frame with the state and the selected car

use chrono::NaiveDate;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use crate::core::booking::{
    finalize, format_currency, quote_total, validate, Booking, BookingDraft, Field, FieldError,
};
use crate::core::catalog::Car;
use crate::tui::components::text_field::{checkbox_line, TextField};
use crate::tui::event::TuiEvent;

const FIELD_COUNT: usize = 9;

/// Events emitted by the booking form.
pub enum BookingFormEvent {
    /// Enter pressed; the run loop calls [`BookingFormState::try_submit`].
    Submit,
    /// Esc pressed; go back without keeping the draft.
    Cancel,
}

/// Persistent state for the booking screen.
pub struct BookingFormState {
    pub first_name: TextField,
    pub last_name: TextField,
    pub phone: TextField,
    pub nic: TextField,
    pub pickup_date: TextField,
    pub pickup_time: TextField,
    pub return_date: TextField,
    pub has_hold_vehicle: bool,
    pub has_guarantor: bool,
    pub focus: usize,
    pub errors: Vec<FieldError>,
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFormState {
    pub fn new() -> Self {
        Self {
            first_name: TextField::new("First Name"),
            last_name: TextField::new("Last Name"),
            phone: TextField::new("Phone").with_placeholder("077 123 4567"),
            nic: TextField::new("NIC/Passport"),
            pickup_date: TextField::new("Pickup Date").with_placeholder("YYYY-MM-DD"),
            pickup_time: TextField::new("Pickup Time").with_placeholder("HH:MM"),
            return_date: TextField::new("Return Date").with_placeholder("YYYY-MM-DD"),
            has_hold_vehicle: false,
            has_guarantor: false,
            focus: 0,
            errors: Vec::new(),
        }
    }

    /// Current entry values as a draft for validation and quoting.
    pub fn draft(&self) -> BookingDraft {
        BookingDraft {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            phone: self.phone.value.clone(),
            nic: self.nic.value.clone(),
            pickup_date: self.pickup_date.value.clone(),
            pickup_time: self.pickup_time.value.clone(),
            return_date: self.return_date.value.clone(),
            has_guarantor: self.has_guarantor,
            has_hold_vehicle: self.has_hold_vehicle,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<BookingFormEvent> {
        match event {
            TuiEvent::Escape => return Some(BookingFormEvent::Cancel),
            TuiEvent::Submit => return Some(BookingFormEvent::Submit),
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
            }
            TuiEvent::InputChar(' ') if self.focus >= 7 => {
                if self.focus == 7 {
                    self.has_hold_vehicle = !self.has_hold_vehicle;
                } else {
                    self.has_guarantor = !self.has_guarantor;
                }
            }
            TuiEvent::InputChar(_) | TuiEvent::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.handle_event(event);
                }
            }
            _ => {}
        }
        None
    }

    /// Validate against `today`; on success the finalized booking is returned
    /// and the form resets, otherwise errors are stored and focus moves to the
    /// first violated field.
    pub fn try_submit(&mut self, car: &Car, location: &str, today: NaiveDate) -> Option<Booking> {
        let draft = self.draft();
        let errors = validate(&draft, today);
        if errors.is_empty() {
            let booking = finalize(&draft, car, location);
            *self = Self::new();
            return Some(booking);
        }
        self.focus = field_index(errors[0].field);
        self.errors = errors;
        None
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.nic),
            4 => Some(&mut self.pickup_date),
            5 => Some(&mut self.pickup_time),
            6 => Some(&mut self.return_date),
            _ => None,
        }
    }

    fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn field_index(field: Field) -> usize {
    match field {
        Field::FirstName => 0,
        Field::LastName => 1,
        Field::Phone => 2,
        Field::Nic => 3,
        Field::PickupDate => 4,
        Field::PickupTime => 5,
        Field::ReturnDate => 6,
        Field::HoldVehicle => 7,
        Field::Guarantor => 8,
    }
}

/// Transient render wrapper for the booking form.
pub struct BookingForm<'a> {
    state: &'a BookingFormState,
    car: &'a Car,
}

impl<'a> BookingForm<'a> {
    pub fn new(state: &'a BookingFormState, car: &'a Car) -> Self {
        Self { state, car }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let s = self.state;
        let total = quote_total(&s.draft(), self.car.price_per_day);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Book the {}", self.car.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            s.first_name.line(s.focus == 0, s.error_for(Field::FirstName)),
            s.last_name.line(s.focus == 1, s.error_for(Field::LastName)),
            s.phone.line(s.focus == 2, s.error_for(Field::Phone)),
            s.nic.line(s.focus == 3, s.error_for(Field::Nic)),
            Line::raw(""),
            s.pickup_date.line(s.focus == 4, s.error_for(Field::PickupDate)),
            s.pickup_time.line(s.focus == 5, s.error_for(Field::PickupTime)),
            s.return_date.line(s.focus == 6, s.error_for(Field::ReturnDate)),
            Line::raw(""),
            checkbox_line(
                "I can leave a motorcycle/three-wheeler as security",
                s.has_hold_vehicle,
                s.focus == 7,
                s.error_for(Field::HoldVehicle),
            ),
            checkbox_line(
                "I can provide a guarantor with a valid NIC",
                s.has_guarantor,
                s.focus == 8,
                s.error_for(Field::Guarantor),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Estimated Total: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format_currency(&self.car.currency, total),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if !s.errors.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("{} field(s) need attention", s.errors.len()),
                Style::default().fg(Color::Red),
            )));
        }

        let block = Block::bordered()
            .title(" Booking ")
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::booking::BookingStatus;
    use crate::core::catalog::inventory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn type_into(state: &mut BookingFormState, text: &str) {
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn fill_valid(state: &mut BookingFormState) {
        type_into(state, "Kasun");
        state.handle_event(&TuiEvent::FocusNext);
        type_into(state, "Perera");
        state.handle_event(&TuiEvent::FocusNext);
        type_into(state, "0771234567");
        state.handle_event(&TuiEvent::FocusNext);
        type_into(state, "991234567V");
        state.handle_event(&TuiEvent::FocusNext);
        type_into(state, "2025-03-10");
        state.handle_event(&TuiEvent::FocusNext);
        type_into(state, "14:05");
        state.handle_event(&TuiEvent::FocusNext);
        type_into(state, "2025-03-12");
        state.handle_event(&TuiEvent::FocusNext);
        state.handle_event(&TuiEvent::InputChar(' ')); // hold vehicle
        state.handle_event(&TuiEvent::FocusNext);
        state.handle_event(&TuiEvent::InputChar(' ')); // guarantor
    }

    #[test]
    fn test_complete_form_submits_and_resets() {
        let car = &inventory()[0];
        let mut state = BookingFormState::new();
        fill_valid(&mut state);

        let booking = state
            .try_submit(car, "Colombo 03 (Main Office)", today())
            .expect("valid form should finalize");
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.total_amount, 13_500);

        // Form cleared for the next rental
        assert!(state.first_name.value.is_empty());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_invalid_submit_focuses_first_error() {
        let car = &inventory()[0];
        let mut state = BookingFormState::new();
        fill_valid(&mut state);
        state.first_name.value.clear();
        state.phone.value = "123".to_string();

        assert!(state
            .try_submit(car, "Colombo 03 (Main Office)", today())
            .is_none());
        assert_eq!(state.errors.len(), 2);
        assert_eq!(state.focus, 0); // first name comes first in check order
        assert!(state.error_for(Field::Phone).is_some());
    }

    #[test]
    fn test_space_toggles_checkboxes_only_when_focused() {
        let mut state = BookingFormState::new();
        // Space on a text field is just a character
        state.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(state.first_name.value, " ");
        assert!(!state.has_hold_vehicle);

        state.focus = 7;
        state.handle_event(&TuiEvent::InputChar(' '));
        assert!(state.has_hold_vehicle);
        state.handle_event(&TuiEvent::InputChar(' '));
        assert!(!state.has_hold_vehicle);
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut state = BookingFormState::new();
        state.handle_event(&TuiEvent::FocusPrev);
        assert_eq!(state.focus, 8);
        state.handle_event(&TuiEvent::FocusNext);
        assert_eq!(state.focus, 0);
    }
}
