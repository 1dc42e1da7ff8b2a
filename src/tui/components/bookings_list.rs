//! # My Bookings Component
//!
//! List of the session's rentals, newest first. Enter opens the receipt of
//! the selected booking, `m` opens the manage screen.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};
use ratatui::Frame;

use crate::core::booking::{Booking, BookingStatus};
use crate::tui::event::TuiEvent;

pub enum BookingsListEvent {
    /// Open the receipt for the booking at this index.
    OpenReceipt(usize),
    /// Open the manage screen for the booking at this index.
    Manage(usize),
    Back,
}

/// Persistent state for the bookings screen. `len` is a prop synced by the
/// run loop before events are dispatched.
pub struct BookingsListState {
    pub selected: usize,
    pub len: usize,
    pub list_state: ListState,
}

impl Default for BookingsListState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingsListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            len: 0,
            list_state: ListState::default(),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<BookingsListEvent> {
        match event {
            TuiEvent::Escape => Some(BookingsListEvent::Back),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                }
                None
            }
            TuiEvent::Submit if self.len > 0 => {
                Some(BookingsListEvent::OpenReceipt(self.selected.min(self.len - 1)))
            }
            TuiEvent::InputChar('m') if self.len > 0 => {
                Some(BookingsListEvent::Manage(self.selected.min(self.len - 1)))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the bookings list.
pub struct BookingsList<'a> {
    state: &'a mut BookingsListState,
    bookings: &'a [Booking],
}

impl<'a> BookingsList<'a> {
    pub fn new(state: &'a mut BookingsListState, bookings: &'a [Booking]) -> Self {
        Self { state, bookings }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" My Bookings ")
            .title_bottom(Line::from(" Enter Receipt  m Manage  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.bookings.is_empty() {
            let empty = Paragraph::new("No bookings yet. Book the Wagon R to see it here.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.selected = self.state.selected.min(self.bookings.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let items: Vec<ListItem> = self
            .bookings
            .iter()
            .enumerate()
            .map(|(i, booking)| {
                let status_color = match booking.status {
                    BookingStatus::Confirmed => Color::Green,
                    BookingStatus::Cancelled => Color::Red,
                    BookingStatus::Ongoing => Color::Yellow,
                    BookingStatus::Completed => Color::Blue,
                };
                let base = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let line = Line::from(vec![
                    Span::styled(format!("{:<12}", booking.id), base),
                    Span::styled(format!("{:<26}", booking.dates), base),
                    Span::styled(format!("{:<11}", booking.price), base),
                    Span::styled(booking.status.label(), base.fg(status_color)),
                ]);
                ListItem::new(line)
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), area, &mut self.state.list_state);
    }
}
