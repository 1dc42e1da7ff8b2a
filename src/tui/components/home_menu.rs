//! # Home Menu Component
//!
//! Landing screen: hero banner plus the navigation menu. Entries change with
//! session state (Sign In / Create Account vs My Bookings / Sign Out).

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::core::nav::ScreenId;
use crate::core::store::User;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// Open the featured car's details.
    ViewCar,
    Screen(ScreenId),
    SignOut,
}

fn menu_items(signed_in: bool) -> Vec<(&'static str, MenuTarget)> {
    let mut items = vec![
        ("View Our Car", MenuTarget::ViewCar),
        ("Pricing", MenuTarget::Screen(ScreenId::Pricing)),
        ("Fleet Gallery", MenuTarget::Screen(ScreenId::Gallery)),
        ("Reviews", MenuTarget::Screen(ScreenId::Reviews)),
        ("FAQ", MenuTarget::Screen(ScreenId::Faq)),
        ("Terms of Service", MenuTarget::Screen(ScreenId::Terms)),
        ("Contact Support", MenuTarget::Screen(ScreenId::Support)),
    ];
    if signed_in {
        items.push(("My Bookings", MenuTarget::Screen(ScreenId::MyBookings)));
        items.push(("Sign Out", MenuTarget::SignOut));
    } else {
        items.push(("Sign In", MenuTarget::Screen(ScreenId::SignIn)));
        items.push(("Create Account", MenuTarget::Screen(ScreenId::SignUp)));
    }
    items
}

pub enum HomeEvent {
    Open(MenuTarget),
    Quit,
}

/// Persistent state. `signed_in` is a prop synced by the run loop.
pub struct HomeMenuState {
    pub selected: usize,
    pub signed_in: bool,
    pub list_state: ListState,
}

impl Default for HomeMenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeMenuState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            signed_in: false,
            list_state,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<HomeEvent> {
        let len = menu_items(self.signed_in).len();
        match event {
            // Esc on the landing screen leaves the app
            TuiEvent::Escape => Some(HomeEvent::Quit),
            TuiEvent::CursorUp | TuiEvent::FocusPrev => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown | TuiEvent::FocusNext => {
                self.selected = (self.selected + 1).min(len - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => menu_items(self.signed_in)
                .get(self.selected)
                .map(|(_, target)| HomeEvent::Open(*target)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the landing screen.
pub struct HomeMenu<'a> {
    state: &'a mut HomeMenuState,
    user: Option<&'a User>,
}

impl<'a> HomeMenu<'a> {
    pub fn new(state: &'a mut HomeMenuState, user: Option<&'a User>) -> Self {
        Self { state, user }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [hero_area, menu_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).areas(area);

        let greeting = match self.user {
            Some(user) => format!("Signed in as {} {}", user.first_name, user.last_name),
            None => "Self-drive rentals, no cash deposit".to_string(),
        };
        let hero = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "V L   R E N T   A   C A R",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "/// REDEFINING MOBILITY IN MATARA",
                Style::default().fg(Color::Gray),
            )),
            Line::raw(""),
            Line::from(Span::styled(greeting, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hero, hero_area);

        let items: Vec<ListItem> = menu_items(self.state.signed_in)
            .iter()
            .enumerate()
            .map(|(i, (label, _))| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(format!("  {}  ", label), style)))
            })
            .collect();

        let menu = List::new(items).block(Block::bordered().title(" Menu "));
        frame.render_stateful_widget(menu, menu_area, &mut self.state.list_state);
    }
}
