//! # Application State
//!
//! One [`App`] value owns everything the UI renders: the navigation stack,
//! the fleet, bookings, the signed-in user and the chat widget state. Only
//! [`update`](crate::core::action::update) mutates it; background tasks report
//! results as actions rather than touching state directly.

use crate::assistant::{ChatMessage, GREETING};
use crate::core::auth::UsernameStatus;
use crate::core::booking::Booking;
use crate::core::catalog::{inventory, Car};
use crate::core::config::ResolvedConfig;
use crate::core::nav::Nav;
use crate::core::store::User;

/// Chat widget state. The transcript always starts with the greeting;
/// `is_offline` latches for the rest of the session once set.
#[derive(Debug, Clone)]
pub struct ChatState {
    pub is_open: bool,
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    pub is_offline: bool,
    /// Unread-greeting badge on the closed widget; cleared on first open.
    pub has_notification: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        ChatState {
            is_open: false,
            messages: vec![ChatMessage::model(GREETING)],
            is_loading: false,
            is_offline: false,
            has_notification: true,
        }
    }
}

/// In-flight authentication state shared by the sign-in and sign-up screens.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub sign_in_pending: bool,
    pub sign_in_error: Option<String>,
    pub sign_up_pending: bool,
    pub sign_up_error: Option<String>,
    /// Success panel is showing; a timer fires the redirect to the gallery.
    pub sign_up_success: bool,
    pub username_status: UsernameStatus,
    /// Bumped on every username edit. A check result is applied only when its
    /// generation still matches, so stale in-flight lookups are discarded.
    pub username_generation: u64,
}

pub struct App {
    pub nav: Nav,
    pub inventory: Vec<Car>,
    /// Car whose details/booking screens are showing.
    pub selected_car: Option<Car>,
    /// Booking id behind the receipt and manage screens.
    pub selected_booking: Option<String>,
    /// Newest first.
    pub bookings: Vec<Booking>,
    pub user: Option<User>,
    pub auth: AuthState,
    pub chat: ChatState,
    /// One-line transient banner (booking confirmed, signed out, ...).
    pub status_message: Option<String>,
    pub pickup_location: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &ResolvedConfig, user: Option<User>) -> Self {
        App {
            nav: Nav::default(),
            inventory: inventory(),
            selected_car: None,
            selected_booking: None,
            bookings: Vec::new(),
            user,
            auth: AuthState::default(),
            chat: ChatState::default(),
            status_message: None,
            pickup_location: config.pickup_location.clone(),
            should_quit: false,
        }
    }

    /// Booking currently behind the receipt/manage screens, if any.
    pub fn selected_booking(&self) -> Option<&Booking> {
        let id = self.selected_booking.as_deref()?;
        self.bookings.iter().find(|b| b.id == id)
    }
}
