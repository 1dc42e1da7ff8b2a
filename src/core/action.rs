//! # Actions and the Reducer
//!
//! Every mutation of [`App`] flows through [`update`] as an [`Action`]:
//! key-driven intents from the screens and completion reports from spawned
//! tasks alike. `update` applies the state change and returns at most one
//! [`Effect`] for the run loop to execute (spawn a task, clear the session).
//! This keeps state transitions synchronous and unit-testable while all I/O
//! stays in the TUI layer.

use log::warn;

use crate::assistant::{ChatMessage, DEGRADED_REPLY, OFFLINE_SENTINEL};
use crate::core::auth::{SignUpDraft, UsernameStatus};
use crate::core::booking::{cancel_booking, Booking};
use crate::core::nav::ScreenId;
use crate::core::state::App;
use crate::core::store::User;

#[derive(Debug, Clone)]
pub enum Action {
    Navigate(ScreenId),
    Back,
    ResetHome,
    /// Select a car by inventory index and open its details.
    SelectCar(usize),
    /// Open the receipt for a booking id.
    ViewReceipt(String),
    /// Open the manage screen for a booking id.
    ManageBooking(String),
    /// A validated draft was finalized by the booking form.
    BookingSubmitted(Booking),
    CancelBooking(String),
    SignInSubmitted { identifier: String, password: String },
    SignInResult(Result<User, String>),
    SignUpSubmitted(SignUpDraft),
    SignUpResult(Result<User, String>),
    /// Success-panel timer fired; move on to the gallery.
    SignUpRedirect,
    /// Username field changed; bumps the generation and (re)schedules a check.
    UsernameEdited(String),
    /// A spawned availability check finished. Stale generations are dropped.
    UsernameChecked { generation: u64, taken: bool },
    Logout,
    ToggleChat,
    ChatSubmitted(String),
    ChatReply(Result<String, String>),
    Quit,
}

/// Work the run loop performs after a state transition. At most one per
/// action; `None` means the transition was purely in-memory.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Look up credentials against the account store (with simulated latency).
    CheckSignIn { identifier: String, password: String },
    /// Register the account and persist the session.
    RegisterAccount(SignUpDraft),
    /// Debounced availability lookup; the generation rides along so the
    /// result can be matched against the current one.
    CheckUsername { username: String, generation: u64 },
    /// Send a chat message with the transcript as it was before this message.
    SendChat {
        message: String,
        transcript: Vec<ChatMessage>,
    },
    /// Delete the persisted session file.
    ClearSession,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(screen) => {
            app.status_message = None;
            app.nav.navigate_to(screen);
            Effect::None
        }
        Action::Back => {
            app.nav.back();
            Effect::None
        }
        Action::ResetHome => {
            app.nav.reset_home();
            app.selected_car = None;
            app.selected_booking = None;
            app.status_message = None;
            Effect::None
        }
        Action::SelectCar(index) => {
            if let Some(car) = app.inventory.get(index) {
                app.selected_car = Some(car.clone());
                app.nav.navigate_to(ScreenId::CarDetails);
            }
            Effect::None
        }
        Action::ViewReceipt(id) => {
            app.selected_booking = Some(id);
            app.nav.navigate_to(ScreenId::Receipt);
            Effect::None
        }
        Action::ManageBooking(id) => {
            app.selected_booking = Some(id);
            app.nav.navigate_to(ScreenId::ManageBooking);
            Effect::None
        }
        Action::BookingSubmitted(booking) => {
            app.status_message = Some(format!("Booking {} confirmed", booking.id));
            app.selected_booking = Some(booking.id.clone());
            app.bookings.insert(0, booking);
            app.nav.navigate_to(ScreenId::Receipt);
            Effect::None
        }
        Action::CancelBooking(id) => {
            cancel_booking(&mut app.bookings, &id);
            app.status_message = Some(format!("Booking {} cancelled", id));
            Effect::None
        }
        Action::SignInSubmitted {
            identifier,
            password,
        } => {
            if app.auth.sign_in_pending {
                return Effect::None;
            }
            app.auth.sign_in_pending = true;
            app.auth.sign_in_error = None;
            Effect::CheckSignIn {
                identifier,
                password,
            }
        }
        Action::SignInResult(result) => {
            app.auth.sign_in_pending = false;
            match result {
                Ok(user) => {
                    app.status_message = Some(format!("Welcome back, {}!", user.first_name));
                    app.user = Some(user);
                    app.nav.navigate_to(ScreenId::Gallery);
                }
                Err(message) => app.auth.sign_in_error = Some(message),
            }
            Effect::None
        }
        Action::SignUpSubmitted(draft) => {
            if app.auth.sign_up_pending {
                return Effect::None;
            }
            app.auth.sign_up_pending = true;
            app.auth.sign_up_error = None;
            Effect::RegisterAccount(draft)
        }
        Action::SignUpResult(result) => {
            app.auth.sign_up_pending = false;
            match result {
                Ok(user) => {
                    app.user = Some(user);
                    app.auth.sign_up_success = true;
                }
                Err(message) => app.auth.sign_up_error = Some(message),
            }
            Effect::None
        }
        Action::SignUpRedirect => {
            if app.auth.sign_up_success {
                app.auth.sign_up_success = false;
                app.nav.navigate_to(ScreenId::Gallery);
            }
            Effect::None
        }
        Action::UsernameEdited(username) => {
            app.auth.username_generation += 1;
            let trimmed = username.trim().to_string();
            if trimmed.len() < 3 {
                app.auth.username_status = UsernameStatus::Idle;
                return Effect::None;
            }
            app.auth.username_status = UsernameStatus::Checking;
            Effect::CheckUsername {
                username: trimmed,
                generation: app.auth.username_generation,
            }
        }
        Action::UsernameChecked { generation, taken } => {
            // Last write wins: a check issued for an older username is stale.
            if generation == app.auth.username_generation {
                app.auth.username_status = if taken {
                    UsernameStatus::Taken
                } else {
                    UsernameStatus::Available
                };
            }
            Effect::None
        }
        Action::Logout => {
            app.user = None;
            app.nav.reset_home();
            app.selected_car = None;
            app.selected_booking = None;
            app.status_message = Some("Signed out".to_string());
            Effect::ClearSession
        }
        Action::ToggleChat => {
            app.chat.is_open = !app.chat.is_open;
            if app.chat.is_open {
                app.chat.has_notification = false;
            }
            Effect::None
        }
        Action::ChatSubmitted(message) => {
            let message = message.trim().to_string();
            if message.is_empty() || app.chat.is_loading || app.chat.is_offline {
                return Effect::None;
            }
            // Snapshot before the push: the outbound request carries the prior
            // transcript plus the new message as a separate field.
            let transcript = app.chat.messages.clone();
            app.chat.messages.push(ChatMessage::user(message.clone()));
            app.chat.is_loading = true;
            Effect::SendChat {
                message,
                transcript,
            }
        }
        Action::ChatReply(result) => {
            app.chat.is_loading = false;
            let text = match result {
                Ok(reply) => match reply.strip_prefix(OFFLINE_SENTINEL) {
                    Some(rest) => {
                        app.chat.is_offline = true;
                        rest.trim_start().to_string()
                    }
                    None => reply,
                },
                Err(detail) => {
                    warn!("Chat request failed: {}", detail);
                    DEGRADED_REPLY.to_string()
                }
            };
            app.chat.messages.push(ChatMessage::model(text));
            Effect::None
        }
        Action::Quit => {
            app.should_quit = true;
            Effect::None
        }
    }
}
