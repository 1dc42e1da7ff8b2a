//! Transcript types shared by the chat client and the chat widget.

use serde::{Deserialize, Serialize};

use crate::core::catalog::Car;

/// Sentinel prefix on a reply that means "service unavailable". The widget
/// strips it (and one following space), shows the remainder, and latches into
/// offline mode for the rest of the session.
pub const OFFLINE_SENTINEL: &str = "DEMO_MODE:";

/// Canned reply used when a request reaches the service but fails. Does not
/// latch offline mode; the user may try again.
pub const DEGRADED_REPLY: &str =
    "I'm having trouble connecting to the fleet database right now. Please try again later.";

/// Greeting shown before any exchange has happened.
pub const GREETING: &str = "Beep boop! I am your VL Bot. Ask me anything about our cars!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// System instruction grounding the assistant in the current fleet.
pub fn system_instruction(inventory: &[Car]) -> String {
    let fleet: Vec<String> = inventory
        .iter()
        .map(|c| {
            format!(
                "{} ({} {}) - {} {}/day",
                c.name,
                c.year,
                c.fuel_type.label(),
                c.currency,
                c.price_per_day
            )
        })
        .collect();
    format!(
        "You are the AI assistant for VL Rent a Car. Your goal is to help customers \
         interested in our Suzuki Wagon R FZ Safety (2018 Hybrid). \
         Adopt a professional, efficient tone. \
         We currently offer: {}. \
         If a user asks about other cars, politely inform them that we currently \
         specialize in the Wagon R FZ Safety for the best city driving experience. \
         Highlight fuel efficiency (Hybrid) and safety features.",
        fleet.join("; ")
    )
}
