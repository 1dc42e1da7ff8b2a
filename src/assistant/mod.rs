//! # AI Assistant
//!
//! The chat exchange behind the floating "VL Bot" widget: transcript types,
//! the fleet-aware system instruction, and the request/reply client.

pub mod client;
pub mod types;

pub use client::{build_client, ChatClient, ChatError, HttpChatClient, OfflineClient};
pub use types::{
    system_instruction, ChatMessage, Role, DEGRADED_REPLY, GREETING, OFFLINE_SENTINEL,
};
