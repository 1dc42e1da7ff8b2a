//! # Chat Client
//!
//! One request, one text reply. The outbound payload is the full prior
//! transcript plus the latest user message, against an OpenRouter-compatible
//! `/chat/completions` endpoint.
//!
//! Two implementations of [`ChatClient`]:
//! - [`HttpChatClient`] when an API key is configured;
//! - [`OfflineClient`] otherwise, which answers every message with the
//!   offline sentinel so the widget latches into its degraded mode.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::types::{ChatMessage, Role, OFFLINE_SENTINEL};
use crate::core::config::ResolvedConfig;

/// Errors from a chat exchange. The widget maps any of these to the degraded
/// reply text; the variants exist for logging and tests.
#[derive(Debug)]
pub enum ChatError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the service's response.
    Parse(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Network(msg) => write!(f, "network error: {msg}"),
            ChatError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ChatError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ChatError {}

#[async_trait]
pub trait ChatClient: Send + Sync {
    fn name(&self) -> &str;

    /// Send the latest user message with the prior transcript; returns the
    /// assistant's single text reply.
    async fn reply(
        &self,
        message: &str,
        transcript: &[ChatMessage],
        system_instruction: &str,
    ) -> Result<String, ChatError>;
}

// ============================================================================
// Wire types (chat-completions API)
// ============================================================================

#[derive(Serialize, Debug)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: String,
}

// ============================================================================
// HTTP implementation
// ============================================================================

pub struct HttpChatClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl HttpChatClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        }
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn reply(
        &self,
        message: &str,
        transcript: &[ChatMessage],
        system_instruction: &str,
    ) -> Result<String, ChatError> {
        let mut messages = Vec::with_capacity(transcript.len() + 2);
        messages.push(WireMessage {
            role: "system",
            content: system_instruction,
        });
        for item in transcript {
            messages.push(WireMessage {
                role: match item.role {
                    Role::User => "user",
                    Role::Model => "assistant",
                },
                content: &item.text,
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: message,
        });

        let req = ChatRequest {
            model: &self.model,
            messages,
        };

        debug!("Chat request: {} transcript items", transcript.len());

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&req)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Chat API error {}: {}", status, body);
            return Err(ChatError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        let reply = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| ChatError::Parse("empty choices in response".to_string()))?;

        debug!("Chat reply: {} bytes", reply.len());
        Ok(reply)
    }
}

// ============================================================================
// Offline stand-in
// ============================================================================

/// Used when no API key is configured. Always replies with the sentinel so
/// the widget shows the message once and disables further input.
pub struct OfflineClient;

#[async_trait]
impl ChatClient for OfflineClient {
    fn name(&self) -> &str {
        "offline"
    }

    async fn reply(
        &self,
        _message: &str,
        _transcript: &[ChatMessage],
        _system_instruction: &str,
    ) -> Result<String, ChatError> {
        Ok(format!(
            "{} The AI assistant is currently offline. (API key missing in environment)",
            OFFLINE_SENTINEL
        ))
    }
}

/// Build a client from the resolved config: HTTP when a key is present,
/// offline stand-in otherwise.
pub fn build_client(config: &ResolvedConfig) -> std::sync::Arc<dyn ChatClient> {
    match config.assistant_api_key.clone() {
        Some(api_key) => {
            info!("Assistant online: {} @ {}", config.assistant_model, config.assistant_base_url);
            std::sync::Arc::new(HttpChatClient::new(
                api_key,
                config.assistant_base_url.clone(),
                config.assistant_model.clone(),
            ))
        }
        None => {
            info!("No assistant API key configured, running offline");
            std::sync::Arc::new(OfflineClient)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_client_replies_with_sentinel() {
        let client = OfflineClient;
        let reply = client.reply("hello", &[], "sys").await.unwrap();
        assert!(reply.starts_with(OFFLINE_SENTINEL));
    }

    #[test]
    fn test_build_client_without_key_is_offline() {
        let config = ResolvedConfig {
            pickup_location: "Colombo 03 (Main Office)".to_string(),
            currency: "LKR".to_string(),
            assistant_api_key: None,
            assistant_base_url: "http://unused".to_string(),
            assistant_model: "unused".to_string(),
        };
        assert_eq!(build_client(&config).name(), "offline");
    }

    #[test]
    fn test_build_client_with_key_is_http() {
        let config = ResolvedConfig {
            pickup_location: "Colombo 03 (Main Office)".to_string(),
            currency: "LKR".to_string(),
            assistant_api_key: Some("sk-test".to_string()),
            assistant_base_url: "http://localhost:1".to_string(),
            assistant_model: "m".to_string(),
        };
        assert_eq!(build_client(&config).name(), "http");
    }
}
