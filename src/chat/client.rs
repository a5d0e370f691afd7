// src/chat/client.rs
//! HTTP client for the chat backend.
//!
//! The backend keeps conversation state per session id; the client mints a
//! uuid session id at construction and reuses it for every message. The
//! character travels as its lowercase wire id.

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::character::CharacterId;

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Unique id per user/session; the backend keys its history on it.
    pub session_id: String,
    /// Lowercase character id ("goku", "vegeta", "itachi").
    pub character: String,
    /// Latest user message text.
    pub user_message: String,
}

/// Response body from `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Echoes which character replied.
    pub character: String,
    /// The model's reply text.
    pub bot_message: String,
}

/// Errors from the chat backend boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the external chat service.
pub struct ChatClient {
    client: HttpClient,
    chat_url: String,
    session_id: String,
}

impl ChatClient {
    /// Create a client against `base_url`, minting a fresh session id.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChatError> {
        let client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            chat_url: format!("{}/chat", base_url.trim_end_matches('/')),
            session_id: Uuid::new_v4().to_string(),
        })
    }

    /// Session id used for every message from this client.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Send a user message and return the bot's reply.
    pub async fn send_message(
        &self,
        character: CharacterId,
        user_message: &str,
    ) -> Result<ChatResponse, ChatError> {
        let request = ChatRequest {
            session_id: self.session_id.clone(),
            character: character.as_str().to_string(),
            user_message: user_message.to_string(),
        };

        debug!(character = %character, session = %self.session_id, "sending chat message");

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatError::Status(response.status()));
        }

        Ok(response.json::<ChatResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_snake_case_fields() {
        let req = ChatRequest {
            session_id: "abc".into(),
            character: "goku".into(),
            user_message: "hi".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["session_id"], "abc");
        assert_eq!(json["character"], "goku");
        assert_eq!(json["user_message"], "hi");
    }

    #[test]
    fn clients_get_distinct_session_ids() {
        let a = ChatClient::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
        let b = ChatClient::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
        assert_ne!(a.session_id(), b.session_id());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let c = ChatClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(c.chat_url, "http://localhost:8000/chat");
    }
}
