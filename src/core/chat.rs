use std::sync::Arc;

use crate::core::notice::Notifier;
use crate::models::{ChatUser, Message, MessageType, SendMessageRequest};
use crate::services::fixtures::CURRENT_USER_ID;
use crate::services::{BackendError, SkillSwapApi};

/// Conversation with one match
pub struct ChatThread {
    api: Arc<dyn SkillSwapApi>,
    notifier: Notifier,
    match_id: String,
    partner: Option<ChatUser>,
    messages: Vec<Message>,
}

impl ChatThread {
    pub fn new(api: Arc<dyn SkillSwapApi>, notifier: Notifier, match_id: &str) -> Self {
        Self {
            api,
            notifier,
            match_id: match_id.to_string(),
            partner: None,
            messages: Vec::new(),
        }
    }

    /// Load the message history and partner header
    pub async fn open(&mut self) -> Result<usize, BackendError> {
        tracing::info!("Fetching messages for match {}", self.match_id);
        match self.api.chat_messages(&self.match_id).await {
            Ok(response) => {
                self.messages = response.messages;
                self.partner = Some(response.user);
                Ok(self.messages.len())
            }
            Err(e) => {
                tracing::error!("Error fetching messages: {}", e);
                self.notifier.error("Failed to load messages");
                Err(e)
            }
        }
    }

    /// Send a text message
    ///
    /// Blank input is ignored and returns `Ok(None)`. On failure the thread
    /// is left unchanged.
    pub async fn send(&mut self, content: &str) -> Result<Option<&Message>, BackendError> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        tracing::info!("Sending message to match {}", self.match_id);
        let request = SendMessageRequest {
            match_id: self.match_id.clone(),
            content: content.to_string(),
            kind: MessageType::Text,
        };

        match self.api.send_message(request).await {
            Ok(message) => {
                self.messages.push(message);
                Ok(self.messages.last())
            }
            Err(e) => {
                tracing::error!("Error sending message: {}", e);
                self.notifier.error("Failed to send message");
                Err(e)
            }
        }
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    pub fn partner(&self) -> Option<&ChatUser> {
        self.partner.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages from the partner not yet read
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.is_read && m.sender_id != CURRENT_USER_ID)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LatencySettings, MockSettings};
    use crate::services::{Endpoint, MockBackend};

    fn thread() -> (ChatThread, Arc<MockBackend>, Notifier) {
        let backend = Arc::new(MockBackend::new(&MockSettings {
            latency: LatencySettings::instant(),
            ..MockSettings::default()
        }));
        let notifier = Notifier::new();
        (ChatThread::new(backend.clone(), notifier.clone(), "1"), backend, notifier)
    }

    #[tokio::test]
    async fn test_open_loads_history() {
        let (mut chat, _, _) = thread();
        assert_eq!(chat.open().await.unwrap(), 5);
        assert_eq!(chat.partner().map(|u| u.name.as_str()), Some("Sarah Johnson"));
        assert_eq!(chat.unread_count(), 1);
    }

    #[tokio::test]
    async fn test_send_appends_own_message() {
        let (mut chat, _, _) = thread();
        chat.open().await.unwrap();

        let sent = chat.send("See you Saturday!").await.unwrap().cloned().unwrap();
        assert_eq!(sent.sender_id, CURRENT_USER_ID);
        assert!(sent.id.starts_with("msg_"));
        assert_eq!(chat.messages().len(), 6);
        assert_eq!(chat.unread_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_message_is_ignored() {
        let (mut chat, backend, notifier) = thread();
        // An outage proves the backend is never called
        backend.fail(Endpoint::SendMessage);
        assert!(chat.send("   \n").await.unwrap().is_none());
        assert!(chat.messages().is_empty());
        assert_eq!(notifier.pending(), 0);
    }

    #[tokio::test]
    async fn test_send_failure_leaves_thread_unchanged() {
        let (mut chat, backend, notifier) = thread();
        chat.open().await.unwrap();
        backend.fail(Endpoint::SendMessage);

        assert!(chat.send("hello").await.is_err());
        assert_eq!(chat.messages().len(), 5);
        assert_eq!(notifier.last().unwrap().description, "Failed to send message");
    }
}
