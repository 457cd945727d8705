#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use crate::domain::models::Author;
use crate::domain::models::HistoryItem;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::infrastructure::api::ApiClient;
use crate::infrastructure::api::GenerateOptions;

pub const EMPTY_REPLY_MESSAGE: &str =
    "Gemini did not return a response. Please try asking again.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    InFlight,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Sent,
    Ignored,
}

/// Owns the ordered transcript of one chat session. Messages are append-only
/// and live for the duration of the process; every chat call replays the full
/// transcript as context.
pub struct Conversation {
    messages: Vec<Message>,
    state: SubmitState,
}

impl Default for Conversation {
    fn default() -> Conversation {
        return Conversation {
            messages: vec![],
            state: SubmitState::Idle,
        };
    }
}

impl Conversation {
    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn state(&self) -> SubmitState {
        return self.state;
    }

    /// The wire projection of the transcript, in insertion order. No
    /// truncation, no reordering; error replies are replayed like any other
    /// message.
    pub fn transcript(&self) -> Vec<HistoryItem> {
        return self
            .messages
            .iter()
            .map(|message| return HistoryItem::from(message))
            .collect();
    }

    /// Appends a user message. Whitespace-only input is rejected without any
    /// state change.
    pub fn append_user(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.messages.push(Message::new(Author::User, trimmed));
        return true;
    }

    /// Submits one exchange: append the user message, replay the full
    /// transcript through the chat endpoint, append the reply. All failures
    /// land in the transcript as error-flagged bot messages rather than
    /// propagating. A submission while another is in flight is dropped.
    pub async fn submit(
        &mut self,
        client: &ApiClient,
        text: &str,
        options: &GenerateOptions,
    ) -> Submission {
        if self.state == SubmitState::InFlight {
            tracing::debug!("Submission dropped, another request is in flight");
            return Submission::Ignored;
        }

        let trimmed = text.trim();
        if !self.append_user(trimmed) {
            return Submission::Ignored;
        }

        self.state = SubmitState::InFlight;
        let res = client.chat(trimmed, &self.transcript(), options).await;
        self.state = SubmitState::Idle;

        match res {
            Ok(response) => {
                if let Some(error) = response.app_error() {
                    self.messages.push(Message::new_with_type(
                        Author::Bot,
                        MessageType::Error,
                        error,
                    ));
                    return Submission::Sent;
                }

                let reply = response
                    .text
                    .as_deref()
                    .unwrap_or("")
                    .trim()
                    .to_string();

                if reply.is_empty() {
                    self.messages
                        .push(Message::new(Author::Bot, EMPTY_REPLY_MESSAGE));
                } else {
                    self.messages.push(Message::new(Author::Bot, &reply));
                }
            }
            Err(err) => {
                self.messages.push(Message::new_with_type(
                    Author::Bot,
                    MessageType::Error,
                    &err.to_string(),
                ));
            }
        }

        return Submission::Sent;
    }
}
