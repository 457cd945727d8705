#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;
use super::Message;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// The wire projection of a transcript message, sent as context on each chat
/// call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for HistoryItem {
    fn from(message: &Message) -> HistoryItem {
        let role = match message.author {
            Author::User => Role::User,
            Author::Bot => Role::Assistant,
        };

        return HistoryItem {
            role,
            content: message.text.clone(),
        };
    }
}
