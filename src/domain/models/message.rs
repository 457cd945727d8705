#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use super::Author;

// IDs are unique within a process and strictly increase in creation order,
// which is the only ordering the transcript relies on.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub id: u64,
    pub author: Author,
    pub text: String,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            author,
            text: text.to_string(),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            author,
            text: text.to_string(),
            mtype,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }
}
