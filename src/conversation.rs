use crate::types::Message;

/// Ordered, append-only message history for the current session.
/// Lives in memory only; a relaunch starts empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the end; insertion order is chronological order.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Empties the history. Irreversible, no confirmation.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
