//! Conversation memory shared between automaton states.
//!
//! [`Memory`] is an append-only log. States receive it as `&mut Memory`, so
//! only one state can write to it at a time.

use serde::{Deserialize, Serialize};

use crate::{Message, Role};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Memory {
    messages: Vec<Message>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = Message>,
    {
        Self { messages: messages.into_iter().collect() }
    }

    pub fn add_message(&mut self, message: Message) {
        tracing::trace!(role = %message.role, id = %message.id, "memory append");
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Routing tag derived from a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    System,
    Human,
    Ai,
    /// An AI message that asks for a tool to be invoked.
    AiInvoke,
    Function,
}

pub fn infer_message_type(message: &Message) -> MessageType {
    match message.role {
        Role::System => MessageType::System,
        Role::User => MessageType::Human,
        Role::Assistant if message.has_tool_calls() => MessageType::AiInvoke,
        Role::Assistant => MessageType::Ai,
        Role::Function => MessageType::Function,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ToolCall;

    #[test]
    fn infers_every_tag() {
        assert_eq!(infer_message_type(&Message::system("s")), MessageType::System);
        assert_eq!(infer_message_type(&Message::user("u")), MessageType::Human);
        assert_eq!(infer_message_type(&Message::assistant("a")), MessageType::Ai);
        assert_eq!(infer_message_type(&Message::function("f", "r")), MessageType::Function);

        let invoke = Message::assistant("").with_tool_calls(vec![ToolCall::new("f", json!({}))]);
        assert_eq!(infer_message_type(&invoke), MessageType::AiInvoke);
    }

    #[test]
    fn appends_in_order() {
        let mut memory = Memory::from_messages([Message::system("be brief")]);
        let question = Message::user("hi");
        memory.add_message(question.clone());

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.last_message(), Some(&question));
        assert_eq!(memory.messages()[0].role, Role::System);
    }

    #[test]
    fn snapshot_round_trips_content() {
        let mut memory = Memory::new();
        assert!(memory.is_empty());
        memory.add_message(Message::user("ping"));
        memory.add_message(Message::function("clock", "12:00"));

        let snapshot = serde_json::to_string(&memory).unwrap();
        let restored: Memory = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.messages()[1].tool_name.as_deref(), Some("clock"));
        assert_eq!(restored.messages()[1].role, Role::Function);
    }
}
