use serde::{Deserialize, Serialize};

use crate::{infer_message_type, Message, MessageType};

/// What a state hands back to the driver: who ran, and the message to route on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutedState {
    pub id: String,
    pub data: ExecutedData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutedData {
    pub message: Message,
}

impl ExecutedState {
    pub fn new<T: Into<String>>(id: T, message: Message) -> Self {
        Self {
            id: id.into(),
            data: ExecutedData { message },
        }
    }

    /// The routing message.
    pub fn message(&self) -> &Message {
        &self.data.message
    }

    pub fn message_type(&self) -> MessageType {
        infer_message_type(&self.data.message)
    }
}
