use serde::{Deserialize, Serialize};

use crate::{ExecutedState, Message, ToolCall};

/// What happened inside a state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationContent {
    /// The prompt about to be sent to the model.
    PromptRequest(Vec<Message>),
    PromptSuccessResult(Message),
    PromptErrorResult(String),
    ToolCallRequest(ToolCall),
    ToolCallSuccessResult(String),
    ToolCallErrorResult(String),
    /// A line read from the interactive input.
    UserInput(String),
    StateExecuted(ExecutedState),
    StateFailed(String),
}
