use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Role, ToolCall};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    #[serde(default = "new_uuid", skip_serializing)]
    pub id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    /// Name of the tool that produced a [`Role::Function`] message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
}

impl Message {
    fn new(role: Role, content: String, tool_name: Option<String>) -> Self {
        Self {
            id: new_uuid(),
            role,
            content: Some(content),
            tool_calls: None,
            tool_name,
        }
    }

    pub fn system<T: Into<String>>(content: T) -> Self {
        Self::new(Role::System, content.into(), None)
    }
    pub fn user<T: Into<String>>(content: T) -> Self {
        Self::new(Role::User, content.into(), None)
    }
    pub fn assistant<T: Into<String>>(content: T) -> Self {
        Self::new(Role::Assistant, content.into(), None)
    }

    /// Wraps the output of the tool `name` as a function-result message.
    pub fn function<N, T>(name: N, content: T) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self::new(Role::Function, content.into(), Some(name.into()))
    }

    /// Attaches tool calls to the message (assistant invocation requests).
    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = Some(tool_calls);
        self
    }

    /// True when the message carries at least one tool call.
    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls.as_ref().is_some_and(|calls| !calls.is_empty())
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

fn new_uuid() -> String {
    Uuid::new_v4().to_string()
}
