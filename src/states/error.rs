use crate::{services::llm::models::errors::ModelClientError, Role, ToolExecutionError};

/// Errors that can occur while a state executes.
///
/// Nothing here is retried. Apart from [`StateError::UnexpectedMessage`],
/// these are failures of a collaborator passed straight up to the driver.
#[derive(Debug)]
pub enum StateError {
    /// Failure inside the underlying model client.
    Model(ModelClientError),
    /// A bound tool failed, was missing, or got unparsable arguments.
    Tool(ToolExecutionError),
    /// The model wrapper broke its contract and returned a non-AI message.
    UnexpectedMessage(Role),
    /// Reading or writing the interactive console failed.
    Io(std::io::Error),
    /// The interactive input reached end of file.
    InputClosed,
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::Model(e) => write!(f, "Model error: {e}"),
            StateError::Tool(e) => write!(f, "Tool error: {e}"),
            StateError::UnexpectedMessage(role) => write!(
                f,
                "LLM program should return an AI message. Got a {role} message."
            ),
            StateError::Io(e) => write!(f, "Console error: {e}"),
            StateError::InputClosed => write!(f, "Input closed before a line was read"),
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::Model(e) => Some(e),
            StateError::Tool(e) => Some(e),
            StateError::Io(e) => Some(e),
            StateError::UnexpectedMessage(_) | StateError::InputClosed => None,
        }
    }
}

impl From<ModelClientError> for StateError {
    fn from(err: ModelClientError) -> Self {
        StateError::Model(err)
    }
}

impl From<ToolExecutionError> for StateError {
    fn from(err: ToolExecutionError) -> Self {
        StateError::Tool(err)
    }
}

impl From<std::io::Error> for StateError {
    fn from(err: std::io::Error) -> Self {
        StateError::Io(err)
    }
}
