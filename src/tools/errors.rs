/// Errors that can occur while running a tool on behalf of the model.
#[derive(Debug)]
pub enum ToolExecutionError {
    /// The arguments the model produced could not be parsed.
    ArgumentParsingError(String),
    /// The tool itself failed.
    ExecutionFailed(String),
    /// The model asked for a tool that is not bound to the state.
    ToolNotFound(String),
}

impl std::fmt::Display for ToolExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolExecutionError::ArgumentParsingError(s) => write!(f, "Tool argument parsing error: {s}"),
            ToolExecutionError::ExecutionFailed(s) => write!(f, "Tool execution failed: {s}"),
            ToolExecutionError::ToolNotFound(s) => write!(f, "Tool not found: {s}"),
        }
    }
}

impl std::error::Error for ToolExecutionError {}

/// Raised by [`ToolBuilder::build`](super::ToolBuilder::build) when a required field is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolBuilderError {
    MissingFunctionName,
    MissingFunctionDescription,
    MissingExecutor,
    UnknownRequiredProperty(String),
}

impl std::fmt::Display for ToolBuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolBuilderError::MissingFunctionName => write!(f, "Function name is required."),
            ToolBuilderError::MissingFunctionDescription => write!(f, "Function description is required."),
            ToolBuilderError::MissingExecutor => write!(f, "Executor function is required for the tool."),
            ToolBuilderError::UnknownRequiredProperty(p) => {
                write!(f, "Required property '{p}' was never added.")
            }
        }
    }
}

impl std::error::Error for ToolBuilderError {}
