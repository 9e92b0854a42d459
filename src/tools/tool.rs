use std::{collections::HashMap, fmt, future::Future, pin::Pin, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ToolExecutionError;

/// Defines the type of tool available. Currently, only 'function' is supported.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    Function,
}

pub type ToolFuture = Pin<Box<dyn Future<Output = Result<String, ToolExecutionError>> + Send>>;

/// Signature for an asynchronous tool executor function.
///
/// Accepts a JSON [`Value`] of arguments and produces a `String` result
/// or a [`ToolExecutionError`] if execution fails.
pub type AsyncToolFn = Arc<dyn Fn(Value) -> ToolFuture + Send + Sync>;

/// Wraps an async function or closure into an [`AsyncToolFn`].
pub fn async_tool_fn<F, Fut>(f: F) -> AsyncToolFn
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, ToolExecutionError>> + Send + 'static,
{
    Arc::new(move |args: Value| -> ToolFuture { Box::pin(f(args)) })
}

/// Executor installed on tools that were deserialized and never rehydrated.
fn default_executor() -> AsyncToolFn {
    async_tool_fn(|_| async {
        Err(ToolExecutionError::ExecutionFailed(
            "tool was deserialized without an executor".into(),
        ))
    })
}

/// A tool (function) the model may call.
///
/// Only the schema part is serialized; that is what gets sent to the model.
#[derive(Serialize, Clone, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: Function,
    #[serde(skip, default = "default_executor")]
    pub executor: AsyncToolFn,
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("tool_type", &self.tool_type)
            .field("function", &self.function)
            .field("executor", &"<async_fn>")
            .finish()
    }
}

impl Tool {
    pub async fn execute(&self, args: Value) -> Result<String, ToolExecutionError> {
        (self.executor)(args).await
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Function {
    pub name: String,
    pub description: String,
    pub parameters: FunctionParameters,
}

/// JSON-schema-like description of the function arguments.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FunctionParameters {
    #[serde(rename = "type")]
    pub param_type: String,
    pub properties: HashMap<String, Property>,
    pub required: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Property {
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: String,
}

/// A tool call requested by the model.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Ollama omits the type, so it defaults to [`ToolType::Function`].
    #[serde(default = "default_tool_call_type", skip_serializing_if = "is_default_tool_call_type")]
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: ToolCallFunction,
}

fn default_tool_call_type() -> ToolType {
    ToolType::Function
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_default_tool_call_type(tool_type: &ToolType) -> bool {
    *tool_type == default_tool_call_type()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ToolCallFunction {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new<T: Into<String>>(name: T, arguments: Value) -> Self {
        Self {
            id: None,
            tool_type: ToolType::Function,
            function: ToolCallFunction { name: name.into(), arguments },
        }
    }

    /// Arguments as a JSON value. Some models send them as a JSON-encoded string.
    pub fn parsed_arguments(&self) -> Result<Value, ToolExecutionError> {
        match &self.function.arguments {
            Value::String(raw) => serde_json::from_str(raw)
                .map_err(|e| ToolExecutionError::ArgumentParsingError(e.to_string())),
            Value::Null => Ok(Value::Object(Default::default())),
            other => Ok(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn deserialized_tool_refuses_to_run() {
        let raw = json!({
            "type": "function",
            "function": {
                "name": "noop",
                "description": "does nothing",
                "parameters": {"type": "object", "properties": {}, "required": []}
            }
        });
        let tool: Tool = serde_json::from_value(raw).unwrap();
        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, ToolExecutionError::ExecutionFailed(_)));
    }

    #[test]
    fn string_arguments_are_decoded() {
        let call = ToolCall::new("add", Value::String(r#"{"a": 1}"#.into()));
        assert_eq!(call.parsed_arguments().unwrap(), json!({"a": 1}));

        let call = ToolCall::new("add", Value::String("not json".into()));
        assert!(matches!(
            call.parsed_arguments(),
            Err(ToolExecutionError::ArgumentParsingError(_))
        ));

        let call = ToolCall::new("add", Value::Null);
        assert_eq!(call.parsed_arguments().unwrap(), json!({}));
    }
}
