use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    notifications::{NotificationChannel, NotificationHandler},
    LanguageModel, Message, Role, StateError, Tool, ToolCall, ToolExecutionError,
};

/// A tool call that was executed on behalf of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Value,
    pub result: String,
}

/// Reply of a model invoked with tools, plus the tool output if it asked for one.
#[derive(Debug, Clone)]
pub struct ActionResult {
    pub message: Message,
    pub function_call: Option<FunctionCall>,
}

/// Invoke `model` with `tools` bound and run the tool it asks for.
///
/// Only assistant replies are acted on. When the reply carries several tool
/// calls, the first one is executed and the rest are logged and ignored.
/// Nothing is written to memory here.
pub async fn invoke_with_tools(
    model: &dyn LanguageModel,
    tools: &[Tool],
    prompt: Vec<Message>,
    notifier: &NotificationChannel,
    strip_thinking: bool,
) -> Result<ActionResult, StateError> {
    notifier.notify_prompt_request(prompt.clone()).await;

    let mut message = match model.chat(prompt, tools).await {
        Ok(message) => message,
        Err(e) => {
            tracing::error!(model = model.model_name(), error = %e, "model call failed");
            notifier.notify_prompt_error(e.to_string()).await;
            return Err(e.into());
        }
    };

    if strip_thinking {
        strip_thinking_block(&mut message);
    }

    notifier.notify_prompt_success(message.clone()).await;

    if message.role != Role::Assistant {
        return Ok(ActionResult { message, function_call: None });
    }

    let function_call = match message.tool_calls.as_deref() {
        Some([call, rest @ ..]) => {
            if !rest.is_empty() {
                tracing::warn!(
                    ignored = rest.len(),
                    "model requested several tool calls, executing only the first"
                );
            }
            Some(call_tool(tools, call, notifier).await?)
        }
        _ => None,
    };

    Ok(ActionResult { message, function_call })
}

/// Look up and execute a single tool call.
pub async fn call_tool(
    tools: &[Tool],
    call: &ToolCall,
    notifier: &NotificationChannel,
) -> Result<FunctionCall, ToolExecutionError> {
    tracing::info!(
        target: "tool",
        tool = %call.function.name,
        id   = ?call.id,
        args = ?call.function.arguments,
        "executing tool call",
    );

    let Some(tool) = tools.iter().find(|t| t.name() == call.function.name) else {
        tracing::error!(tool = %call.function.name, "No corresponding tool found.");
        notifier
            .notify_tool_error(format!("Could not find tool: {}", call.function.name))
            .await;
        return Err(ToolExecutionError::ToolNotFound(call.function.name.clone()));
    };

    notifier.notify_tool_request(call.clone()).await;

    let arguments = match call.parsed_arguments() {
        Ok(arguments) => arguments,
        Err(e) => {
            notifier.notify_tool_error(e.to_string()).await;
            return Err(e);
        }
    };

    match tool.execute(arguments.clone()).await {
        Ok(result) => {
            notifier.notify_tool_success(result.clone()).await;
            Ok(FunctionCall {
                name: call.function.name.clone(),
                arguments,
                result,
            })
        }
        Err(e) => {
            tracing::error!(target: "tool", tool = %call.function.name, error = %e, "tool failed");
            notifier.notify_tool_error(e.to_string()).await;
            Err(e)
        }
    }
}

/// Drops a leading `<think>...</think>` block from the message content.
fn strip_thinking_block(message: &mut Message) {
    if let Some(content) = message.content.as_mut() {
        if let Some((_, after)) = content.split_once("</think>") {
            *content = after.trim_start().to_string();
        }
    }
}
