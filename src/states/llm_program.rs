use std::{fmt, sync::Arc};

use tokio::sync::mpsc::Sender;
use tracing::Instrument;

use crate::{
    infer_message_type,
    notifications::{NotificationChannel, NotificationHandler},
    util::invocations::{invoke_with_tools, ActionResult},
    ExecutedState, LanguageModel, Memory, Message, MessageType, Notification, PromptGenerator,
    Role, State, StateError, StateFuture, Tool,
};

pub const LLM_PROGRAM_STATE_ID: &str = "llm_program";

/// A state that runs one model turn with tools bound.
///
/// On execution the prompt is built from memory, the model is invoked with
/// the tools, and the reply is appended. If the reply asks for a tool, the
/// tool output is appended as a function message right after it and becomes
/// the routing message.
#[derive(Clone)]
pub struct LlmProgramState {
    model: Arc<dyn LanguageModel>,
    tools: Vec<Tool>,
    prompt_generator: Arc<dyn PromptGenerator>,
    notifier: NotificationChannel,
    strip_thinking: bool,
}

impl LlmProgramState {
    pub fn new<P>(model: Arc<dyn LanguageModel>, tools: Vec<Tool>, prompt_generator: P) -> Self
    where
        P: PromptGenerator + 'static,
    {
        Self {
            model,
            tools,
            prompt_generator: Arc::new(prompt_generator),
            notifier: NotificationChannel::silent(LLM_PROGRAM_STATE_ID),
            strip_thinking: false,
        }
    }

    pub fn with_notification_channel(mut self, sender: Sender<Notification>) -> Self {
        self.notifier.set_sender(sender);
        self
    }

    /// Remove `<think>` blocks from replies before they are stored.
    pub fn with_strip_thinking(mut self, strip_thinking: bool) -> Self {
        self.strip_thinking = strip_thinking;
        self
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn run(&self, memory: &mut Memory) -> Result<ExecutedState, StateError> {
        let prompt = self.prompt_generator.generate(memory).await;
        tracing::debug!(messages = prompt.len(), tools = self.tools.len(), "prompt built");

        let ActionResult { message, function_call } = invoke_with_tools(
            self.model.as_ref(),
            &self.tools,
            prompt,
            &self.notifier,
            self.strip_thinking,
        )
        .await?;

        if message.role != Role::Assistant {
            tracing::error!(role = %message.role, "model returned a non-AI message");
            return Err(StateError::UnexpectedMessage(message.role));
        }

        memory.add_message(message.clone());

        let routing_message = match (infer_message_type(&message), function_call) {
            (MessageType::AiInvoke, Some(call)) => {
                let function_message = Message::function(call.name, call.result);
                memory.add_message(function_message.clone());
                function_message
            }
            _ => message,
        };

        Ok(ExecutedState::new(LLM_PROGRAM_STATE_ID, routing_message))
    }
}

impl State for LlmProgramState {
    fn id(&self) -> &str {
        LLM_PROGRAM_STATE_ID
    }

    fn execute<'a>(&'a self, memory: &'a mut Memory) -> StateFuture<'a> {
        let span = tracing::info_span!(
            "state.execute",
            state = LLM_PROGRAM_STATE_ID,
            model = self.model.model_name(),
        );
        Box::pin(
            async move {
                let result = self.run(memory).await;
                match &result {
                    Ok(executed) => self.notifier.notify_executed(executed.clone()).await,
                    Err(e) => self.notifier.notify_failed(e.to_string()).await,
                };
                result
            }
            .instrument(span),
        )
    }
}

impl fmt::Debug for LlmProgramState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmProgramState")
            .field("model", &self.model.model_name())
            .field("tools", &self.tools.iter().map(Tool::name).collect::<Vec<_>>())
            .field("prompt_generator", &"<prompt_generator>")
            .field("notifier", &self.notifier)
            .field("strip_thinking", &self.strip_thinking)
            .finish()
    }
}
