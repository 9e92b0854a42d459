use std::{future::Future, pin::Pin};

use crate::{
    services::llm::{
        models::{chat::ChatRequest, errors::ModelClientError},
        InferenceClient,
    },
    InferenceOptions, Message, Tool,
};

pub type ModelFuture<'a> = Pin<Box<dyn Future<Output = Result<Message, ModelClientError>> + Send + 'a>>;

/// A chat model that can be offered tools.
///
/// Implementations return the single reply message. Whether the reply is
/// actually assistant-authored is checked by the caller, not here.
pub trait LanguageModel: Send + Sync {
    /// Model identifier, used for logging.
    fn model_name(&self) -> &str;

    fn chat<'a>(&'a self, messages: Vec<Message>, tools: &'a [Tool]) -> ModelFuture<'a>;
}

/// [`LanguageModel`] backed by an [`InferenceClient`].
#[derive(Debug, Clone)]
pub struct ChatModel {
    client: InferenceClient,
    model: String,
    options: InferenceOptions,
    keep_alive: Option<String>,
}

impl ChatModel {
    pub fn new<T: Into<String>>(client: InferenceClient, model: T) -> Self {
        Self {
            client,
            model: model.into(),
            options: InferenceOptions::default(),
            keep_alive: None,
        }
    }

    pub fn with_options(mut self, options: InferenceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn with_num_ctx(mut self, num_ctx: u32) -> Self {
        self.options.num_ctx = Some(num_ctx);
        self
    }

    pub fn with_seed(mut self, seed: i32) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_keep_alive<T: Into<String>>(mut self, keep_alive: T) -> Self {
        self.keep_alive = Some(keep_alive.into());
        self
    }

    pub(crate) fn request(&self, messages: Vec<Message>, tools: &[Tool]) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages,
            tools: if tools.is_empty() { None } else { Some(tools.to_vec()) },
            options: if self.options.is_empty() { None } else { Some(self.options.clone()) },
            stream: Some(false),
            keep_alive: self.keep_alive.clone(),
        }
    }
}

impl LanguageModel for ChatModel {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn chat<'a>(&'a self, messages: Vec<Message>, tools: &'a [Tool]) -> ModelFuture<'a> {
        Box::pin(async move {
            let request = self.request(messages, tools);
            let response = self.client.chat(request).await?;
            Ok(response.message)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{async_tool_fn, ClientBuilder, ClientConfig, ToolBuilder};

    fn model() -> ChatModel {
        let client = ClientConfig::default().build().unwrap();
        ChatModel::new(client, "qwen3:0.6b")
    }

    #[test]
    fn request_without_tools_or_options() {
        let req = model().request(vec![Message::user("hi")], &[]);
        assert_eq!(req.model, "qwen3:0.6b");
        assert!(req.tools.is_none());
        assert!(req.options.is_none());
        assert_eq!(req.stream, Some(false));
    }

    #[test]
    fn request_carries_tools_and_options() {
        let tool = ToolBuilder::new()
            .function_name("echo")
            .function_description("Echo the input back")
            .add_property("text", "string", "Text to echo")
            .add_required_property("text")
            .executor(async_tool_fn(|args: Value| async move { Ok(args["text"].to_string()) }))
            .build()
            .unwrap();

        let req = model()
            .with_temperature(0.1)
            .with_keep_alive("10m")
            .request(vec![], std::slice::from_ref(&tool));
        assert_eq!(req.tools.as_ref().map(Vec::len), Some(1));
        assert_eq!(req.options.and_then(|o| o.temperature), Some(0.1));
        assert_eq!(req.keep_alive.as_deref(), Some("10m"));
    }
}
