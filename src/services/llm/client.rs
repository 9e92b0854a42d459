use std::sync::Arc;

use crate::{
    services::llm::models::{
        chat::{ChatRequest, ChatResponse},
        errors::ModelClientError,
    },
    ClientConfig,
};

use super::providers::ollama::OllamaClient;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Ollama,
}

#[derive(Debug, Clone)]
enum ClientInner {
    Ollama(OllamaClient),
}

/// Provider-agnostic handle to a chat endpoint. Cheap to clone.
#[derive(Clone, Debug)]
pub struct InferenceClient {
    config: ClientConfig,
    inner: Arc<ClientInner>,
}

impl InferenceClient {
    pub fn get_config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, ModelClientError> {
        match &*self.inner {
            ClientInner::Ollama(c) => c.chat(req).await,
        }
    }
}

impl TryFrom<ClientConfig> for InferenceClient {
    type Error = ModelClientError;

    fn try_from(cfg: ClientConfig) -> Result<Self, Self::Error> {
        let config = cfg.clone();
        let Some(provider) = cfg.provider.clone() else {
            return Err(ModelClientError::Config("Provider not defined".into()));
        };
        let inner = match provider {
            Provider::Ollama => ClientInner::Ollama(OllamaClient::new(cfg)?),
        };
        Ok(Self {
            config,
            inner: Arc::new(inner),
        })
    }
}
