use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    Client,
};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{error, span, Instrument, Level, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::services::llm::models::{
    chat::{ChatRequest, ChatResponse},
    errors::ModelClientError,
};
use crate::ClientConfig;

pub(crate) const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

#[derive(Debug, Clone)]
pub struct OllamaClient {
    pub client: Client,
    pub base_url: String,
}

impl OllamaClient {
    pub fn new(cfg: ClientConfig) -> Result<Self, ModelClientError> {
        let base_url = cfg
            .base_url
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.into())
            .trim_end_matches('/')
            .to_string();

        let mut headers = HeaderMap::new();
        if let Some(key) = cfg.api_key.filter(|k| !k.is_empty()) {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {key}"))
                    .map_err(|e| ModelClientError::Config(format!("Invalid api_key header: {e}")))?,
            );
        }
        for (k, v) in cfg.extra_headers.unwrap_or_default() {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|_| ModelClientError::Config(format!("Invalid header name: {k}")))?;
            let value = HeaderValue::from_str(&v)
                .map_err(|_| ModelClientError::Config(format!("Invalid header value for {k}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, base_url })
    }

    async fn post<T, R>(&self, endpoint: &str, request_body: &T) -> Result<R, ModelClientError>
    where
        T: serde::Serialize + fmt::Debug,
        R: DeserializeOwned + fmt::Debug,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let span = span!(
            Level::INFO,
            "Ollama HTTP Request",
            "otel.name" = format!("POST {}", endpoint).as_str(),
            "http.request.method" = "POST",
            "url.full" = url.as_str(),
            "server.address" = self.base_url.as_str(),
        );

        async {
            let response = self
                .client
                .post(&url)
                .json(request_body)
                .send()
                .await
                .map_err(|e| {
                    Span::current().set_status(opentelemetry::trace::Status::Error {
                        description: e.to_string().into(),
                    });
                    ModelClientError::Request(e.to_string())
                })?;

            let status = response.status();
            Span::current().set_attribute("http.response.status_code", status.as_u16() as i64);

            if !status.is_success() {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read error body".into());

                error!(%status, body = %error_text, "request failed");
                Span::current().set_status(opentelemetry::trace::Status::Error {
                    description: format!("HTTP {}", status).into(),
                });

                return Err(ModelClientError::Http {
                    status: status.as_u16(),
                    body: error_text,
                });
            }

            let response_text = response.text().await.map_err(|e| {
                ModelClientError::Request(format!("Failed to read response text: {e}"))
            })?;

            serde_json::from_str::<R>(&response_text).map_err(|e| {
                error!(%e, raw = %response_text, "deserialization error");
                Span::current().set_status(opentelemetry::trace::Status::Error {
                    description: "Deserialization Error".into(),
                });
                ModelClientError::Serialization(format!(
                    "Error decoding response body: {e}. Raw JSON was: '{response_text}'"
                ))
            })
        }
        .instrument(span)
        .await
    }

    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ModelClientError> {
        self.post("/api/chat", &request).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn default_base_url() {
        let client = OllamaClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.base_url, DEFAULT_OLLAMA_URL);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let cfg = ClientConfig {
            base_url: Some("http://gpu-box:11434/".into()),
            ..Default::default()
        };
        let client = OllamaClient::new(cfg).unwrap();
        assert_eq!(client.base_url, "http://gpu-box:11434");
    }

    #[test]
    fn invalid_header_name_is_a_config_error() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "v".to_string());
        let cfg = ClientConfig { extra_headers: Some(headers), ..Default::default() };
        assert!(matches!(OllamaClient::new(cfg), Err(ModelClientError::Config(_))));
    }
}
