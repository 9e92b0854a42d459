use serde::{Deserialize, Serialize};

use crate::{InferenceOptions, Message, Tool};

#[derive(Serialize, Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<InferenceOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChatResponse {
    pub model: String,
    pub created_at: String,
    pub message: Message,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_eval_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_eval_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_duration: Option<u64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Role;

    #[test]
    fn request_omits_unset_fields() {
        let req = ChatRequest {
            model: "qwen3:0.6b".into(),
            messages: vec![Message::user("hi")],
            tools: None,
            options: None,
            stream: Some(false),
            keep_alive: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "qwen3:0.6b",
                "messages": [{"role": "user", "content": "hi"}],
                "stream": false
            })
        );
    }

    #[test]
    fn options_are_nested() {
        let req = ChatRequest {
            model: "m".into(),
            messages: vec![],
            tools: None,
            options: Some(InferenceOptions { temperature: Some(0.5), ..Default::default() }),
            stream: None,
            keep_alive: Some("5m".into()),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["options"], json!({"temperature": 0.5}));
        assert_eq!(value["keep_alive"], json!("5m"));
    }

    #[test]
    fn parses_ollama_response() {
        let raw = r#"{
            "model": "qwen3:0.6b",
            "created_at": "2025-01-01T00:00:00Z",
            "message": {"role": "assistant", "content": "Hello!"},
            "done": true,
            "done_reason": "stop",
            "eval_count": 3
        }"#;
        let resp: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.message.role, Role::Assistant);
        assert_eq!(resp.message.content.as_deref(), Some("Hello!"));
        assert_eq!(resp.eval_count, Some(3));
        assert!(resp.done);
    }
}
