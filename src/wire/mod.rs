use serde::{Deserialize, Serialize};

/// ========================================
/// Chat completion wire protocol
/// ========================================

/// What a synthesizer asks a chat model: one system instruction, one user
/// message, a sampling temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl ChatRequest {
    pub fn messages(&self) -> Vec<Message> {
        vec![
            Message { role: "system".into(), content: self.system.clone() },
            Message { role: "user".into(), content: self.user.clone() },
        ]
    }
}

/// OpenAI-compatible `/chat/completions` body.
#[derive(Debug, Serialize)]
pub struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Ollama `/api/chat` body.
#[derive(Debug, Serialize)]
pub struct OllamaChatBody<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
    pub stream: bool,
    pub options: OllamaOptions,
}

#[derive(Debug, Serialize)]
pub struct OllamaOptions {
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct OllamaChatResponse {
    pub message: Message,
}

/// ========================================
/// Image generation wire protocol
/// ========================================

#[derive(Debug, Serialize)]
pub struct ImageBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub n: u8,
    pub size: &'a str,
    pub response_format: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
pub struct ImageDatum {
    #[serde(default)]
    pub url: Option<String>,
}

/// ========================================
/// Error bodies
/// ========================================

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Object { message: Option<String> },
    Text(String),
}

/// Pull `error.message` (OpenAI) or `error` (Ollama) out of a failure body.
pub fn error_message(body: &str) -> Option<String> {
    let env: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let msg = match env.error {
        ErrorDetail::Object { message } => message?,
        ErrorDetail::Text(s) => s,
    };
    let msg = msg.trim();
    (!msg.is_empty()).then(|| msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_reads_openai_shape() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(error_message(body).as_deref(), Some("Incorrect API key provided"));
    }

    #[test]
    fn error_message_reads_ollama_shape() {
        let body = r#"{"error":"model 'llama9' not found"}"#;
        assert_eq!(error_message(body).as_deref(), Some("model 'llama9' not found"));
    }

    #[test]
    fn error_message_absent_for_other_bodies() {
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(error_message(r#"{"error":{"code":500}}"#), None);
        assert_eq!(error_message(r#"{"error":{"message":"  "}}"#), None);
    }

    #[test]
    fn chat_completion_tolerates_null_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let parsed: ChatCompletion = serde_json::from_str(body).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
